//! Shared test helpers for HTTP integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, header};
use axum::response::Response;
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::domain::Task;
use taskboard::task::services::{CreateTaskRequest, TaskLifecycleService};
use taskboard::web::{self, AppState};
use tower::ServiceExt;

/// Test harness bundling the router with a service over the same store.
///
/// The repository handle is shared, so tasks seeded through the service
/// are visible to requests dispatched through the router.
pub struct TestApp {
    router: Router,
    /// Direct service handle for seeding and store assertions.
    pub service: TaskLifecycleService<InMemoryTaskRepository, DefaultClock>,
}

/// Provides a fresh application over an empty in-memory store.
#[fixture]
pub fn app() -> TestApp {
    let repository = InMemoryTaskRepository::new();
    let state =
        AppState::new(Arc::new(repository.clone())).expect("templates should compile");
    TestApp {
        router: web::build_router(state),
        service: TaskLifecycleService::new(Arc::new(repository), Arc::new(DefaultClock)),
    }
}

impl TestApp {
    /// Persists a task directly through the service.
    pub async fn seed_task(&self, title: &str) -> Task {
        self.service
            .create(CreateTaskRequest::new(title))
            .await
            .expect("seed creation should succeed")
    }

    /// Dispatches a GET request.
    pub async fn get(&self, path: &str) -> Response {
        self.request(Method::GET, path, None, None).await
    }

    /// Dispatches a GET request carrying a `Cookie` header.
    pub async fn get_with_cookie(&self, path: &str, cookie: &str) -> Response {
        self.request(Method::GET, path, None, Some(cookie)).await
    }

    /// Dispatches a POST request with a URL-encoded form body.
    pub async fn post_form(&self, path: &str, body: &str) -> Response {
        self.request(Method::POST, path, Some(body.to_owned()), None)
            .await
    }

    /// Dispatches a PUT request with an empty body.
    pub async fn put(&self, path: &str) -> Response {
        self.request(Method::PUT, path, None, None).await
    }

    /// Dispatches a request with the given method and empty body.
    pub async fn dispatch(&self, method: Method, path: &str) -> Response {
        self.request(method, path, None, None).await
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
        cookie: Option<&str>,
    ) -> Response {
        let mut builder = Request::builder().method(method).uri(path);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if let Some(value) = cookie {
            builder = builder.header(header::COOKIE, value);
        }
        let request = builder
            .body(body.map_or_else(Body::empty, Body::from))
            .expect("request should build");

        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request should succeed")
    }
}

/// Collects a response body into a string.
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

/// Returns the `Location` header of a redirect response.
pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
}

/// Returns the raw `Set-Cookie` header, if any.
pub fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(ToOwned::to_owned)
}

/// Extracts the `name=value` pair from a `Set-Cookie` header for replay in
/// a follow-up request.
pub fn cookie_pair(set_cookie_value: &str) -> String {
    set_cookie_value
        .split_once(';')
        .map_or(set_cookie_value, |(pair, _)| pair)
        .to_owned()
}

/// Counts non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

//! HTTP delivery layer for the task resource.
//!
//! An explicit axum route table over the task lifecycle service:
//!
//! - `GET /tasks` — list
//! - `GET /tasks/new` — new-task form
//! - `POST /tasks` — create
//! - `GET /tasks/{id}` — show
//! - `PUT /tasks/{id}/finish` — finish
//! - `GET /health` — liveness probe
//!
//! Handlers render HTML through [`templates`], carry one-shot confirmation
//! notices through [`flash`], and link pages through the literal path
//! helpers in [`paths`].

pub mod config;
pub mod error;
pub mod flash;
pub mod handlers;
pub mod paths;
pub mod templates;

pub use config::{ConfigError, ServerConfig};
pub use handlers::AppState;

use crate::task::ports::TaskRepository;
use axum::Router;
use axum::routing::{get, put};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Builds the application route table over the given handler state.
pub fn build_router<R>(state: AppState<R>) -> Router
where
    R: TaskRepository + 'static,
{
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            paths::TASKS_PATH,
            get(handlers::list_tasks::<R>).post(handlers::create_task::<R>),
        )
        .route(paths::NEW_TASK_PATH, get(handlers::new_task::<R>))
        .route("/tasks/{id}", get(handlers::show_task::<R>))
        .route("/tasks/{id}/finish", put(handlers::finish_task::<R>))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds the listener and serves the router until the process exits.
///
/// # Errors
///
/// Returns an [`std::io::Error`] when binding or serving fails.
pub async fn serve(router: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, router).await
}

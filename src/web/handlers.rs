//! HTTP request handlers for the task resource.

use axum::Json;
use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use mockable::DefaultClock;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::task::domain::TaskId;
use crate::task::ports::TaskRepository;
use crate::task::services::{CreateTaskRequest, TaskLifecycleError, TaskLifecycleService};
use crate::web::error::WebError;
use crate::web::templates::{TaskFormView, TaskView, TemplateEngine};
use crate::web::{flash, paths};

const CREATED_NOTICE: &str = "Task was successfully created.";
const FINISHED_NOTICE: &str = "Task was successfully finished.";
const BLANK_TITLE_MESSAGE: &str = "Title can't be blank";

/// Shared handler state: the lifecycle service and compiled templates.
pub struct AppState<R>
where
    R: TaskRepository,
{
    service: TaskLifecycleService<R, DefaultClock>,
    templates: Arc<TemplateEngine>,
}

impl<R> Clone for AppState<R>
where
    R: TaskRepository,
{
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            templates: Arc::clone(&self.templates),
        }
    }
}

impl<R> AppState<R>
where
    R: TaskRepository,
{
    /// Builds handler state over the given repository.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when the built-in templates fail to
    /// compile.
    pub fn new(repository: Arc<R>) -> Result<Self, minijinja::Error> {
        Ok(Self {
            service: TaskLifecycleService::new(repository, Arc::new(DefaultClock)),
            templates: Arc::new(TemplateEngine::new()?),
        })
    }
}

/// Form body accepted by the create handler.
#[derive(Debug, Deserialize)]
pub struct TaskForm {
    /// Submitted task title.
    #[serde(default)]
    pub title: String,
}

/// `GET /tasks` — renders the task list.
///
/// Consumes a pending flash notice: the notice is rendered into the page
/// and a clearing cookie is sent alongside.
///
/// # Errors
///
/// Returns [`WebError`] when listing or rendering fails.
pub async fn list_tasks<R>(
    State(state): State<AppState<R>>,
    headers: HeaderMap,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
{
    let tasks = state.service.list().await?;
    let views: Vec<TaskView> = tasks.iter().map(TaskView::from_task).collect();
    let notice = flash::read(&headers);
    let body = state.templates.render_index(&views, notice.as_deref())?;

    if notice.is_some() {
        let clear = AppendHeaders([(header::SET_COOKIE, flash::clear_header_value())]);
        Ok((clear, Html(body)).into_response())
    } else {
        Ok(Html(body).into_response())
    }
}

/// `GET /tasks/new` — renders the new-task form.
///
/// The rendered draft is an empty, unsaved task; only a valid submission
/// to the create handler persists anything.
///
/// # Errors
///
/// Returns [`WebError`] when rendering fails.
pub async fn new_task<R>(State(state): State<AppState<R>>) -> Result<Html<String>, WebError>
where
    R: TaskRepository + 'static,
{
    let body = state.templates.render_new(&TaskFormView::default())?;
    Ok(Html(body))
}

/// `POST /tasks` — creates a task from the submitted form.
///
/// A blank title re-renders the form with the rejected draft (HTTP 200,
/// nothing persisted). A valid title persists the task and redirects to
/// the list with a confirmation notice.
///
/// # Errors
///
/// Returns [`WebError`] when persistence or rendering fails.
pub async fn create_task<R>(
    State(state): State<AppState<R>>,
    Form(form): Form<TaskForm>,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
{
    match state
        .service
        .create(CreateTaskRequest::new(form.title.clone()))
        .await
    {
        Ok(_) => Ok(redirect_with_notice(CREATED_NOTICE)),
        Err(TaskLifecycleError::Domain(_)) => {
            let view = TaskFormView::with_error(form.title, BLANK_TITLE_MESSAGE);
            let body = state.templates.render_new(&view)?;
            Ok(Html(body).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

/// `GET /tasks/{id}` — renders the task detail page.
///
/// # Errors
///
/// Returns [`WebError`] when lookup or rendering fails.
pub async fn show_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
{
    let Some(task) = state.service.find_by_id(TaskId::from_i64(id)).await? else {
        return Ok(not_found());
    };
    let body = state.templates.render_show(&TaskView::from_task(&task))?;
    Ok(Html(body).into_response())
}

/// `PUT /tasks/{id}/finish` — marks the task finished.
///
/// Redirects to the list with a confirmation notice. Finishing an
/// already-finished task succeeds and leaves it finished.
///
/// # Errors
///
/// Returns [`WebError`] when lookup or persistence fails.
pub async fn finish_task<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<i64>,
) -> Result<Response, WebError>
where
    R: TaskRepository + 'static,
{
    if state.service.finish(TaskId::from_i64(id)).await?.is_none() {
        return Ok(not_found());
    }
    Ok(redirect_with_notice(FINISHED_NOTICE))
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn redirect_with_notice(notice: &str) -> Response {
    let set = AppendHeaders([(header::SET_COOKIE, flash::set_header_value(notice))]);
    (set, Redirect::to(paths::TASKS_PATH)).into_response()
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Task not found").into_response()
}

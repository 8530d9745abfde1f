//! Verb/path recognition tests for the route table.

use super::helpers::{TestApp, app, body_text};
use axum::http::{Method, StatusCode};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_tasks_is_recognized(app: TestApp) {
    let response = app.get("/tasks").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_tasks_new_is_recognized(app: TestApp) {
    let response = app.get("/tasks/new").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn post_tasks_is_recognized(app: TestApp) {
    let response = app.post_form("/tasks", "title=Buy+milk").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_task_by_id_is_recognized(app: TestApp) {
    app.seed_task("Buy milk").await;
    let response = app.get("/tasks/1").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn put_task_finish_is_recognized(app: TestApp) {
    app.seed_task("Buy milk").await;
    let response = app.put("/tasks/1/finish").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_on_a_task_is_rejected(app: TestApp) {
    app.seed_task("Buy milk").await;
    let response = app.dispatch(Method::DELETE, "/tasks/1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_on_the_finish_action_is_rejected(app: TestApp) {
    app.seed_task("Buy milk").await;
    let response = app.get("/tasks/1/finish").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_non_numeric_task_id_is_rejected(app: TestApp) {
    let response = app.get("/tasks/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_paths_are_not_found(app: TestApp) {
    let response = app.get("/projects").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok(app: TestApp) {
    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("\"status\":\"ok\""));
}

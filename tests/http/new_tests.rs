//! New-task form rendering tests.

use super::helpers::{TestApp, app, body_text};
use axum::http::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_form_posts_to_the_collection_path(app: TestApp) {
    let response = app.get("/tasks/new").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("<form method=\"post\" action=\"/tasks\">"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_form_has_a_title_input_and_submit(app: TestApp) {
    let body = body_text(app.get("/tasks/new").await).await;

    assert!(body.contains("<input id=\"task_title\" type=\"text\" name=\"title\""));
    assert!(body.contains("<input type=\"submit\""));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn the_form_links_back_to_the_list(app: TestApp) {
    let body = body_text(app.get("/tasks/new").await).await;

    assert!(body.contains("<a href=\"/tasks\">"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rendering_the_form_persists_nothing(app: TestApp) {
    app.get("/tasks/new").await;

    let tasks = app.service.list().await.expect("listing should succeed");
    assert!(tasks.is_empty());
}

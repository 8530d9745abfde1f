//! Finish handler tests: transition, idempotency, missing ids.

use super::helpers::{TestApp, app, location, set_cookie};
use axum::http::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finishing_redirects_to_the_list(app: TestApp) {
    app.seed_task("Buy milk").await;

    let response = app.put("/tasks/1/finish").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/tasks"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finishing_sets_a_flash_notice(app: TestApp) {
    app.seed_task("Buy milk").await;

    let response = app.put("/tasks/1/finish").await;

    let cookie = set_cookie(&response).expect("a flash cookie should be set");
    assert!(cookie.starts_with("flash_notice="));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finishing_marks_the_stored_task_finished(app: TestApp) {
    let task = app.seed_task("Buy milk").await;

    app.put("/tasks/1/finish").await;

    let stored = app
        .service
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert!(stored.is_finished());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finishing_leaves_the_count_unchanged(app: TestApp) {
    app.seed_task("Buy milk").await;

    app.put("/tasks/1/finish").await;

    let tasks = app.service.list().await.expect("listing should succeed");
    assert_eq!(tasks.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finishing_twice_leaves_the_task_finished(app: TestApp) {
    let task = app.seed_task("Buy milk").await;

    let first = app.put("/tasks/1/finish").await;
    let second = app.put("/tasks/1/finish").await;

    assert_eq!(first.status(), StatusCode::SEE_OTHER);
    assert_eq!(second.status(), StatusCode::SEE_OTHER);
    let stored = app
        .service
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert!(stored.is_finished());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn finishing_a_missing_task_is_not_found(app: TestApp) {
    let response = app.put("/tasks/404/finish").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

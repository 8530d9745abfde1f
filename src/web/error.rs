//! Error handling for the web layer.

use crate::task::services::TaskLifecycleError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced by request handlers.
///
/// Validation failures never reach this type; they are recovered locally
/// by re-rendering the form. What remains is infrastructure failure.
#[derive(Debug, Error)]
pub enum WebError {
    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// A lifecycle service call failed.
    #[error(transparent)]
    Lifecycle(#[from] TaskLifecycleError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("Internal Server Error"),
        )
            .into_response()
    }
}

//! Error types for the snippet service.
//!
//! Errors are rendered as simple HTML error pages rather than JSON,
//! since this is a user-facing HTML service. Internal detail is logged
//! server-side and never written into a response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, Markup, html};

/// Snippet service error type.
#[derive(Debug, thiserror::Error)]
pub enum SnipboxError {
    /// Missing route, invalid id, or a snippet that is absent or expired.
    #[error("not found")]
    NotFound,

    /// Store query error (connectivity, constraint, decode).
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for SnipboxError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "The page you were looking for does not exist.".to_string(),
            ),
            Self::Database(err) => {
                tracing::error!(error = %err, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Something went wrong. Please try again later.".to_string(),
                )
            }
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "Something went wrong. Please try again later.".to_string(),
                )
            }
        };

        (status, error_page(title, &message)).into_response()
    }
}

/// Render a standalone HTML error page.
///
/// Also used by the panic-recovery layer and the create handler's
/// method gate, which build their responses outside `SnipboxError`.
pub(crate) fn error_page(title: &str, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " — Snipbox" }
                meta name="robots" content="noindex";
                style { (maud::PreEscaped(crate::render::components::ERROR_CSS)) }
            }
            body {
                main class="error-page" {
                    h1 { (title) }
                    p { (message) }
                    a href="/" { "Back to the home page" }
                }
            }
        }
    }
}

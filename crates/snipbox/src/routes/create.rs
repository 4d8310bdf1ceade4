//! Snippet create handler.

use axum::extract::State;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Redirect, Response};

use crate::error::{SnipboxError, error_page};
use crate::query;
use crate::state::AppState;

/// Placeholder payload inserted on every POST. Real form parsing is a
/// later extension; the contract here is method gate -> insert -> redirect.
const PLACEHOLDER_TITLE: &str = "O snail";
const PLACEHOLDER_CONTENT: &str = "O snail\nClimb Mount Fuji,\nBut slowly, slowly!\n\n– Kobayashi Issa";
const PLACEHOLDER_EXPIRY_DAYS: i64 = 7;

/// Insert a new snippet and redirect to its detail page.
///
/// The route is registered for every method; anything but POST gets a
/// 405 with an `Allow: POST` header.
pub async fn snippet_create(
    State(state): State<AppState>,
    method: Method,
) -> Result<Response, SnipboxError> {
    if method != Method::POST {
        return Ok(method_not_allowed());
    }

    let id = query::insert_snippet(
        &state.db,
        PLACEHOLDER_TITLE,
        PLACEHOLDER_CONTENT,
        PLACEHOLDER_EXPIRY_DAYS,
    )
    .await?;

    tracing::info!(id, "snippet created");

    Ok(Redirect::to(&format!("/snippet/view?id={id}")).into_response())
}

/// Build the 405 response for non-POST requests.
fn method_not_allowed() -> Response {
    let body = error_page(
        "Method Not Allowed",
        "Snippets can only be created with a POST request.",
    );
    let mut response = (StatusCode::METHOD_NOT_ALLOWED, body).into_response();
    response
        .headers_mut()
        .insert(header::ALLOW, HeaderValue::from_static("POST"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = method_not_allowed();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers().get(header::ALLOW).unwrap(), "POST");
    }
}

//! Route definitions for the snippet service.
//!
//! ## Routes
//!
//! - `GET /` - Home page listing recent snippets
//! - `GET /snippet/view?id=<int>` - Detail page for one snippet
//! - `POST /snippet/create` - Insert a snippet, redirect to its view URL
//! - `GET /static/*` - Static assets
//!
//! Anything else falls through to the 404 page. The create route is
//! registered for every method; the POST gate lives inside the handler.

mod create;
mod home;
mod view;

use axum::Router;
use axum::routing::{any, get};
use tower_http::services::ServeDir;

use crate::error::SnipboxError;
use crate::state::AppState;

/// Build the complete service router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(home::home_page))
        .route("/snippet/view", get(view::snippet_view))
        .route("/snippet/create", any(create::snippet_create))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)
        .with_state(state)
}

/// Render the 404 page for any unmatched path.
async fn not_found() -> SnipboxError {
    SnipboxError::NotFound
}

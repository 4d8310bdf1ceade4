//! Home page handler, lists the most recent snippets.

use axum::extract::State;
use maud::Markup;

use crate::error::SnipboxError;
use crate::query;
use crate::render;
use crate::state::AppState;

/// How many snippets the home page shows.
const LATEST_LIMIT: i64 = 10;

/// Render the home page listing.
pub async fn home_page(State(state): State<AppState>) -> Result<Markup, SnipboxError> {
    let snippets = query::latest_snippets(&state.db, LATEST_LIMIT).await?;
    Ok(render::home::render(&snippets, &state.config.site_name))
}

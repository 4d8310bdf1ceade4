//! Snippet detail handler.

use axum::extract::{Query, State};
use maud::Markup;
use serde::Deserialize;

use crate::error::SnipboxError;
use crate::query;
use crate::render;
use crate::state::AppState;

/// Query parameters for the view route.
///
/// The id stays a string here so a missing, non-numeric, or out-of-range
/// value all take the same path: a 404, indistinguishable from a missing
/// row. An integer field would make axum reject bad input with a 400.
#[derive(Debug, Deserialize)]
pub struct ViewParams {
    pub id: Option<String>,
}

/// Render the detail page for one snippet.
pub async fn snippet_view(
    State(state): State<AppState>,
    Query(params): Query<ViewParams>,
) -> Result<Markup, SnipboxError> {
    let id = parse_id(params.id.as_deref()).ok_or(SnipboxError::NotFound)?;

    let snippet = query::fetch_snippet(&state.db, id)
        .await?
        .ok_or(SnipboxError::NotFound)?;

    Ok(render::view::render(&snippet, &state.config.site_name))
}

/// Parse a raw id parameter, accepting only integers >= 1.
fn parse_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.parse::<i64>().ok()).filter(|id| *id >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_positive_integers() {
        assert_eq!(parse_id(Some("1")), Some(1));
        assert_eq!(parse_id(Some("42")), Some(42));
    }

    #[test]
    fn parse_id_rejects_zero_and_negatives() {
        assert_eq!(parse_id(Some("0")), None);
        assert_eq!(parse_id(Some("-3")), None);
    }

    #[test]
    fn parse_id_rejects_non_numeric() {
        assert_eq!(parse_id(Some("abc")), None);
        assert_eq!(parse_id(Some("1.5")), None);
        assert_eq!(parse_id(Some("")), None);
    }

    #[test]
    fn parse_id_rejects_missing() {
        assert_eq!(parse_id(None), None);
    }
}

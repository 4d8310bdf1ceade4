//! Home page listing of the most recent snippets.

use maud::{Markup, html};

use super::components::{format_time, page_shell};
use crate::query::Snippet;

/// Render the home page listing.
pub fn render(snippets: &[Snippet], site_name: &str) -> Markup {
    let body = html! {
        h2 { "Latest snippets" }
        @if snippets.is_empty() {
            p class="empty" { "There's nothing to see here... yet!" }
        } @else {
            div class="snippet-list" {
                @for snippet in snippets {
                    div class="snippet-row" {
                        a href={ "/snippet/view?id=" (snippet.id) } { (snippet.title) }
                        span class="snippet-id" { "#" (snippet.id) }
                        time { (format_time(&snippet.created)) }
                    }
                }
            }
        }
    };

    page_shell("Home", site_name, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn snippet(id: i64, title: &str) -> Snippet {
        let created = Utc::now();
        Snippet {
            id,
            title: title.to_string(),
            content: "body".to_string(),
            created,
            expires: created + Duration::days(7),
        }
    }

    #[test]
    fn render_lists_snippets_with_view_links() {
        let snippets = vec![snippet(2, "second"), snippet(1, "first")];
        let html = render(&snippets, "Snipbox").into_string();
        assert!(html.contains(r#"href="/snippet/view?id=2""#));
        assert!(html.contains(r#"href="/snippet/view?id=1""#));
        assert!(html.contains("second"));
        assert!(html.contains("first"));
    }

    #[test]
    fn render_empty_shows_placeholder() {
        let html = render(&[], "Snipbox").into_string();
        assert!(html.contains("nothing to see here"));
    }

    #[test]
    fn render_escapes_titles() {
        let snippets = vec![snippet(1, "<b>bold</b>")];
        let html = render(&snippets, "Snipbox").into_string();
        assert!(!html.contains("<b>bold</b>"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    }
}

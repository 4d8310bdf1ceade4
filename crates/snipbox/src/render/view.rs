//! Snippet detail page.

use maud::{Markup, html};

use super::components::{format_time, page_shell};
use crate::query::Snippet;

/// Render the detail page for a single snippet.
pub fn render(snippet: &Snippet, site_name: &str) -> Markup {
    let body = html! {
        div class="snippet-card" {
            div class="snippet-title" { (snippet.title) }
            span class="snippet-id" { "#" (snippet.id) }
            pre class="snippet-content" { (snippet.content) }
            div class="snippet-meta" {
                span { "Created " (format_time(&snippet.created)) }
                span { "Expires " (format_time(&snippet.expires)) }
            }
        }
    };

    page_shell(&snippet.title, site_name, body)
}

//! Shared HTML components used across all snippet pages.
//!
//! These are maud functions that return `Markup` fragments for composition
//! into full pages: the page shell (base layout), the navigation partial,
//! and small formatting helpers.

use chrono::{DateTime, Utc};
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS for all pages.
///
/// Small flat design; no external stylesheet dependency, so pages render
/// correctly even when `/static` has nothing to serve.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#1a1a1a;--fg2:#555;--fg3:#999;--accent:#0a6e4b;--border:rgba(10,110,75,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
main{max-width:720px;width:100%;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
nav{max-width:720px;width:100%;display:flex;align-items:center;gap:1.25rem;padding-bottom:1.25rem;margin-bottom:1.5rem;border-bottom:1px solid var(--border)}
nav .brand{font-weight:700;font-size:1.15rem;color:var(--fg)}
nav a{font-size:.95rem}
nav form{margin-left:auto}
nav button{background:var(--accent);color:#fff;border:none;border-radius:6px;padding:.4rem .85rem;font-size:.9rem;cursor:pointer}
nav button:hover{opacity:.9}
.snippet-card{padding:1.25rem 1.5rem;border:1px solid var(--border);border-radius:10px;background:#fff}
.snippet-title{font-size:1.35rem;font-weight:700;letter-spacing:-.01em}
.snippet-id{font-family:var(--mono);font-size:.8rem;color:var(--fg3)}
.snippet-content{white-space:pre-wrap;word-break:break-word;font-size:1rem;line-height:1.7;color:var(--fg);margin:1rem 0;font-family:var(--mono)}
.snippet-meta{display:flex;justify-content:space-between;flex-wrap:wrap;gap:.5rem;font-size:.85rem;color:var(--fg3);border-top:1px solid var(--border);padding-top:.75rem}
.snippet-list{display:flex;flex-direction:column;gap:.6rem}
.snippet-row{display:flex;align-items:baseline;gap:.85rem;padding:.7rem 1rem;border:1px solid var(--border);border-radius:8px;background:#fff}
.snippet-row time{margin-left:auto;font-size:.8rem;color:var(--fg3);white-space:nowrap}
.empty{color:var(--fg2);padding:2rem 0;text-align:center}
.footer{margin-top:2rem;font-size:.85rem;color:var(--fg3)}
"#;

/// CSS for standalone error pages.
pub const ERROR_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:#1a1a1a;background:#fafafa;min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem}
.error-page{text-align:center}
.error-page h1{font-size:1.75rem;margin-bottom:.5rem}
.error-page p{color:#555;margin-bottom:1rem}
.error-page a{color:#0a6e4b;text-decoration:none}
.error-page a:hover{text-decoration:underline}
"#;

/// Render the full HTML page shell with `<head>`, navigation, and footer.
pub fn page_shell(page_title: &str, site_name: &str, body_content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page_title) " — " (site_name) }
                link rel="icon" type="image/svg+xml" href="/static/favicon.svg";
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (nav_bar(site_name))
                main { (body_content) }
                footer class="footer" {
                    "Snippets expire automatically; nothing here is forever."
                }
            }
        }
    }
}

/// Navigation partial shown on every page.
///
/// The create button is a form because snippet creation is POST-only.
pub fn nav_bar(site_name: &str) -> Markup {
    html! {
        nav {
            a class="brand" href="/" { (site_name) }
            a href="/" { "Home" }
            form action="/snippet/create" method="post" {
                button type="submit" { "New snippet" }
            }
        }
    }
}

/// Format a timestamp for display, e.g. "23 Aug 2026 at 14:05".
pub fn format_time(dt: &DateTime<Utc>) -> String {
    dt.format("%d %b %Y at %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_time_human_readable() {
        let dt = Utc.with_ymd_and_hms(2026, 8, 23, 14, 5, 0).unwrap();
        assert_eq!(format_time(&dt), "23 Aug 2026 at 14:05");
    }

    #[test]
    fn page_shell_includes_title_and_nav() {
        let markup = page_shell("Home", "Snipbox", html! { p { "hello" } });
        let html = markup.into_string();
        assert!(html.contains("<title>Home — Snipbox</title>"));
        assert!(html.contains("<nav>"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn page_shell_escapes_dynamic_values() {
        let markup = page_shell("<script>", "Snipbox", html! {});
        let html = markup.into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn nav_bar_posts_to_create() {
        let html = nav_bar("Snipbox").into_string();
        assert!(html.contains(r#"action="/snippet/create""#));
        assert!(html.contains(r#"method="post""#));
    }
}

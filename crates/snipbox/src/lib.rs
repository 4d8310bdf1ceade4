//! Snipbox - a small server-rendered web application for text snippets.
//!
//! Snippets are titled, timestamped text entries that expire after a fixed
//! number of days. The app serves a home page listing the most recent
//! non-expired snippets, a detail page for a single snippet, and a create
//! endpoint that inserts a new snippet and redirects to its detail page.
//!
//! # Architecture
//!
//! - **Query**: parameterized SQLite access through a shared sqlx pool
//! - **Render**: HTML pages composed with maud (compile-time templates);
//!   a base layout shell plus a navigation partial and per-page bodies
//! - **Routes**: one handler per URL, orchestrating query + render
//! - **Middleware**: panic recovery, request logging, and security headers
//!   wrapped around the whole router in fixed order

pub mod config;
pub mod error;
pub mod middleware;
pub mod query;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;

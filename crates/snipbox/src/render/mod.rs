//! HTML rendering for snippet pages.
//!
//! Pages are composed from a base layout shell, a navigation partial,
//! and a page-specific body, all built with [maud](https://maud.lambda.xyz/)
//! for compile-time HTML generation with automatic escaping. The fragment
//! set for each route is fixed at compile time, so a missing or malformed
//! fragment is a build error rather than a runtime failure.

pub mod components;
pub mod home;
pub mod view;

//! Cross-cutting request middleware.
//!
//! Three independent wrappers applied around the whole router in fixed
//! order, outermost to innermost: panic recovery, request logging,
//! security headers. [`wrap`] composes them at startup.

use std::any::Any;
use std::net::SocketAddr;

use axum::Router;
use axum::extract::{ConnectInfo, Request};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use crate::error::error_page;

/// Wrap a router with the full middleware chain.
///
/// Layers added later run outermost, so panic recovery is added last:
/// it has to catch faults from every other layer.
pub fn wrap(router: Router) -> Router {
    router
        .layer(axum::middleware::from_fn(security_headers))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Set the fixed security headers on every response.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_security_headers(response.headers_mut());
    response
}

/// The fixed header set: content-type sniffing protection, frame
/// embedding restriction, referrer policy.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("deny"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("origin-when-cross-origin"),
    );
}

/// Build the per-request tracing span: method, path, remote address.
///
/// The remote address comes from `ConnectInfo` when the server is started
/// with `into_make_service_with_connect_info`; it is absent under test.
fn request_span(request: &Request) -> Span {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    tracing::span!(
        tracing::Level::INFO,
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        remote = %remote,
    )
}

/// Convert an unrecovered panic into a logged 500 response.
///
/// The response forces connection teardown and carries the security
/// headers itself: the header layer sits inside this one and never gets
/// to run once unwinding has started.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "non-string panic payload"
    };

    tracing::error!(panic = %detail, "request handler panicked");

    let body = error_page(
        "Internal Server Error",
        "Something went wrong. Please try again later.",
    );
    let mut response = (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
    response
        .headers_mut()
        .insert(header::CONNECTION, HeaderValue::from_static("close"));
    apply_security_headers(response.headers_mut());
    response
}

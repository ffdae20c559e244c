//! Request logging middleware.

use axum::extract::MatchedPath;
use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Logs one line per completed request: method, route template, correlation
/// id, status, and latency.
///
/// Runs inside the request-id layers, so `x-request-id` is already set on the
/// request. The route template (`/orders/:orderId`) is logged next to the
/// concrete URI so lines for the same endpoint aggregate under one key.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_owned());
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_owned();

    let start = Instant::now();
    let response = next.run(request).await;
    let latency = start.elapsed();

    info!(
        target: "http",
        method = %method,
        uri = %uri,
        route = route.as_deref().unwrap_or("unmatched"),
        request_id = %request_id,
        status = %response.status().as_u16(),
        latency_ms = %latency.as_millis(),
        "Request completed"
    );

    response
}

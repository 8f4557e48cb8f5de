//! Request/response logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{Instrument, info_span};

use super::RequestId;

/// Logs one line per request and one per response, inside a span carrying
/// the request id. Server errors are logged at error level, client errors
/// at warn level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<RequestId>()
        .map(|r| r.0.clone())
        .unwrap_or_else(|| "unknown".to_string());

    let span = info_span!(
        "http_request",
        method = %method,
        path = %path,
        request_id = %request_id
    );

    async move {
        tracing::debug!("Request received");

        let start = Instant::now();
        let response = next.run(request).await;
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();

        if response.status().is_server_error() {
            tracing::error!(status, duration_ms, "Response sent");
        } else if response.status().is_client_error() {
            tracing::warn!(status, duration_ms, "Response sent");
        } else {
            tracing::info!(status, duration_ms, "Response sent");
        }

        response
    }
    .instrument(span)
    .await
}

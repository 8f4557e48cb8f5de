//! Correlation id for every request, carried in `x-request-id`.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client supplied id that is trusted as is.
const MAX_INCOMING_LEN: usize = 128;

/// Id of the current request, readable from request extensions.
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

fn incoming_id(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)?
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|id| !id.is_empty() && id.len() <= MAX_INCOMING_LEN)
}

/// Reuses a sane incoming `x-request-id` or mints a UUID v4, exposes it as a
/// [`RequestId`] extension and echoes it on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let id = incoming_id(&request)
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let header = HeaderValue::from_str(&id).ok();

    request.extensions_mut().insert(RequestId(id));
    let mut response = next.run(request).await;

    if let Some(value) = header {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

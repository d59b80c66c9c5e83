//! Request ID Middleware
//!
//! Tags every lookup request with an id that is echoed in the `x-request-id`
//! response header, carried by the request's tracing span and reported in
//! error envelopes.

use axum::{
    body::Body,
    http::{header::HeaderName, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::Instrument;

use crate::shared::request_id::RequestId;

/// Header name for request ID
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Middleware that assigns a request ID to each request
///
/// A well-formed incoming `x-request-id` is reused; anything else is replaced
/// with a fresh UUID.
pub async fn request_id_middleware(mut request: Request<Body>, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(RequestId::parse)
        .unwrap_or_default();

    let span = tracing::info_span!(
        "contract_request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    );

    request.extensions_mut().insert(request_id.clone());

    let mut response = request_id
        .clone()
        .scope(next.run(request))
        .instrument(span)
        .await;

    if let Ok(header_value) = HeaderValue::from_str(request_id.as_str()) {
        response.headers_mut().insert(REQUEST_ID_HEADER.clone(), header_value);
    }

    response
}

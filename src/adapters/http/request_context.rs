//! Per-request context passed into command handlers.

use axum::http::HeaderMap;

use crate::domain::foundation::CommandMetadata;

/// Header set by the request-id middleware.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds command metadata, correlating events with the request id when
/// one is present.
pub fn command_metadata(headers: &HeaderMap) -> CommandMetadata {
    let metadata = CommandMetadata::new().with_source("http");
    match headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
    {
        Some(request_id) => metadata.with_correlation_id(request_id),
        None => metadata,
    }
}

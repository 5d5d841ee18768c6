//! Request media-type negotiation
//!
//! Middleware guards that run before any handler or store access: every API
//! request must be able to accept `application/json` responses, and the
//! body-carrying verbs must declare an `application/json` payload.

use crate::error::ApiError;
use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Whether an `Accept` header value allows `application/json` responses
///
/// Absent headers and wildcard entries are acceptable; quality values and
/// other media-type parameters are ignored.
pub fn accepts_json(header: Option<&str>) -> bool {
    let header = match header {
        Some(value) => value,
        None => return true,
    };
    header.split(',').any(|item| {
        let media_type = item.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        matches!(
            media_type.as_str(),
            "application/json" | "application/*" | "*/*"
        )
    })
}

/// Whether a `Content-Type` header value declares a JSON payload
///
/// Parameters such as `charset` are stripped before comparing.
pub fn payload_is_json(header: Option<&str>) -> bool {
    match header {
        Some(value) => {
            let media_type = value.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
            media_type == "application/json"
        }
        None => false,
    }
}

/// Reject requests whose `Accept` header cannot take JSON responses
pub async fn require_json_accept(request: Request, next: Next) -> Response {
    let accept = request
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok());
    if !accepts_json(accept) {
        return ApiError::NotAcceptable.into_response();
    }
    next.run(request).await
}

/// Reject body-carrying requests that do not declare a JSON payload
pub async fn require_json_content(request: Request, next: Next) -> Response {
    if matches!(request.method().as_str(), "POST" | "PUT") {
        let content_type = request
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());
        if !payload_is_json(content_type) {
            return ApiError::UnsupportedMediaType.into_response();
        }
    }
    next.run(request).await
}

//! Server error types

use crate::validation::ValidationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use posts_store::StoreError;
use serde_json::json;
use thiserror::Error;

/// Errors a request can surface, mapped onto the HTTP error taxonomy
///
/// Every variant renders as a `{"message": ...}` JSON body whose text is
/// the variant's display form.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller cannot accept JSON responses
    #[error("Request must accept application/json data")]
    NotAcceptable,

    /// Caller did not declare a JSON request body
    #[error("Request must contain application/json data")]
    UnsupportedMediaType,

    /// Referenced post id is not in the store
    #[error("Could not find post with id {0}")]
    PostNotFound(i64),

    /// Request payload failed schema validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Persistence failure
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotAcceptable => StatusCode::NOT_ACCEPTABLE,
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::PostNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(err) = &self {
            tracing::error!("store failure: {}", err);
        }
        let body = json!({ "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_acceptable_message() {
        assert_eq!(
            ApiError::NotAcceptable.to_string(),
            "Request must accept application/json data"
        );
    }

    #[test]
    fn test_unsupported_media_type_message() {
        assert_eq!(
            ApiError::UnsupportedMediaType.to_string(),
            "Request must contain application/json data"
        );
    }

    #[test]
    fn test_not_found_message_includes_id() {
        assert_eq!(
            ApiError::PostNotFound(42).to_string(),
            "Could not find post with id 42"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = ApiError::from(ValidationError::MissingProperty("body"));
        assert_eq!(err.to_string(), "'body' is a required property");
    }

    #[test]
    fn test_store_message_passes_through() {
        let err = ApiError::from(StoreError::Other("backend unavailable".to_string()));
        assert_eq!(err.to_string(), "Store error: backend unavailable");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotAcceptable.status(), StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            ApiError::UnsupportedMediaType.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(ApiError::PostNotFound(1).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(ValidationError::MissingProperty("title")).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::from(StoreError::Other("x".to_string())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_into_response_uses_mapped_status() {
        let response = ApiError::PostNotFound(9).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::NotAcceptable.into_response();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApiError>();
    }
}

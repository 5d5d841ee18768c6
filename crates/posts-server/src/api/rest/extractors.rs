//! Custom request extractors
//!
//! Reads request bodies as raw JSON ahead of schema validation, keeping
//! rejection bodies in the API's `{"message"}` shape.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// Raw JSON body extractor
///
/// Pulls the payload as an untyped `serde_json::Value`; schema checks
/// happen in the validation layer, not during extraction.
pub struct JsonBody(pub serde_json::Value);

#[axum::async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<serde_json::Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let (status, message) = match rejection {
                    JsonRejection::JsonSyntaxError(err) => {
                        (StatusCode::BAD_REQUEST, format!("JSON syntax error: {}", err))
                    }
                    JsonRejection::JsonDataError(err) => {
                        (StatusCode::BAD_REQUEST, format!("Invalid JSON data: {}", err))
                    }
                    JsonRejection::MissingJsonContentType(_) => (
                        StatusCode::UNSUPPORTED_MEDIA_TYPE,
                        "Request must contain application/json data".to_string(),
                    ),
                    other => (
                        StatusCode::BAD_REQUEST,
                        format!("Failed to read JSON body: {}", other),
                    ),
                };
                Err((status, Json(json!({ "message": message }))))
            }
        }
    }
}

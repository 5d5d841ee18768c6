//! Post payload validation
//!
//! The post schema is small and fixed (required string fields `title` and
//! `body`), so validation is an explicit structural check rather than a
//! generic schema engine. Exactly one violation is reported per attempt:
//! type violations win over missing fields, and `title` is checked before
//! `body` within each class.

use posts_store::PostDraft;
use serde_json::{Map, Value};
use thiserror::Error;

/// Fields every post payload must carry, in reporting order
const REQUIRED_FIELDS: [&str; 2] = ["title", "body"];

/// A schema violation in an incoming post payload
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Payload is not a JSON object
    #[error("{0} is not of type 'object'")]
    NotAnObject(Value),

    /// A required field holds a non-string value
    #[error("{0} is not of type 'string'")]
    NotAString(Value),

    /// A required field is missing entirely
    #[error("'{0}' is a required property")]
    MissingProperty(&'static str),
}

/// Check a decoded JSON payload against the post schema
///
/// Unknown keys are ignored and nothing is coerced; `"32"` is a valid
/// title, `32` is not.
pub fn validate_post(payload: &Value) -> Result<PostDraft, ValidationError> {
    let object = match payload.as_object() {
        Some(object) => object,
        None => return Err(ValidationError::NotAnObject(payload.clone())),
    };

    let title = string_field(object, REQUIRED_FIELDS[0])?;
    let body = string_field(object, REQUIRED_FIELDS[1])?;

    match (title, body) {
        (Some(title), Some(body)) => Ok(PostDraft {
            title: title.to_string(),
            body: body.to_string(),
        }),
        (None, _) => Err(ValidationError::MissingProperty(REQUIRED_FIELDS[0])),
        (_, None) => Err(ValidationError::MissingProperty(REQUIRED_FIELDS[1])),
    }
}

/// Fetch `field` as a string, failing only on a present non-string value
fn string_field<'a>(
    object: &'a Map<String, Value>,
    field: &'static str,
) -> Result<Option<&'a str>, ValidationError> {
    match object.get(field) {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(other) => Err(ValidationError::NotAString(other.clone())),
        None => Ok(None),
    }
}

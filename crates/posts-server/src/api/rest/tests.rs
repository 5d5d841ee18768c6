//! Unit tests for the REST API helpers

#![cfg(test)]

use super::negotiation::{accepts_json, payload_is_json};
use super::types::{HealthResponse, ListParams, MessageBody};

#[test]
fn test_accepts_json_exact_match() {
    assert!(accepts_json(Some("application/json")));
}

#[test]
fn test_accepts_json_wildcards() {
    assert!(accepts_json(Some("*/*")));
    assert!(accepts_json(Some("application/*")));
}

#[test]
fn test_accepts_json_absent_header() {
    assert!(accepts_json(None));
}

#[test]
fn test_accepts_json_ignores_quality_values() {
    assert!(accepts_json(Some("text/html, application/json;q=0.9")));
    assert!(accepts_json(Some("text/html;q=0.8, */*;q=0.1")));
}

#[test]
fn test_accepts_json_is_case_insensitive() {
    assert!(accepts_json(Some("Application/JSON")));
}

#[test]
fn test_accepts_json_rejects_other_types() {
    assert!(!accepts_json(Some("text/html")));
    assert!(!accepts_json(Some("application/xml, text/plain")));
    assert!(!accepts_json(Some("text/*")));
}

#[test]
fn test_payload_is_json_exact_match() {
    assert!(payload_is_json(Some("application/json")));
}

#[test]
fn test_payload_is_json_strips_parameters() {
    assert!(payload_is_json(Some("application/json; charset=utf-8")));
}

#[test]
fn test_payload_is_json_is_case_insensitive() {
    assert!(payload_is_json(Some("Application/Json")));
}

#[test]
fn test_payload_is_json_rejects_other_types() {
    assert!(!payload_is_json(Some("text/plain")));
    assert!(!payload_is_json(Some("application/x-www-form-urlencoded")));
    assert!(!payload_is_json(None));
}

#[test]
fn test_payload_is_json_rejects_wildcards() {
    // Wildcards make sense in Accept, not in a concrete payload type.
    assert!(!payload_is_json(Some("*/*")));
    assert!(!payload_is_json(Some("application/*")));
}

#[test]
fn test_list_params_pass_through() {
    let params = ListParams {
        title_like: Some("whistles".to_string()),
        body_like: Some("bells".to_string()),
    };
    let filter = params.into_filter();
    assert_eq!(filter.title_like.as_deref(), Some("whistles"));
    assert_eq!(filter.body_like.as_deref(), Some("bells"));
}

#[test]
fn test_list_params_drop_empty_values() {
    let params = ListParams {
        title_like: Some(String::new()),
        body_like: Some(String::new()),
    };
    let filter = params.into_filter();
    assert!(filter.title_like.is_none());
    assert!(filter.body_like.is_none());
}

#[test]
fn test_list_params_default_is_unfiltered() {
    let filter = ListParams::default().into_filter();
    assert_eq!(filter, posts_store::PostFilter::default());
}

#[test]
fn test_message_body_serialization() {
    let body = MessageBody {
        message: "Deleted post with id 1".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({"message": "Deleted post with id 1"})
    );
}

#[test]
fn test_health_response_serialization() {
    let health = HealthResponse {
        status: "healthy".to_string(),
        version: "0.1.0".to_string(),
    };
    let value = serde_json::to_value(&health).unwrap();
    assert_eq!(value["status"], "healthy");
    assert_eq!(value["version"], "0.1.0");
}

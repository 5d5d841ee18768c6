//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use posts_store::{PostFilter, PostStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Message-only response body, used by delete confirmations
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Query parameters accepted by the list endpoint
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Substring the title must contain
    #[serde(default)]
    pub title_like: Option<String>,

    /// Substring the body must contain
    #[serde(default)]
    pub body_like: Option<String>,
}

impl ListParams {
    /// Convert to a store filter, treating empty parameters as absent
    pub fn into_filter(self) -> PostFilter {
        PostFilter {
            title_like: self.title_like.filter(|needle| !needle.is_empty()),
            body_like: self.body_like.filter(|needle| !needle.is_empty()),
        }
    }
}

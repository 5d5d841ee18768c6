//! Data carriers shared by the store backends

use serde::{Deserialize, Serialize};

/// A persisted post record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier, strictly increasing, never reused
    pub id: i64,
    /// Post title
    pub title: String,
    /// Post body text
    pub body: String,
}

/// A post payload that has passed validation but is not persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Post title
    pub title: String,
    /// Post body text
    pub body: String,
}

/// Substring filter for post queries
///
/// `None` leaves the corresponding column unfiltered. When both needles are
/// present a post must contain both to match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    /// Substring the title must contain
    pub title_like: Option<String>,
    /// Substring the body must contain
    pub body_like: Option<String>,
}

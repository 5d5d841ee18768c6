//! Core trait definition for post persistence

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Post, PostDraft, PostFilter};

/// Persistence contract for post records
///
/// Backends provide CRUD plus substring-filtered querying. Absence is data,
/// not an error: `get` and `update` return `None` and `delete` returns
/// `false` for an id that is not in the store, so callers decide how a
/// missing id surfaces.
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` to support concurrent access
/// from async tasks.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Return posts matching `filter`, in insertion (id) order
    async fn query(&self, filter: &PostFilter) -> StoreResult<Vec<Post>>;

    /// Look up a single post by id
    async fn get(&self, id: i64) -> StoreResult<Option<Post>>;

    /// Persist a new post; the store assigns the id
    async fn create(&self, draft: PostDraft) -> StoreResult<Post>;

    /// Replace the title and body of an existing post, keeping its id
    ///
    /// Returns the updated post, or `None` when no post has this id.
    async fn update(&self, id: i64, draft: PostDraft) -> StoreResult<Option<Post>>;

    /// Remove a post by id, reporting whether anything was removed
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}

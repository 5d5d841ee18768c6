//! In-memory post store

use tokio::sync::RwLock;

use crate::error::StoreResult;
use crate::models::{Post, PostDraft, PostFilter};
use crate::traits::PostStore;

/// In-process post store
///
/// Keeps posts in insertion order behind an async lock, with the same id
/// contract as the SQLite backend: assigned on create, strictly increasing,
/// never reused after a delete. Contents are lost when the store is dropped.
#[derive(Default)]
pub struct MemoryPostStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    posts: Vec<Post>,
    next_id: i64,
}

impl MemoryPostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(post: &Post, filter: &PostFilter) -> bool {
    let title_ok = filter
        .title_like
        .as_deref()
        .map_or(true, |needle| post.title.contains(needle));
    let body_ok = filter
        .body_like
        .as_deref()
        .map_or(true, |needle| post.body.contains(needle));
    title_ok && body_ok
}

#[async_trait::async_trait]
impl PostStore for MemoryPostStore {
    async fn query(&self, filter: &PostFilter) -> StoreResult<Vec<Post>> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .iter()
            .filter(|post| matches(post, filter))
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Post>> {
        let inner = self.inner.read().await;
        Ok(inner.posts.iter().find(|post| post.id == id).cloned())
    }

    async fn create(&self, draft: PostDraft) -> StoreResult<Post> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let post = Post {
            id: inner.next_id,
            title: draft.title,
            body: draft.body,
        };
        inner.posts.push(post.clone());
        Ok(post)
    }

    async fn update(&self, id: i64, draft: PostDraft) -> StoreResult<Option<Post>> {
        let mut inner = self.inner.write().await;
        match inner.posts.iter_mut().find(|post| post.id == id) {
            Some(post) => {
                post.title = draft.title;
                post.body = draft.body;
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.posts.len();
        inner.posts.retain(|post| post.id != id);
        Ok(inner.posts.len() < before)
    }
}

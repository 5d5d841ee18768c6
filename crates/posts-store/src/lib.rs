//! Post persistence layer
//!
//! A unified interface for storing post records behind interchangeable
//! backends:
//!
//! - **SQLite**: file-backed or in-memory databases through sqlx
//! - **Memory**: in-process storage for tests and ephemeral deployments
//!
//! Both backends assign strictly increasing ids starting at 1, never reuse
//! an id after a delete, and return query results in insertion order.
//!
//! # Quick Start
//!
//! ```no_run
//! use posts_store::{MemoryPostStore, PostDraft, PostFilter, PostStore};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = MemoryPostStore::new();
//!
//!     let post = store
//!         .create(PostDraft {
//!             title: "Example Post".to_string(),
//!             body: "Just a test".to_string(),
//!         })
//!         .await?;
//!     assert_eq!(post.id, 1);
//!
//!     let all = store.query(&PostFilter::default()).await?;
//!     assert_eq!(all.len(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod sqlite;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryPostStore;
pub use models::{Post, PostDraft, PostFilter};
pub use sqlite::SqlitePostStore;
pub use traits::PostStore;

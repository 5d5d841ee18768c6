//! Store initialization
//!
//! Builds the persistence backend selected by the server configuration.

use crate::config::{ServerConfig, StoreType};
use anyhow::Result;
use posts_store::{MemoryPostStore, PostStore, SqlitePostStore};
use std::sync::Arc;
use tracing::info;

/// Initialize the post store for the configured backend
pub async fn init_store(config: &ServerConfig) -> Result<Arc<dyn PostStore>> {
    match &config.store {
        StoreType::Sqlite { url } => {
            let store = SqlitePostStore::connect(url).await?;
            info!("Connected to SQLite store at {}", url);
            Ok(Arc::new(store))
        }
        StoreType::Memory => {
            info!("Using in-memory store, contents are lost on shutdown");
            Ok(Arc::new(MemoryPostStore::new()))
        }
    }
}

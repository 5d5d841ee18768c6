//! Error types for store operations

use thiserror::Error;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error from the SQLite backend
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Backend failure that is not a database driver error
    #[error("Store error: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = StoreError::Database(sqlx::Error::RowNotFound);
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_other_error_display() {
        let err = StoreError::Other("backend unavailable".to_string());
        assert_eq!(err.to_string(), "Store error: backend unavailable");
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}

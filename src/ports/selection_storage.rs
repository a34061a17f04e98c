//! Selection storage port - a small string key-value store.
//!
//! Holds the `favorites` and `comparison` keys, each a JSON array of
//! opportunity id strings. Last write wins.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors that can occur during selection storage operations
#[derive(Debug, thiserror::Error)]
pub enum SelectionStorageError {
    #[error("Failed to serialize selection: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize selection '{key}': {reason}")]
    DeserializationFailed { key: String, reason: String },

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

impl From<SelectionStorageError> for DomainError {
    fn from(err: SelectionStorageError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Port for reading and writing selection keys.
#[async_trait]
pub trait SelectionStorage: Send + Sync {
    /// Read the raw value stored under `key`, `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, SelectionStorageError>;

    /// Overwrite the value under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), SelectionStorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), SelectionStorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_storage_is_object_safe() {
        fn _accepts_dyn(_storage: &dyn SelectionStorage) {}
    }

    #[test]
    fn storage_error_maps_to_storage_code() {
        let err: DomainError = SelectionStorageError::IoError("disk full".to_string()).into();
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("disk full"));
    }
}

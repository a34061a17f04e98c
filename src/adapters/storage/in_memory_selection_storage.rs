//! In-memory selection storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{SelectionStorage, SelectionStorageError};

/// Key-value selection storage held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemorySelectionStorage {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySelectionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently set.
    pub async fn key_count(&self) -> usize {
        self.values.read().await.len()
    }
}

#[async_trait]
impl SelectionStorage for InMemorySelectionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, SelectionStorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SelectionStorageError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), SelectionStorageError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}

//! File-based selection storage.
//!
//! Each key is stored as `<key>.json` under a base directory.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{SelectionStorage, SelectionStorageError};

/// File-based key-value storage for selections
#[derive(Debug, Clone)]
pub struct FileSelectionStorage {
    base_path: PathBuf,
}

impl FileSelectionStorage {
    /// Create a new file storage with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileSelectionStorage::new("./data/selection");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the file holding `key`. Keys are restricted to ASCII
    /// letters, digits, `-` and `_` so they cannot escape the base directory.
    fn key_path(&self, key: &str) -> Result<PathBuf, SelectionStorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SelectionStorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl SelectionStorage for FileSelectionStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, SelectionStorageError> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SelectionStorageError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), SelectionStorageError> {
        let path = self.key_path(key)?;
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| SelectionStorageError::IoError(e.to_string()))?;

        // Write beside the target and rename over it, so readers never see
        // a half-written file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| SelectionStorageError::IoError(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| SelectionStorageError::IoError(e.to_string()))
    }

    async fn remove(&self, key: &str) -> Result<(), SelectionStorageError> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SelectionStorageError::IoError(e.to_string())),
        }
    }
}

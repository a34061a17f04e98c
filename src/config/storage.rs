//! Storage configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::error::ValidationError;

/// Where catalog, judgments and selections live.
///
/// With nothing set the server runs entirely in memory on the built-in seed
/// catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory for `judgments.json` and the selection files
    pub data_dir: Option<PathBuf>,

    /// YAML catalog replacing the built-in seed catalog
    pub catalog_path: Option<PathBuf>,

    /// Buffered live updates per WebSocket client before it lags
    #[serde(default = "default_live_channel_capacity")]
    pub live_channel_capacity: usize,
}

impl StorageConfig {
    /// Directory holding one JSON file per selection key.
    pub fn selection_dir(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| dir.join("selection"))
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.live_channel_capacity == 0 || self.live_channel_capacity > 65_536 {
            return Err(ValidationError::InvalidLiveChannelCapacity);
        }
        if let Some(path) = &self.catalog_path {
            if !is_yaml(path) {
                return Err(ValidationError::InvalidCatalogPath(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            catalog_path: None,
            live_channel_capacity: default_live_channel_capacity(),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

fn default_live_channel_capacity() -> usize {
    128
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults_are_in_memory() {
        let config = StorageConfig::default();
        assert!(config.data_dir.is_none());
        assert!(config.catalog_path.is_none());
        assert!(config.selection_dir().is_none());
        assert_eq!(config.live_channel_capacity, 128);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_selection_dir_nests_under_data_dir() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::from("/var/lib/judging")),
            ..Default::default()
        };
        assert_eq!(
            config.selection_dir(),
            Some(PathBuf::from("/var/lib/judging/selection"))
        );
    }

    #[test]
    fn test_zero_capacity_is_invalid() {
        let config = StorageConfig {
            live_channel_capacity: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLiveChannelCapacity)
        );
    }

    #[test]
    fn test_catalog_path_must_be_yaml() {
        let config = StorageConfig {
            catalog_path: Some(PathBuf::from("catalog.json")),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = StorageConfig {
            catalog_path: Some(PathBuf::from("catalog.yml")),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}

//! Catalog files - opportunities plus optional starting judgments, in YAML.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::domain::judgment::Judgment;
use crate::domain::opportunity::Opportunity;

/// Errors that can occur while loading a catalog file
#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("Failed to read catalog file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog: {0}")]
    ParseFailed(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Parsed contents of a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogFile {
    pub opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub judgments: Vec<Judgment>,
}

impl CatalogFile {
    /// Parses and checks a catalog document.
    ///
    /// # Errors
    ///
    /// - `ParseFailed` for malformed YAML or out-of-range scores
    /// - `Invalid` for blank fields, duplicate ids, or judgments that
    ///   reference an unknown opportunity
    pub fn parse_yaml(yaml: &str) -> Result<Self, CatalogLoadError> {
        let catalog: CatalogFile = serde_yaml::from_str(yaml)
            .map_err(|e| CatalogLoadError::ParseFailed(e.to_string()))?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Reads and parses a catalog file from disk.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| CatalogLoadError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::parse_yaml(&yaml)
    }

    fn check(&self) -> Result<(), CatalogLoadError> {
        let mut ids = HashSet::new();
        for opportunity in &self.opportunities {
            opportunity
                .validate()
                .map_err(|e| CatalogLoadError::Invalid(format!("{}: {}", opportunity.id, e)))?;
            if !ids.insert(opportunity.id.as_str()) {
                return Err(CatalogLoadError::Invalid(format!(
                    "duplicate opportunity id '{}'",
                    opportunity.id
                )));
            }
        }

        if let Some(orphan) = self
            .judgments
            .iter()
            .find(|j| !ids.contains(j.opportunity_id().as_str()))
        {
            return Err(CatalogLoadError::Invalid(format!(
                "judgment '{}' references unknown opportunity '{}'",
                orphan.id(),
                orphan.opportunity_id()
            )));
        }

        Ok(())
    }
}

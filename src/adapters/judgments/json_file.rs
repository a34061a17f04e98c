//! JSON-file judgment repository.
//!
//! Keeps all judgments in memory and rewrites a single JSON array file on
//! every save. The file is written to a temporary sibling first and then
//! renamed over the original.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OpportunityId};
use crate::domain::judgment::Judgment;
use crate::ports::JudgmentRepository;

/// File name used inside the data directory.
pub const JUDGMENTS_FILE_NAME: &str = "judgments.json";

/// Judgment repository persisted as `judgments.json`.
#[derive(Debug)]
pub struct JsonFileJudgmentRepository {
    path: PathBuf,
    judgments: RwLock<Vec<Judgment>>,
}

impl JsonFileJudgmentRepository {
    /// Opens the repository at `path`.
    ///
    /// An existing file is loaded as-is; a missing file is created with
    /// `initial` as its contents.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the file cannot be read, parsed or created
    pub async fn open(
        path: impl AsRef<Path>,
        initial: Vec<Judgment>,
    ) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();

        let judgments = if fs::try_exists(&path).await.map_err(io_error)? {
            let json = fs::read_to_string(&path).await.map_err(io_error)?;
            serde_json::from_str(&json).map_err(|e| {
                DomainError::new(
                    ErrorCode::StorageError,
                    format!("Failed to parse {}: {}", path.display(), e),
                )
            })?
        } else {
            write_atomically(&path, &initial).await?;
            initial
        };

        tracing::debug!(path = %path.display(), count = judgments.len(), "Judgment file opened");

        Ok(Self {
            path,
            judgments: RwLock::new(judgments),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl JudgmentRepository for JsonFileJudgmentRepository {
    async fn save(&self, judgment: &Judgment) -> Result<(), DomainError> {
        let mut judgments = self.judgments.write().await;
        judgments.push(judgment.clone());

        if let Err(e) = write_atomically(&self.path, &judgments).await {
            judgments.pop();
            return Err(e);
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Judgment>, DomainError> {
        Ok(self.judgments.read().await.clone())
    }

    async fn find_by_opportunity(
        &self,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Judgment>, DomainError> {
        Ok(self
            .judgments
            .read()
            .await
            .iter()
            .filter(|j| j.opportunity_id() == opportunity_id)
            .cloned()
            .collect())
    }
}

async fn write_atomically(path: &Path, judgments: &[Judgment]) -> Result<(), DomainError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(judgments).map_err(|e| {
        DomainError::new(
            ErrorCode::StorageError,
            format!("Failed to serialize judgments: {}", e),
        )
    })?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).await.map_err(io_error)?;
    fs::rename(&tmp, path).await.map_err(io_error)?;
    Ok(())
}

fn io_error(e: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::StorageError, format!("IO error: {}", e))
}

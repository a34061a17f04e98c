//! Judgment repository port.
//!
//! Judgments are append-only: there is no update or delete.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OpportunityId};
use crate::domain::judgment::Judgment;

/// Repository port for judgment persistence.
#[async_trait]
pub trait JudgmentRepository: Send + Sync {
    /// Append a new judgment.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, judgment: &Judgment) -> Result<(), DomainError>;

    /// All judgments in submission order.
    async fn list_all(&self) -> Result<Vec<Judgment>, DomainError>;

    /// Judgments for one opportunity, in submission order.
    async fn find_by_opportunity(
        &self,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Judgment>, DomainError>;
}

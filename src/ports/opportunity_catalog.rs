//! Opportunity catalog port (read side).
//!
//! The catalog is loaded once at startup and is read-only afterwards.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OpportunityId};
use crate::domain::opportunity::Opportunity;

/// Read access to the opportunity catalog.
#[async_trait]
pub trait OpportunityCatalog: Send + Sync {
    /// All opportunities in catalog order.
    async fn list_all(&self) -> Result<Vec<Opportunity>, DomainError>;

    /// Find an opportunity by id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &OpportunityId) -> Result<Option<Opportunity>, DomainError>;
}

//! In-memory opportunity catalog.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, OpportunityId};
use crate::domain::opportunity::Opportunity;
use crate::ports::OpportunityCatalog;

use super::seed_catalog;

/// Read-only catalog held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryOpportunityCatalog {
    opportunities: Arc<Vec<Opportunity>>,
}

impl InMemoryOpportunityCatalog {
    pub fn new(opportunities: Vec<Opportunity>) -> Self {
        Self {
            opportunities: Arc::new(opportunities),
        }
    }

    /// Catalog of the built-in seed opportunities.
    pub fn seeded() -> Self {
        Self::new(seed_catalog().opportunities.clone())
    }

    pub fn len(&self) -> usize {
        self.opportunities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opportunities.is_empty()
    }
}

#[async_trait]
impl OpportunityCatalog for InMemoryOpportunityCatalog {
    async fn list_all(&self) -> Result<Vec<Opportunity>, DomainError> {
        Ok(self.opportunities.as_ref().clone())
    }

    async fn find_by_id(&self, id: &OpportunityId) -> Result<Option<Opportunity>, DomainError> {
        Ok(self.opportunities.iter().find(|o| &o.id == id).cloned())
    }
}

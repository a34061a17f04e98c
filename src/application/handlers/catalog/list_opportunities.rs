//! ListOpportunitiesHandler - Query handler for the filtered opportunity listing.

use std::sync::Arc;

use crate::application::handlers::selection::SelectionStore;
use crate::domain::dashboard::{OpportunityFilter, OpportunityListing};
use crate::domain::foundation::DomainError;
use crate::ports::{JudgmentRepository, OpportunityCatalog};

/// Query for the listing page.
#[derive(Debug, Clone, Default)]
pub struct ListOpportunitiesQuery {
    pub filter: OpportunityFilter,
}

/// Handler for the opportunity listing.
pub struct ListOpportunitiesHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
    selection: Arc<SelectionStore>,
}

impl ListOpportunitiesHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
        selection: Arc<SelectionStore>,
    ) -> Self {
        Self {
            catalog,
            judgments,
            selection,
        }
    }

    pub async fn handle(
        &self,
        query: ListOpportunitiesQuery,
    ) -> Result<OpportunityListing, DomainError> {
        let opportunities = self.catalog.list_all().await?;
        let judgments = self.judgments.list_all().await?;
        let selection = self.selection.snapshot().await?;

        let listing = OpportunityListing::build(
            &opportunities,
            &judgments,
            &selection.favorites,
            &selection.comparison,
            &query.filter,
        );

        tracing::debug!(
            total = listing.total,
            catalog = opportunities.len(),
            "Opportunity listing built"
        );

        Ok(listing)
    }
}

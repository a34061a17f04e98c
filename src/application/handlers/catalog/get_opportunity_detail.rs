//! GetOpportunityDetailHandler - Query handler for one opportunity's page.

use std::sync::Arc;

use crate::application::handlers::selection::SelectionStore;
use crate::domain::dashboard::OpportunityDetail;
use crate::domain::foundation::{DomainError, OpportunityId};
use crate::ports::{JudgmentRepository, OpportunityCatalog};

/// Query for a single opportunity.
#[derive(Debug, Clone)]
pub struct GetOpportunityDetailQuery {
    pub opportunity_id: OpportunityId,
}

/// Handler for the opportunity detail view.
pub struct GetOpportunityDetailHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
    selection: Arc<SelectionStore>,
}

impl GetOpportunityDetailHandler {
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
        query: GetOpportunityDetailQuery,
    ) -> Result<OpportunityDetail, DomainError> {
        let opportunity = self
            .catalog
            .find_by_id(&query.opportunity_id)
            .await?
            .ok_or_else(|| DomainError::opportunity_not_found(&query.opportunity_id))?;

        let judgments = self
            .judgments
            .find_by_opportunity(&query.opportunity_id)
            .await?;
        let selection = self.selection.snapshot().await?;

        Ok(OpportunityDetail::build(
            &opportunity,
            &judgments,
            &selection.favorites,
            &selection.comparison,
        ))
    }
}

//! ListOpportunityJudgmentsHandler - Query handler for one opportunity's judgments.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, OpportunityId};
use crate::domain::judgment::Judgment;
use crate::ports::{JudgmentRepository, OpportunityCatalog};

/// Handler returning the judgments of a catalogued opportunity in
/// submission order.
pub struct ListOpportunityJudgmentsHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
}

impl ListOpportunityJudgmentsHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
    ) -> Self {
        Self { catalog, judgments }
    }

    pub async fn handle(&self, opportunity_id: &OpportunityId) -> Result<Vec<Judgment>, DomainError> {
        if self.catalog.find_by_id(opportunity_id).await?.is_none() {
            return Err(DomainError::opportunity_not_found(opportunity_id));
        }

        self.judgments.find_by_opportunity(opportunity_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{catalog, id, MockJudgmentRepository};
    use crate::domain::judgment::test_support::judgment;

    #[tokio::test]
    async fn returns_only_matching_judgments() {
        let repo = MockJudgmentRepository::with_judgments(vec![
            judgment("1", "Ada", [5; 5]),
            judgment("2", "Ada", [5; 5]),
        ]);
        let handler = ListOpportunityJudgmentsHandler::new(catalog(), Arc::new(repo));

        let judgments = handler.handle(&id("1")).await.unwrap();

        assert_eq!(judgments.len(), 1);
        assert_eq!(judgments[0].opportunity_id().as_str(), "1");
    }

    #[tokio::test]
    async fn unjudged_opportunity_yields_empty_list() {
        let handler =
            ListOpportunityJudgmentsHandler::new(catalog(), Arc::new(MockJudgmentRepository::new()));

        assert!(handler.handle(&id("3")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_opportunity_is_not_found() {
        let handler =
            ListOpportunityJudgmentsHandler::new(catalog(), Arc::new(MockJudgmentRepository::new()));

        assert!(handler.handle(&id("nope")).await.unwrap_err().is_not_found());
    }
}

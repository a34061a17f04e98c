//! ListJudgesHandler - Query handler for the judge directory.

use std::sync::Arc;

use crate::domain::analysis::{JudgeDirectory, JudgeSummary};
use crate::domain::foundation::DomainError;
use crate::ports::{JudgmentRepository, OpportunityCatalog};

pub struct ListJudgesHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
}

impl ListJudgesHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
    ) -> Self {
        Self { catalog, judgments }
    }

    pub async fn handle(&self) -> Result<Vec<JudgeSummary>, DomainError> {
        let opportunities = self.catalog.list_all().await?;
        let judgments = self.judgments.list_all().await?;

        Ok(JudgeDirectory::compute(&opportunities, &judgments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{catalog, MockJudgmentRepository};
    use crate::domain::judgment::test_support::judgment;

    #[tokio::test]
    async fn directory_lists_each_judge_once() {
        let repo = MockJudgmentRepository::with_judgments(vec![
            judgment("1", "Ada", [8; 5]),
            judgment("2", "Bob", [4; 5]),
            judgment("3", "Bob", [6; 5]),
        ]);
        let handler = ListJudgesHandler::new(catalog(), Arc::new(repo));

        let judges = handler.handle().await.unwrap();

        assert_eq!(judges.len(), 2);
        assert_eq!(judges[0].judge_name, "Bob");
        assert_eq!(judges[0].total_judgments, 2);
        assert_eq!(judges[0].recent_judgments.len(), 2);
    }
}

//! In-memory judgment repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, OpportunityId};
use crate::domain::judgment::Judgment;
use crate::ports::JudgmentRepository;

/// Judgments held in memory for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJudgmentRepository {
    judgments: Arc<RwLock<Vec<Judgment>>>,
}

impl InMemoryJudgmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the given judgments, e.g. the seed catalog's.
    pub fn with_judgments(judgments: Vec<Judgment>) -> Self {
        Self {
            judgments: Arc::new(RwLock::new(judgments)),
        }
    }

    pub async fn count(&self) -> usize {
        self.judgments.read().await.len()
    }
}

#[async_trait]
impl JudgmentRepository for InMemoryJudgmentRepository {
    async fn save(&self, judgment: &Judgment) -> Result<(), DomainError> {
        self.judgments.write().await.push(judgment.clone());
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::judgment::test_support::judgment;

    #[tokio::test]
    async fn save_appends_in_order() {
        let repo = InMemoryJudgmentRepository::new();
        repo.save(&judgment("1", "Ada", [5; 5])).await.unwrap();
        repo.save(&judgment("2", "Bob", [5; 5])).await.unwrap();
        repo.save(&judgment("1", "Cy", [5; 5])).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let judges: Vec<&str> = all.iter().map(|j| j.judge_name()).collect();
        assert_eq!(judges, vec!["Ada", "Bob", "Cy"]);

        let for_one = repo
            .find_by_opportunity(&OpportunityId::new("1").unwrap())
            .await
            .unwrap();
        assert_eq!(for_one.len(), 2);
        assert_eq!(repo.count().await, 3);
    }

    #[tokio::test]
    async fn with_judgments_starts_populated() {
        let repo = InMemoryJudgmentRepository::with_judgments(vec![judgment("1", "Ada", [5; 5])]);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }
}

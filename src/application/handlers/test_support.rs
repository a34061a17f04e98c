//! Mock ports shared by handler tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::adapters::catalog::InMemoryOpportunityCatalog;
use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope, OpportunityId};
use crate::domain::judgment::Judgment;
use crate::domain::opportunity::test_support::opportunity;
use crate::domain::opportunity::FundingStage;
use crate::ports::{EventPublisher, JudgmentRepository};

/// Catalog with opportunities "1" (Seed, AI), "2" (Series A, Energy) and
/// "3" (Series A, AI).
pub fn catalog() -> Arc<InMemoryOpportunityCatalog> {
    Arc::new(InMemoryOpportunityCatalog::new(vec![
        opportunity("1", FundingStage::Seed, "AI"),
        opportunity("2", FundingStage::SeriesA, "Energy"),
        opportunity("3", FundingStage::SeriesA, "AI"),
    ]))
}

pub fn id(raw: &str) -> OpportunityId {
    OpportunityId::new(raw).unwrap()
}

pub struct MockJudgmentRepository {
    judgments: Mutex<Vec<Judgment>>,
    fail_save: bool,
}

impl MockJudgmentRepository {
    pub fn new() -> Self {
        Self::with_judgments(Vec::new())
    }

    pub fn with_judgments(judgments: Vec<Judgment>) -> Self {
        Self {
            judgments: Mutex::new(judgments),
            fail_save: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            judgments: Mutex::new(Vec::new()),
            fail_save: true,
        }
    }

    pub fn saved(&self) -> Vec<Judgment> {
        self.judgments.lock().unwrap().clone()
    }
}

#[async_trait]
impl JudgmentRepository for MockJudgmentRepository {
    async fn save(&self, judgment: &Judgment) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                "Simulated save failure",
            ));
        }
        self.judgments.lock().unwrap().push(judgment.clone());
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Judgment>, DomainError> {
        Ok(self.saved())
    }

    async fn find_by_opportunity(
        &self,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Judgment>, DomainError> {
        Ok(self
            .saved()
            .into_iter()
            .filter(|j| j.opportunity_id() == opportunity_id)
            .collect())
    }
}

pub struct MockEventPublisher {
    published_events: Mutex<Vec<EventEnvelope>>,
    fail_publish: bool,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            fail_publish: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            published_events: Mutex::new(Vec::new()),
            fail_publish: true,
        }
    }

    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published_events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.fail_publish {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                "Simulated publish failure",
            ));
        }
        self.published_events.lock().unwrap().push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

//! SubmitJudgmentHandler - Command handler for recording a judge's evaluation.

use std::sync::Arc;

use crate::domain::foundation::{CommandMetadata, DomainError, EventEnvelope, OpportunityId};
use crate::domain::judgment::{Judgment, JudgmentSubmitted, Recommendation, ScoreSet};
use crate::ports::{EventPublisher, JudgmentRepository, OpportunityCatalog};

/// Command to submit a judgment.
#[derive(Debug, Clone)]
pub struct SubmitJudgmentCommand {
    pub opportunity_id: OpportunityId,
    pub judge_name: String,
    pub scores: ScoreSet,
    pub notes: String,
    pub recommendation: Recommendation,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitJudgmentResult {
    pub judgment: Judgment,
    pub event: JudgmentSubmitted,
}

/// Handler for submitting judgments.
pub struct SubmitJudgmentHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    repository: Arc<dyn JudgmentRepository>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SubmitJudgmentHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        repository: Arc<dyn JudgmentRepository>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            catalog,
            repository,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitJudgmentCommand,
        mut metadata: CommandMetadata,
    ) -> Result<SubmitJudgmentResult, DomainError> {
        // 1. The opportunity must be catalogued
        if self.catalog.find_by_id(&cmd.opportunity_id).await?.is_none() {
            return Err(DomainError::opportunity_not_found(&cmd.opportunity_id));
        }

        // 2. Build the judgment (validates judge name, stamps id and time)
        let judgment = Judgment::submit(
            cmd.opportunity_id,
            cmd.judge_name,
            cmd.scores,
            cmd.notes,
            cmd.recommendation,
        )?;

        // 3. Persist
        self.repository.save(&judgment).await?;

        // 4. Publish. The judgment is already stored, so a failure here is
        // logged instead of returned; a retry would store a duplicate.
        let event = JudgmentSubmitted::from_judgment(&judgment);
        let published = async {
            let envelope =
                EventEnvelope::from_event(&event)?.with_correlation_id(metadata.correlation_id());
            self.event_publisher.publish(envelope).await
        }
        .await;
        if let Err(e) = published {
            tracing::warn!(
                judgment_id = %judgment.id(),
                error = %e,
                "Judgment stored but submission event not published"
            );
        }

        tracing::info!(
            judgment_id = %judgment.id(),
            opportunity_id = %judgment.opportunity_id(),
            judge = judgment.judge_name(),
            overall_score = judgment.overall_score(),
            recommendation = judgment.recommendation().label(),
            "Judgment submitted"
        );

        Ok(SubmitJudgmentResult { judgment, event })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        catalog, id, MockEventPublisher, MockJudgmentRepository,
    };
    use crate::domain::foundation::ErrorCode;
    use crate::domain::judgment::test_support::scores;

    fn command(opportunity: &str, judge: &str) -> SubmitJudgmentCommand {
        SubmitJudgmentCommand {
            opportunity_id: id(opportunity),
            judge_name: judge.to_string(),
            scores: scores([8, 9, 8, 7, 6]),
            notes: "Strong team".to_string(),
            recommendation: Recommendation::Pass,
        }
    }

    fn metadata() -> CommandMetadata {
        CommandMetadata::new().with_correlation_id("req-7")
    }

    #[tokio::test]
    async fn submit_persists_and_publishes() {
        let repo = Arc::new(MockJudgmentRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = SubmitJudgmentHandler::new(catalog(), repo.clone(), publisher.clone());

        let result = handler
            .handle(command("1", "  John Investor "), metadata())
            .await
            .unwrap();

        assert_eq!(result.judgment.judge_name(), "John Investor");
        assert_eq!(result.judgment.overall_score(), 7.6);
        assert_eq!(repo.saved().len(), 1);

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event_type, "judgment.submitted.v1");
        assert_eq!(events[0].aggregate_id, result.judgment.id().to_string());
        assert_eq!(events[0].metadata.correlation_id.as_deref(), Some("req-7"));
    }

    #[tokio::test]
    async fn unknown_opportunity_is_rejected_before_save() {
        let repo = Arc::new(MockJudgmentRepository::new());
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = SubmitJudgmentHandler::new(catalog(), repo.clone(), publisher.clone());

        let err = handler
            .handle(command("99", "Ada"), metadata())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OpportunityNotFound);
        assert!(repo.saved().is_empty());
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn blank_judge_name_is_validation_error() {
        let handler = SubmitJudgmentHandler::new(
            catalog(),
            Arc::new(MockJudgmentRepository::new()),
            Arc::new(MockEventPublisher::new()),
        );

        let err = handler
            .handle(command("1", "   "), metadata())
            .await
            .unwrap_err();

        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn save_failure_skips_publish() {
        let publisher = Arc::new(MockEventPublisher::new());
        let handler = SubmitJudgmentHandler::new(
            catalog(),
            Arc::new(MockJudgmentRepository::failing()),
            publisher.clone(),
        );

        let err = handler
            .handle(command("1", "Ada"), metadata())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(publisher.published_events().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_still_returns_the_stored_judgment() {
        let repo = Arc::new(MockJudgmentRepository::new());
        let handler = SubmitJudgmentHandler::new(
            catalog(),
            repo.clone(),
            Arc::new(MockEventPublisher::failing()),
        );

        let result = handler
            .handle(command("1", "Ada"), metadata())
            .await
            .unwrap();

        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id(), result.judgment.id());
    }
}

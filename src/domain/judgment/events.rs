//! Judgment domain events.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{EventId, JudgmentId, OpportunityId, Timestamp};

use super::{Judgment, Recommendation};

/// Published when a judge submits a new judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentSubmitted {
    pub event_id: EventId,
    pub judgment_id: JudgmentId,
    pub opportunity_id: OpportunityId,
    pub judge_name: String,
    pub overall_score: f64,
    pub recommendation: Recommendation,
    pub submitted_at: Timestamp,
}

crate::domain_event!(
    JudgmentSubmitted,
    event_type = "judgment.submitted.v1",
    aggregate_id = judgment_id,
    aggregate_type = "Judgment",
    occurred_at = submitted_at,
    event_id = event_id
);

impl JudgmentSubmitted {
    /// Creates the event for a freshly built judgment.
    pub fn from_judgment(judgment: &Judgment) -> Self {
        Self {
            event_id: EventId::new(),
            judgment_id: judgment.id().clone(),
            opportunity_id: judgment.opportunity_id().clone(),
            judge_name: judgment.judge_name().to_string(),
            overall_score: judgment.overall_score(),
            recommendation: judgment.recommendation(),
            submitted_at: judgment.judged_at(),
        }
    }
}

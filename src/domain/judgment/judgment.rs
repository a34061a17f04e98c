//! Judgment - one judge's scored evaluation of one opportunity.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::ScoreAggregator;
use crate::domain::foundation::{JudgmentId, OpportunityId, Timestamp, ValidationError};

use super::{Recommendation, ScoreSet};

/// A submitted evaluation.
///
/// Judgments are append-only. `overall_score` is computed from the score set
/// when the judgment is built and is never set independently; restoring a
/// stored judgment recomputes it rather than trusting the stored value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "JudgmentRecord")]
pub struct Judgment {
    id: JudgmentId,
    opportunity_id: OpportunityId,
    judge_name: String,
    scores: ScoreSet,
    overall_score: f64,
    notes: String,
    recommendation: Recommendation,
    judged_at: Timestamp,
}

impl Judgment {
    /// Builds a new judgment stamped with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if the judge name is blank.
    pub fn submit(
        opportunity_id: OpportunityId,
        judge_name: impl Into<String>,
        scores: ScoreSet,
        notes: impl Into<String>,
        recommendation: Recommendation,
    ) -> Result<Self, ValidationError> {
        Self::restore(
            JudgmentId::new(),
            opportunity_id,
            judge_name,
            scores,
            notes,
            recommendation,
            Timestamp::now(),
        )
    }

    /// Rebuilds a judgment with a known id and time (seed data, storage).
    pub fn restore(
        id: JudgmentId,
        opportunity_id: OpportunityId,
        judge_name: impl Into<String>,
        scores: ScoreSet,
        notes: impl Into<String>,
        recommendation: Recommendation,
        judged_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let judge_name = judge_name.into().trim().to_string();
        if judge_name.is_empty() {
            return Err(ValidationError::empty_field("judge_name"));
        }

        Ok(Self {
            id,
            opportunity_id,
            judge_name,
            overall_score: ScoreAggregator::overall_score(&scores),
            scores,
            notes: notes.into(),
            recommendation,
            judged_at,
        })
    }

    pub fn id(&self) -> &JudgmentId {
        &self.id
    }

    pub fn opportunity_id(&self) -> &OpportunityId {
        &self.opportunity_id
    }

    pub fn judge_name(&self) -> &str {
        &self.judge_name
    }

    pub fn scores(&self) -> &ScoreSet {
        &self.scores
    }

    /// Mean of the five rubric scores, fixed at construction.
    pub fn overall_score(&self) -> f64 {
        self.overall_score
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }

    pub fn judged_at(&self) -> Timestamp {
        self.judged_at
    }
}

/// Wire/storage shape of a judgment. Any stored `overallScore` is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct JudgmentRecord {
    id: JudgmentId,
    opportunity_id: OpportunityId,
    judge_name: String,
    scores: ScoreSet,
    #[serde(default)]
    notes: String,
    recommendation: Recommendation,
    judged_at: Timestamp,
}

impl TryFrom<JudgmentRecord> for Judgment {
    type Error = ValidationError;

    fn try_from(record: JudgmentRecord) -> Result<Self, Self::Error> {
        Judgment::restore(
            record.id,
            record.opportunity_id,
            record.judge_name,
            record.scores,
            record.notes,
            record.recommendation,
            record.judged_at,
        )
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::judgment::score_set::test_support::scores;

    /// Builds a judgment for `opportunity_id` with the given raw scores.
    pub fn judgment(opportunity_id: &str, judge: &str, values: [u8; 5]) -> Judgment {
        Judgment::submit(
            OpportunityId::new(opportunity_id).unwrap(),
            judge,
            scores(values),
            "",
            Recommendation::Pass,
        )
        .unwrap()
    }

    /// Like [`judgment`] but with a fixed recommendation and date.
    pub fn judgment_on(
        opportunity_id: &str,
        judge: &str,
        values: [u8; 5],
        recommendation: Recommendation,
        judged_at: Timestamp,
    ) -> Judgment {
        Judgment::restore(
            JudgmentId::new(),
            OpportunityId::new(opportunity_id).unwrap(),
            judge,
            scores(values),
            "",
            recommendation,
            judged_at,
        )
        .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::judgment::score_set::test_support::scores;

    fn opp_id() -> OpportunityId {
        OpportunityId::new("1").unwrap()
    }

    #[test]
    fn submit_caches_mean_of_scores() {
        let judgment = Judgment::submit(
            opp_id(),
            "John Investor",
            scores([8, 9, 8, 7, 6]),
            "Strong team",
            Recommendation::Pass,
        )
        .unwrap();

        assert_eq!(judgment.overall_score(), 7.6);
        assert_eq!(
            judgment.overall_score(),
            ScoreAggregator::overall_score(judgment.scores())
        );
    }

    #[test]
    fn submit_trims_and_requires_judge_name() {
        let err = Judgment::submit(opp_id(), "   ", scores([5; 5]), "", Recommendation::Pass)
            .unwrap_err();
        assert_eq!(err, ValidationError::empty_field("judge_name"));

        let ok = Judgment::submit(opp_id(), "  Ada  ", scores([5; 5]), "", Recommendation::Pass)
            .unwrap();
        assert_eq!(ok.judge_name(), "Ada");
    }

    #[test]
    fn recommendation_is_independent_of_score() {
        let judgment =
            Judgment::submit(opp_id(), "Ada", scores([10; 5]), "", Recommendation::Reject)
                .unwrap();
        assert_eq!(judgment.overall_score(), 10.0);
        assert_eq!(judgment.recommendation(), Recommendation::Reject);
    }

    #[test]
    fn serializes_overall_score_alongside_scores() {
        let judgment =
            Judgment::submit(opp_id(), "Ada", scores([8, 9, 8, 7, 6]), "", Recommendation::Pass)
                .unwrap();
        let json = serde_json::to_value(&judgment).unwrap();

        assert_eq!(json["opportunityId"], "1");
        assert_eq!(json["judgeName"], "Ada");
        assert_eq!(json["overallScore"], 7.6);
        assert_eq!(json["scores"]["teamQuality"], 9);
        assert_eq!(json["recommendation"], "Pass");
    }

    #[test]
    fn deserializing_recomputes_tampered_overall_score() {
        let json = r#"{
            "id": "j1",
            "opportunityId": "1",
            "judgeName": "John Investor",
            "scores": {"marketPotential":8,"teamQuality":9,"productInnovation":8,"businessModel":7,"traction":6},
            "overallScore": 2.0,
            "notes": "",
            "recommendation": "Pass",
            "judgedAt": "2024-02-20T00:00:00Z"
        }"#;

        let judgment: Judgment = serde_json::from_str(json).unwrap();
        assert_eq!(judgment.overall_score(), 7.6);
        assert_eq!(judgment.id().as_str(), "j1");
    }

    #[test]
    fn deserializing_rejects_blank_judge() {
        let json = r#"{
            "id": "j1",
            "opportunityId": "1",
            "judgeName": "",
            "scores": {"marketPotential":8,"teamQuality":9,"productInnovation":8,"businessModel":7,"traction":6},
            "recommendation": "Pass",
            "judgedAt": "2024-02-20T00:00:00Z"
        }"#;

        assert!(serde_json::from_str::<Judgment>(json).is_err());
    }
}

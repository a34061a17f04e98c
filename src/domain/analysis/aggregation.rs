//! Score aggregation - overall scores and per-opportunity averages.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OpportunityId;
use crate::domain::judgment::{Judgment, ScoreSet};

/// Average overall score of an opportunity together with how many
/// judgments contributed to it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityAverage {
    pub average: f64,
    pub count: usize,
}

impl OpportunityAverage {
    /// Returns true if at least one judgment was averaged.
    pub fn is_judged(&self) -> bool {
        self.count > 0
    }
}

/// Score aggregation functions.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Unweighted arithmetic mean of the five rubric scores.
    ///
    /// No rounding is applied; one-decimal display is left to callers.
    pub fn overall_score(scores: &ScoreSet) -> f64 {
        let values = scores.values();
        let total: f64 = values.iter().map(|s| s.as_f64()).sum();
        total / values.len() as f64
    }

    /// Mean overall score of the judgments that reference `opportunity_id`.
    ///
    /// # Edge Cases
    /// - No matching judgments: `(average 0, count 0)`, never NaN
    pub fn opportunity_average(
        opportunity_id: &OpportunityId,
        judgments: &[Judgment],
    ) -> OpportunityAverage {
        Self::mean_of(
            judgments
                .iter()
                .filter(|j| j.opportunity_id() == opportunity_id),
        )
    }

    /// Mean overall score of any judgment sequence, `(0, 0)` when empty.
    pub fn mean_of<'a>(judgments: impl IntoIterator<Item = &'a Judgment>) -> OpportunityAverage {
        let (sum, count) = judgments
            .into_iter()
            .fold((0.0_f64, 0_usize), |(sum, count), j| {
                (sum + j.overall_score(), count + 1)
            });

        if count == 0 {
            return OpportunityAverage::default();
        }

        OpportunityAverage {
            average: sum / count as f64,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::judgment::test_support::{judgment, scores};

    #[test]
    fn overall_score_is_exact_mean() {
        assert_eq!(ScoreAggregator::overall_score(&scores([8, 9, 8, 7, 6])), 7.6);
        assert_eq!(ScoreAggregator::overall_score(&scores([0; 5])), 0.0);
        assert_eq!(ScoreAggregator::overall_score(&scores([10; 5])), 10.0);
        assert_eq!(ScoreAggregator::overall_score(&scores([1, 2, 3, 4, 5])), 3.0);
    }

    #[test]
    fn overall_score_keeps_fraction() {
        assert_eq!(ScoreAggregator::overall_score(&scores([1, 0, 0, 0, 0])), 0.2);
    }

    #[test]
    fn opportunity_average_with_no_judgments_is_zero() {
        let id = OpportunityId::new("1").unwrap();
        let result = ScoreAggregator::opportunity_average(&id, &[]);

        assert_eq!(result.average, 0.0);
        assert_eq!(result.count, 0);
        assert!(!result.average.is_nan());
        assert!(!result.is_judged());
    }

    #[test]
    fn opportunity_average_ignores_other_opportunities() {
        let judgments = vec![
            judgment("1", "Ada", [8, 8, 8, 8, 8]),
            judgment("2", "Ada", [2, 2, 2, 2, 2]),
            judgment("1", "Bob", [6, 6, 6, 6, 6]),
        ];
        let id = OpportunityId::new("1").unwrap();

        let result = ScoreAggregator::opportunity_average(&id, &judgments);

        assert_eq!(result.count, 2);
        assert_eq!(result.average, 7.0);
    }

    #[test]
    fn opportunity_average_unmatched_id_is_zero() {
        let judgments = vec![judgment("1", "Ada", [8, 8, 8, 8, 8])];
        let id = OpportunityId::new("9").unwrap();

        assert_eq!(
            ScoreAggregator::opportunity_average(&id, &judgments),
            OpportunityAverage::default()
        );
    }
}

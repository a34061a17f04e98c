//! Dashboard analytics - counts, averages, distributions and rankings.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::judgment::Judgment;
use crate::domain::opportunity::Opportunity;

use super::{OpportunityAverage, ScoreAggregator};

/// Maximum number of entries in the top-scored ranking.
pub const TOP_SCORED_LIMIT: usize = 5;

/// Fixed score buckets: label, inclusive lower bound, exclusive upper bound.
/// The last bucket is closed at 10, which is the highest possible mean.
const SCORE_BUCKETS: [(&str, f64, f64); 5] = [
    ("0-2", 0.0, 2.0),
    ("2-4", 2.0, 4.0),
    ("4-6", 4.0, 6.0),
    ("6-8", 6.0, 8.0),
    ("8-10", 8.0, f64::INFINITY),
];

/// One entry of the top-scored ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredOpportunity {
    pub opportunity: Opportunity,
    pub average_score: f64,
    pub judgment_count: usize,
}

/// One bucket of the overall-score histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub range: String,
    pub count: usize,
}

/// Everything the analytics view shows, computed in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardAnalytics {
    pub total_opportunities: usize,
    pub total_judgments: usize,
    pub average_score: f64,
    pub opportunities_by_stage: BTreeMap<String, usize>,
    pub opportunities_by_industry: BTreeMap<String, usize>,
    pub top_scored_opportunities: Vec<ScoredOpportunity>,
    pub judgments_by_recommendation: BTreeMap<String, usize>,
    pub score_distribution: Vec<ScoreBucket>,
}

/// Analytics computation functions.
pub struct AnalyticsCalculator;

impl AnalyticsCalculator {
    /// Computes the full analytics snapshot.
    ///
    /// # Edge Cases
    /// - Empty inputs: zero counts, `average_score` 0, empty maps, five zero buckets
    pub fn compute(opportunities: &[Opportunity], judgments: &[Judgment]) -> DashboardAnalytics {
        DashboardAnalytics {
            total_opportunities: opportunities.len(),
            total_judgments: judgments.len(),
            average_score: ScoreAggregator::mean_of(judgments).average,
            opportunities_by_stage: Self::count_by(opportunities, |o| o.stage.label().to_string()),
            opportunities_by_industry: Self::count_by(opportunities, |o| o.industry.clone()),
            top_scored_opportunities: Self::top_scored(opportunities, judgments),
            judgments_by_recommendation: Self::count_by(judgments, |j| {
                j.recommendation().label().to_string()
            }),
            score_distribution: Self::score_distribution(judgments),
        }
    }

    /// Opportunities with at least one judgment, best average first.
    ///
    /// Ties keep catalog order; the list is capped at [`TOP_SCORED_LIMIT`].
    pub fn top_scored(opportunities: &[Opportunity], judgments: &[Judgment]) -> Vec<ScoredOpportunity> {
        let mut scored: Vec<ScoredOpportunity> = opportunities
            .iter()
            .filter_map(|opp| {
                let OpportunityAverage { average, count } =
                    ScoreAggregator::opportunity_average(&opp.id, judgments);
                (count > 0).then(|| ScoredOpportunity {
                    opportunity: opp.clone(),
                    average_score: average,
                    judgment_count: count,
                })
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.average_score.total_cmp(&a.average_score));
        scored.truncate(TOP_SCORED_LIMIT);
        scored
    }

    /// Histogram of overall scores over the fixed five buckets.
    pub fn score_distribution(judgments: &[Judgment]) -> Vec<ScoreBucket> {
        let mut counts = [0usize; SCORE_BUCKETS.len()];
        for judgment in judgments {
            let score = judgment.overall_score();
            if let Some(index) = SCORE_BUCKETS
                .iter()
                .position(|(_, low, high)| score >= *low && score < *high)
            {
                counts[index] += 1;
            }
        }

        SCORE_BUCKETS
            .iter()
            .zip(counts)
            .map(|((label, _, _), count)| ScoreBucket {
                range: (*label).to_string(),
                count,
            })
            .collect()
    }

    fn count_by<T>(items: &[T], key: impl Fn(&T) -> String) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for item in items {
            *counts.entry(key(item)).or_insert(0) += 1;
        }
        counts
    }
}

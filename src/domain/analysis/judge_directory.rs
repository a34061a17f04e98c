//! Judge directory - per-judge statistics and recent activity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::judgment::Judgment;
use crate::domain::opportunity::Opportunity;

use super::ScoreAggregator;

/// Number of recent judgments listed per judge.
pub const RECENT_JUDGMENTS_LIMIT: usize = 5;

/// A judgment paired with the opportunity it evaluates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgedOpportunity {
    pub judgment: Judgment,
    pub opportunity: Opportunity,
}

/// Statistics for one judge, identified by exact name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeSummary {
    pub judge_name: String,
    pub total_judgments: usize,
    pub average_score: f64,
    pub recommendations: BTreeMap<String, usize>,
    pub recent_judgments: Vec<JudgedOpportunity>,
}

/// Builds the judge directory.
pub struct JudgeDirectory;

impl JudgeDirectory {
    /// Groups judgments by judge name, busiest judges first.
    ///
    /// Judges with equal totals keep the order in which they first judged.
    /// Recent judgments whose opportunity is no longer in the catalog are
    /// left out of `recent_judgments` but still counted.
    pub fn compute(opportunities: &[Opportunity], judgments: &[Judgment]) -> Vec<JudgeSummary> {
        let mut groups: Vec<(&str, Vec<&Judgment>)> = Vec::new();
        for judgment in judgments {
            match groups.iter_mut().find(|(name, _)| *name == judgment.judge_name()) {
                Some((_, group)) => group.push(judgment),
                None => groups.push((judgment.judge_name(), vec![judgment])),
            }
        }

        let mut summaries: Vec<JudgeSummary> = groups
            .into_iter()
            .map(|(name, group)| Self::summarize(name, group, opportunities))
            .collect();

        summaries.sort_by(|a, b| b.total_judgments.cmp(&a.total_judgments));
        summaries
    }

    fn summarize(name: &str, mut group: Vec<&Judgment>, opportunities: &[Opportunity]) -> JudgeSummary {
        let average = ScoreAggregator::mean_of(group.iter().copied());

        let mut recommendations = BTreeMap::new();
        for judgment in &group {
            *recommendations
                .entry(judgment.recommendation().label().to_string())
                .or_insert(0) += 1;
        }

        group.sort_by(|a, b| b.judged_at().cmp(&a.judged_at()));
        let recent_judgments = group
            .into_iter()
            .take(RECENT_JUDGMENTS_LIMIT)
            .filter_map(|judgment| {
                opportunities
                    .iter()
                    .find(|o| &o.id == judgment.opportunity_id())
                    .map(|opportunity| JudgedOpportunity {
                        judgment: judgment.clone(),
                        opportunity: opportunity.clone(),
                    })
            })
            .collect();

        JudgeSummary {
            judge_name: name.to_string(),
            total_judgments: average.count,
            average_score: average.average,
            recommendations,
            recent_judgments,
        }
    }
}

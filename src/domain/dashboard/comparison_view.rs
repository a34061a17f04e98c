use serde::Serialize;

use crate::domain::analysis::ScoreAggregator;
use crate::domain::judgment::{Criterion, Judgment};
use crate::domain::opportunity::{format_compact_currency, Opportunity};
use crate::domain::selection::{ComparisonSet, MAX_COMPARISON};

/// Mean of one criterion across an opportunity's judgments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionAverage {
    pub criterion: &'static str,
    pub label: &'static str,
    pub average: f64,
}

/// One column of the comparison table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonColumn {
    pub opportunity: Opportunity,
    pub funding_display: String,
    pub valuation_display: String,
    pub judgments: Vec<Judgment>,
    pub average_score: f64,
    pub judgment_count: usize,
    pub criterion_averages: Vec<CriterionAverage>,
}

/// Side-by-side view of the comparison set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonView {
    pub columns: Vec<ComparisonColumn>,
    pub capacity: usize,
}

impl ComparisonView {
    /// Builds columns in comparison-set order. Ids not in the catalog are skipped.
    pub fn build(
        opportunities: &[Opportunity],
        judgments: &[Judgment],
        comparison: &ComparisonSet,
    ) -> Self {
        let columns = comparison
            .ids()
            .iter()
            .filter_map(|id| opportunities.iter().find(|o| &o.id == id))
            .map(|opportunity| {
                let own: Vec<Judgment> = judgments
                    .iter()
                    .filter(|j| j.opportunity_id() == &opportunity.id)
                    .cloned()
                    .collect();
                let average = ScoreAggregator::mean_of(&own);

                ComparisonColumn {
                    opportunity: opportunity.clone(),
                    funding_display: format_compact_currency(opportunity.funding_amount),
                    valuation_display: format_compact_currency(opportunity.valuation),
                    criterion_averages: criterion_averages(&own),
                    average_score: average.average,
                    judgment_count: average.count,
                    judgments: own,
                }
            })
            .collect();

        Self {
            columns,
            capacity: MAX_COMPARISON,
        }
    }
}

fn criterion_averages(judgments: &[Judgment]) -> Vec<CriterionAverage> {
    Criterion::ALL
        .iter()
        .map(|&criterion| {
            let average = if judgments.is_empty() {
                0.0
            } else {
                let total: f64 = judgments
                    .iter()
                    .map(|j| j.scores().get(criterion).as_f64())
                    .sum();
                total / judgments.len() as f64
            };
            CriterionAverage {
                criterion: criterion.key(),
                label: criterion.label(),
                average,
            }
        })
        .collect()
}

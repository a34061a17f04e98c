use serde::Serialize;

use crate::domain::analysis::ScoreAggregator;
use crate::domain::judgment::Judgment;
use crate::domain::opportunity::{format_compact_currency, Opportunity};
use crate::domain::selection::{ComparisonSet, FavoriteSet};

/// Everything the detail page shows for one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityDetail {
    pub opportunity: Opportunity,
    pub funding_display: String,
    pub valuation_display: String,
    /// Judgments for this opportunity, in submission order
    pub judgments: Vec<Judgment>,
    pub average_score: f64,
    pub judgment_count: usize,
    pub is_favorite: bool,
    pub in_comparison: bool,
}

impl OpportunityDetail {
    pub fn build(
        opportunity: &Opportunity,
        judgments: &[Judgment],
        favorites: &FavoriteSet,
        comparison: &ComparisonSet,
    ) -> Self {
        let own: Vec<Judgment> = judgments
            .iter()
            .filter(|j| j.opportunity_id() == &opportunity.id)
            .cloned()
            .collect();
        let average = ScoreAggregator::mean_of(&own);

        Self {
            opportunity: opportunity.clone(),
            funding_display: format_compact_currency(opportunity.funding_amount),
            valuation_display: format_compact_currency(opportunity.valuation),
            judgments: own,
            average_score: average.average,
            judgment_count: average.count,
            is_favorite: favorites.contains(&opportunity.id),
            in_comparison: comparison.contains(&opportunity.id),
        }
    }
}

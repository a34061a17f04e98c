use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::analysis::ScoreAggregator;
use crate::domain::foundation::ValidationError;
use crate::domain::judgment::Judgment;
use crate::domain::opportunity::{format_compact_currency, FundingStage, Opportunity};
use crate::domain::selection::{ComparisonSet, FavoriteSet};

/// Listing sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Company name, A to Z
    Name,
    /// Funding amount, high to low
    Funding,
    /// Valuation, high to low
    Valuation,
    /// Creation date, newest first
    Date,
    /// Average score, high to low, unjudged last
    Score,
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "funding" => Ok(SortKey::Funding),
            "valuation" => Ok(SortKey::Valuation),
            "date" => Ok(SortKey::Date),
            "score" => Ok(SortKey::Score),
            other => Err(ValidationError::invalid_format(
                "sort",
                format!("unknown sort key '{}'", other),
            )),
        }
    }
}

/// Criteria for the opportunity listing. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunityFilter {
    pub search: Option<String>,
    pub stage: Option<FundingStage>,
    pub industry: Option<String>,
    pub sort: Option<SortKey>,
    pub favorites_only: bool,
}

impl OpportunityFilter {
    fn accepts(&self, opportunity: &Opportunity, favorites: &FavoriteSet) -> bool {
        let search = self
            .search
            .as_deref()
            .map_or(true, |term| opportunity.matches_search(term));
        let stage = self.stage.map_or(true, |stage| opportunity.stage == stage);
        let industry = self
            .industry
            .as_deref()
            .map_or(true, |industry| opportunity.industry == industry);
        let favorite = !self.favorites_only || favorites.contains(&opportunity.id);

        search && stage && industry && favorite
    }
}

/// One card of the listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityCard {
    #[serde(flatten)]
    pub opportunity: Opportunity,
    /// Compact funding display, e.g. `$5.0M`
    pub funding_display: String,
    pub valuation_display: String,
    pub average_score: f64,
    pub judgment_count: usize,
    pub has_judgment: bool,
    pub is_favorite: bool,
    pub in_comparison: bool,
}

/// Distinct filter values present in the catalog, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub stages: Vec<FundingStage>,
    pub industries: Vec<String>,
}

impl FilterOptions {
    pub fn from_catalog(opportunities: &[Opportunity]) -> Self {
        let mut options = Self::default();
        for opportunity in opportunities {
            if !options.stages.contains(&opportunity.stage) {
                options.stages.push(opportunity.stage);
            }
            if !options.industries.contains(&opportunity.industry) {
                options.industries.push(opportunity.industry.clone());
            }
        }
        options
    }
}

/// The filtered, sorted listing plus the options to refine it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityListing {
    pub total: usize,
    pub opportunities: Vec<OpportunityCard>,
    pub filters: FilterOptions,
}

impl OpportunityListing {
    /// Applies `filter` to the catalog and decorates each match with its
    /// score summary and selection flags.
    ///
    /// Without a sort key the catalog order is kept.
    pub fn build(
        opportunities: &[Opportunity],
        judgments: &[Judgment],
        favorites: &FavoriteSet,
        comparison: &ComparisonSet,
        filter: &OpportunityFilter,
    ) -> Self {
        let mut cards: Vec<OpportunityCard> = opportunities
            .iter()
            .filter(|opportunity| filter.accepts(opportunity, favorites))
            .map(|opportunity| {
                let average = ScoreAggregator::opportunity_average(&opportunity.id, judgments);
                OpportunityCard {
                    funding_display: format_compact_currency(opportunity.funding_amount),
                    valuation_display: format_compact_currency(opportunity.valuation),
                    average_score: average.average,
                    judgment_count: average.count,
                    has_judgment: average.is_judged(),
                    is_favorite: favorites.contains(&opportunity.id),
                    in_comparison: comparison.contains(&opportunity.id),
                    opportunity: opportunity.clone(),
                }
            })
            .collect();

        if let Some(sort) = filter.sort {
            sort_cards(&mut cards, sort);
        }

        Self {
            total: cards.len(),
            opportunities: cards,
            filters: FilterOptions::from_catalog(opportunities),
        }
    }
}

fn sort_cards(cards: &mut [OpportunityCard], sort: SortKey) {
    match sort {
        SortKey::Name => cards.sort_by(|a, b| {
            a.opportunity
                .company_name
                .to_lowercase()
                .cmp(&b.opportunity.company_name.to_lowercase())
        }),
        SortKey::Funding => {
            cards.sort_by(|a, b| b.opportunity.funding_amount.cmp(&a.opportunity.funding_amount))
        }
        SortKey::Valuation => {
            cards.sort_by(|a, b| b.opportunity.valuation.cmp(&a.opportunity.valuation))
        }
        SortKey::Date => {
            cards.sort_by(|a, b| b.opportunity.created_at.cmp(&a.opportunity.created_at))
        }
        SortKey::Score => cards.sort_by(|a, b| {
            b.has_judgment
                .cmp(&a.has_judgment)
                .then_with(|| b.average_score.total_cmp(&a.average_score))
        }),
    }
}

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

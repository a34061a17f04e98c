//! Opportunity record - a company seeking investment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{OpportunityId, Timestamp, ValidationError};

use super::FundingStage;

/// A catalogued investment opportunity.
///
/// Opportunities are loaded once when the catalog starts and never change
/// afterwards, so the fields are plain data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: OpportunityId,
    pub company_name: String,
    pub industry: String,
    pub description: String,
    /// Amount being raised, in whole currency units.
    pub funding_amount: u64,
    /// Pre-money valuation, in whole currency units.
    pub valuation: u64,
    pub stage: FundingStage,
    pub location: String,
    #[serde(default)]
    pub founders: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch_deck: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Opportunity {
    /// Checks the fields a catalog file could get wrong.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.company_name.trim().is_empty() {
            return Err(ValidationError::empty_field("company_name"));
        }
        if self.industry.trim().is_empty() {
            return Err(ValidationError::empty_field("industry"));
        }
        Ok(())
    }

    /// Case-insensitive substring match over company name, description and industry.
    ///
    /// An empty or whitespace-only term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.company_name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self.industry.to_lowercase().contains(&needle)
    }
}

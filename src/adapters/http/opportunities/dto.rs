//! Request DTOs for opportunity endpoints.

use serde::Deserialize;

use crate::domain::dashboard::{OpportunityFilter, SortKey};
use crate::domain::foundation::ValidationError;
use crate::domain::judgment::{Recommendation, ScoreSet};
use crate::domain::opportunity::FundingStage;

/// Query string of `GET /api/opportunities`.
///
/// `stage` and `industry` accept `all` (or nothing) for no filter.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOpportunitiesParams {
    pub search: Option<String>,
    pub stage: Option<String>,
    pub industry: Option<String>,
    pub sort: Option<String>,
    #[serde(default)]
    pub favorites_only: bool,
}

impl ListOpportunitiesParams {
    pub fn into_filter(self) -> Result<OpportunityFilter, ValidationError> {
        Ok(OpportunityFilter {
            search: non_blank(self.search),
            stage: selected(self.stage)
                .map(|s| s.parse::<FundingStage>())
                .transpose()?,
            industry: selected(self.industry),
            sort: non_blank(self.sort)
                .map(|s| s.parse::<SortKey>())
                .transpose()?,
            favorites_only: self.favorites_only,
        })
    }
}

/// Body of `POST /api/opportunities/:id/judgments`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitJudgmentRequest {
    pub judge_name: String,
    pub scores: ScoreSet,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub recommendation: Recommendation,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn selected(value: Option<String>) -> Option<String> {
    non_blank(value).filter(|v| !v.eq_ignore_ascii_case("all"))
}

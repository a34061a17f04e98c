//! Response DTOs for selection endpoints.

use serde::Serialize;

use crate::domain::foundation::OpportunityId;
use crate::domain::selection::{ComparisonOutcome, ComparisonSet, FavoriteSet};

/// Result of toggling a favorite.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteResponse {
    pub opportunity_id: OpportunityId,
    pub is_favorite: bool,
    pub favorites: FavoriteSet,
}

/// Result of adding to the comparison set. A full or duplicate add is
/// still a success; `outcome` says what happened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonAddResponse {
    pub outcome: ComparisonOutcome,
    pub comparison: ComparisonSet,
}

/// Result of removing one entry or clearing the comparison set.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonChangeResponse {
    pub changed: bool,
    pub comparison: ComparisonSet,
}

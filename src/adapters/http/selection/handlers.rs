//! HTTP handlers for favorites and comparison endpoints.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::request_context::command_metadata;
use crate::adapters::http::state::AppState;
use crate::application::handlers::SelectionSnapshot;
use crate::domain::dashboard::ComparisonView;
use crate::domain::foundation::OpportunityId;

use super::dto::{ComparisonAddResponse, ComparisonChangeResponse, ToggleFavoriteResponse};

/// GET /api/selection - Both selection sets
pub async fn get_selection(
    State(state): State<AppState>,
) -> Result<Json<SelectionSnapshot>, ApiError> {
    Ok(Json(state.selection.snapshot().await?))
}

/// POST /api/favorites/:id/toggle - Toggle a favorite
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ToggleFavoriteResponse>, ApiError> {
    let opportunity_id = OpportunityId::new(id)?;
    let is_favorite = state
        .selection
        .toggle_favorite(opportunity_id.clone(), command_metadata(&headers))
        .await?;

    Ok(Json(ToggleFavoriteResponse {
        opportunity_id,
        is_favorite,
        favorites: state.selection.favorites().await?,
    }))
}

/// POST /api/comparison/:id - Add to the comparison set
pub async fn add_to_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ComparisonAddResponse>, ApiError> {
    let opportunity_id = OpportunityId::new(id)?;
    let outcome = state
        .selection
        .add_to_comparison(opportunity_id, command_metadata(&headers))
        .await?;

    Ok(Json(ComparisonAddResponse {
        outcome,
        comparison: state.selection.comparison().await?,
    }))
}

/// DELETE /api/comparison/:id - Remove from the comparison set
pub async fn remove_from_comparison(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ComparisonChangeResponse>, ApiError> {
    let opportunity_id = OpportunityId::new(id)?;
    let changed = state
        .selection
        .remove_from_comparison(&opportunity_id, command_metadata(&headers))
        .await?;

    Ok(Json(ComparisonChangeResponse {
        changed,
        comparison: state.selection.comparison().await?,
    }))
}

/// DELETE /api/comparison - Clear the comparison set
pub async fn clear_comparison(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ComparisonChangeResponse>, ApiError> {
    let changed = state
        .selection
        .clear_comparison(command_metadata(&headers))
        .await?;

    Ok(Json(ComparisonChangeResponse {
        changed,
        comparison: state.selection.comparison().await?,
    }))
}

/// GET /api/comparison/view - Side-by-side comparison
pub async fn get_comparison_view(
    State(state): State<AppState>,
) -> Result<Json<ComparisonView>, ApiError> {
    Ok(Json(state.comparison_view.handle().await?))
}

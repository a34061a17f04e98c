//! HTTP handlers for analytics, judge directory and export endpoints.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::domain::analysis::{DashboardAnalytics, JudgeSummary};

/// GET /api/analytics - Analytics snapshot
pub async fn get_analytics(
    State(state): State<AppState>,
) -> Result<Json<DashboardAnalytics>, ApiError> {
    Ok(Json(state.analytics.handle().await?))
}

/// GET /api/judges - Judge directory
pub async fn list_judges(
    State(state): State<AppState>,
) -> Result<Json<Vec<JudgeSummary>>, ApiError> {
    Ok(Json(state.judges.handle().await?))
}

/// GET /api/export/judgments.csv - CSV download
pub async fn export_judgments(State(state): State<AppState>) -> Result<Response, ApiError> {
    let export = state.export_judgments.handle().await?;
    let disposition = format!("attachment; filename=\"{}\"", export.filename);

    Ok((
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    )
        .into_response())
}

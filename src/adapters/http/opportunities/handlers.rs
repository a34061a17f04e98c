//! HTTP handlers for opportunity and judgment endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::adapters::http::error::ApiError;
use crate::adapters::http::request_context::command_metadata;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{
    GetOpportunityDetailQuery, ListOpportunitiesQuery, SubmitJudgmentCommand,
};
use crate::domain::dashboard::{OpportunityDetail, OpportunityListing, RubricView};
use crate::domain::foundation::OpportunityId;
use crate::domain::judgment::Judgment;

use super::dto::{ListOpportunitiesParams, SubmitJudgmentRequest};

/// GET /api/opportunities - Filtered, sorted listing
pub async fn list_opportunities(
    State(state): State<AppState>,
    params: Result<Query<ListOpportunitiesParams>, QueryRejection>,
) -> Result<Json<OpportunityListing>, ApiError> {
    let Query(params) = params?;
    let query = ListOpportunitiesQuery {
        filter: params.into_filter()?,
    };

    Ok(Json(state.list_opportunities.handle(query).await?))
}

/// GET /api/opportunities/:id - Opportunity detail
pub async fn get_opportunity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OpportunityDetail>, ApiError> {
    let query = GetOpportunityDetailQuery {
        opportunity_id: OpportunityId::new(id)?,
    };

    Ok(Json(state.opportunity_detail.handle(query).await?))
}

/// GET /api/opportunities/:id/judgments - Judgments in submission order
pub async fn list_judgments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Judgment>>, ApiError> {
    let opportunity_id = OpportunityId::new(id)?;

    Ok(Json(state.opportunity_judgments.handle(&opportunity_id).await?))
}

/// POST /api/opportunities/:id/judgments - Submit a judgment
pub async fn submit_judgment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    payload: Result<Json<SubmitJudgmentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Judgment>), ApiError> {
    let Json(req) = payload?;
    let cmd = SubmitJudgmentCommand {
        opportunity_id: OpportunityId::new(id)?,
        judge_name: req.judge_name,
        scores: req.scores,
        notes: req.notes,
        recommendation: req.recommendation,
    };

    let result = state
        .submit_judgment
        .handle(cmd, command_metadata(&headers))
        .await?;

    Ok((StatusCode::CREATED, Json(result.judgment)))
}

/// GET /api/rubric - Criteria metadata and score range
pub async fn get_rubric() -> Json<RubricView> {
    Json(RubricView::current())
}

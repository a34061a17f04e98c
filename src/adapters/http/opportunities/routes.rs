//! HTTP routes for opportunity endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{
    get_opportunity, get_rubric, list_judgments, list_opportunities, submit_judgment,
};

/// Opportunity, judgment and rubric routes, relative to `/api`.
pub fn opportunity_routes() -> Router<AppState> {
    Router::new()
        .route("/opportunities", get(list_opportunities))
        .route("/opportunities/:id", get(get_opportunity))
        .route(
            "/opportunities/:id/judgments",
            get(list_judgments).post(submit_judgment),
        )
        .route("/rubric", get(get_rubric))
}

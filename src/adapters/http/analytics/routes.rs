//! HTTP routes for analytics endpoints.

use axum::{routing::get, Router};

use crate::adapters::http::state::AppState;

use super::handlers::{export_judgments, get_analytics, list_judges};

/// Analytics, judge directory and export routes, relative to `/api`.
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/analytics", get(get_analytics))
        .route("/judges", get(list_judges))
        .route("/export/judgments.csv", get(export_judgments))
}

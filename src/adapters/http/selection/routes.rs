//! HTTP routes for selection endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{
    add_to_comparison, clear_comparison, get_comparison_view, get_selection,
    remove_from_comparison, toggle_favorite,
};

/// Favorites and comparison routes, relative to `/api`.
pub fn selection_routes() -> Router<AppState> {
    Router::new()
        .route("/selection", get(get_selection))
        .route("/favorites/:id/toggle", post(toggle_favorite))
        .route("/comparison", delete(clear_comparison))
        .route("/comparison/view", get(get_comparison_view))
        .route(
            "/comparison/:id",
            post(add_to_comparison).delete(remove_from_comparison),
        )
}

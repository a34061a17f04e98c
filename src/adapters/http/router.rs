//! Top-level router: API routes, live WebSocket and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::adapters::websocket::{live_router, LiveHub};
use crate::config::ServerConfig;

use super::analytics::analytics_routes;
use super::opportunities::opportunity_routes;
use super::request_context::REQUEST_ID_HEADER;
use super::selection::selection_routes;
use super::state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// GET /health - Liveness check
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// All JSON endpoints, relative to `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(opportunity_routes())
        .merge(analytics_routes())
        .merge(selection_routes())
}

/// Builds the complete application router.
///
/// Layout:
/// - `/health`
/// - `/api/...` JSON endpoints (gzip-compressed when the client accepts it)
/// - `/api/live` WebSocket
pub fn app_router(state: AppState, hub: Arc<LiveHub>, server: &ServerConfig) -> Router {
    let api = api_routes()
        .with_state(state)
        .layer(CompressionLayer::new())
        .merge(live_router().with_state(hub));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    server.request_timeout_secs,
                )))
                .layer(cors_layer(server)),
        )
}

/// CORS for the configured origins, or any origin when none are set.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([header::CONTENT_DISPOSITION]);

    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(AllowOrigin::list(origins))
    }
}

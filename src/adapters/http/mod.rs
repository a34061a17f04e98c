//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module with handlers, DTOs and routes; `router`
//! assembles them under `/api` together with the live WebSocket.

pub mod analytics;
pub mod error;
pub mod opportunities;
pub mod request_context;
pub mod router;
pub mod selection;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use router::{api_routes, app_router};
pub use state::AppState;

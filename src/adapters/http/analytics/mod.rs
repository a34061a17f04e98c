//! HTTP adapter for analytics, judge directory and CSV export.

mod handlers;
mod routes;

pub use routes::analytics_routes;

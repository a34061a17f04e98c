//! HTTP adapter for favorites and the comparison set.

mod dto;
mod handlers;
mod routes;

pub use dto::{ComparisonAddResponse, ComparisonChangeResponse, ToggleFavoriteResponse};
pub use routes::selection_routes;

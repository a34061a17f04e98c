//! HTTP adapter for opportunity, judgment and rubric endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{ListOpportunitiesParams, SubmitJudgmentRequest};
pub use routes::opportunity_routes;

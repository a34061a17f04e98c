//! Catalog handlers - listing, detail and per-opportunity judgments.

mod get_opportunity_detail;
mod list_opportunities;
mod list_opportunity_judgments;

pub use get_opportunity_detail::{GetOpportunityDetailHandler, GetOpportunityDetailQuery};
pub use list_opportunities::{ListOpportunitiesHandler, ListOpportunitiesQuery};
pub use list_opportunity_judgments::ListOpportunityJudgmentsHandler;

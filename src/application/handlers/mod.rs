//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analytics;
pub mod catalog;
pub mod judgment;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use analytics::{
    CsvExport, ExportJudgmentsHandler, GetDashboardAnalyticsHandler, ListJudgesHandler,
};
pub use catalog::{
    GetOpportunityDetailHandler, GetOpportunityDetailQuery, ListOpportunitiesHandler,
    ListOpportunitiesQuery, ListOpportunityJudgmentsHandler,
};
pub use judgment::{SubmitJudgmentCommand, SubmitJudgmentHandler, SubmitJudgmentResult};
pub use selection::{GetComparisonViewHandler, SelectionSnapshot, SelectionStore};

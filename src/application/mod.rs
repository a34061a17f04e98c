//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (judgment submission, selection changes) persist and
//! publish events; query handlers read through the ports and hand the data
//! to the pure domain builders.

pub mod handlers;

pub use handlers::{
    // Catalog queries
    GetOpportunityDetailHandler, GetOpportunityDetailQuery, ListOpportunitiesHandler,
    ListOpportunitiesQuery, ListOpportunityJudgmentsHandler,
    // Judgment commands
    SubmitJudgmentCommand, SubmitJudgmentHandler, SubmitJudgmentResult,
    // Analytics queries
    CsvExport, ExportJudgmentsHandler, GetDashboardAnalyticsHandler, ListJudgesHandler,
    // Selection
    GetComparisonViewHandler, SelectionSnapshot, SelectionStore,
};

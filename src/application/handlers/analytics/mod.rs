//! Analytics handlers - dashboard snapshot, judge directory and CSV export.

mod export_judgments;
mod get_dashboard_analytics;
mod list_judges;

pub use export_judgments::{CsvExport, ExportJudgmentsHandler};
pub use get_dashboard_analytics::GetDashboardAnalyticsHandler;
pub use list_judges::ListJudgesHandler;

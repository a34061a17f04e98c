//! Shared state for the HTTP handlers.

use std::sync::Arc;

use crate::application::handlers::{
    ExportJudgmentsHandler, GetComparisonViewHandler, GetDashboardAnalyticsHandler,
    GetOpportunityDetailHandler, ListJudgesHandler, ListOpportunitiesHandler,
    ListOpportunityJudgmentsHandler, SelectionStore, SubmitJudgmentHandler,
};
use crate::ports::{EventPublisher, JudgmentRepository, OpportunityCatalog};

/// Application handlers wired to one set of ports.
#[derive(Clone)]
pub struct AppState {
    pub list_opportunities: Arc<ListOpportunitiesHandler>,
    pub opportunity_detail: Arc<GetOpportunityDetailHandler>,
    pub opportunity_judgments: Arc<ListOpportunityJudgmentsHandler>,
    pub submit_judgment: Arc<SubmitJudgmentHandler>,
    pub analytics: Arc<GetDashboardAnalyticsHandler>,
    pub judges: Arc<ListJudgesHandler>,
    pub export_judgments: Arc<ExportJudgmentsHandler>,
    pub comparison_view: Arc<GetComparisonViewHandler>,
    pub selection: Arc<SelectionStore>,
}

impl AppState {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
        selection: Arc<SelectionStore>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            list_opportunities: Arc::new(ListOpportunitiesHandler::new(
                catalog.clone(),
                judgments.clone(),
                selection.clone(),
            )),
            opportunity_detail: Arc::new(GetOpportunityDetailHandler::new(
                catalog.clone(),
                judgments.clone(),
                selection.clone(),
            )),
            opportunity_judgments: Arc::new(ListOpportunityJudgmentsHandler::new(
                catalog.clone(),
                judgments.clone(),
            )),
            submit_judgment: Arc::new(SubmitJudgmentHandler::new(
                catalog.clone(),
                judgments.clone(),
                event_publisher,
            )),
            analytics: Arc::new(GetDashboardAnalyticsHandler::new(
                catalog.clone(),
                judgments.clone(),
            )),
            judges: Arc::new(ListJudgesHandler::new(catalog.clone(), judgments.clone())),
            export_judgments: Arc::new(ExportJudgmentsHandler::new(
                catalog.clone(),
                judgments.clone(),
            )),
            comparison_view: Arc::new(GetComparisonViewHandler::new(
                catalog,
                judgments,
                selection.clone(),
            )),
            selection,
        }
    }
}

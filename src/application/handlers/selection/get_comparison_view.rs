//! GetComparisonViewHandler - Query handler for the side-by-side comparison.

use std::sync::Arc;

use crate::domain::dashboard::ComparisonView;
use crate::domain::foundation::DomainError;
use crate::ports::{JudgmentRepository, OpportunityCatalog};

use super::SelectionStore;

/// Handler for the comparison view.
pub struct GetComparisonViewHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
    selection: Arc<SelectionStore>,
}

impl GetComparisonViewHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
        selection: Arc<SelectionStore>,
    ) -> Self {
        Self {
            catalog,
            judgments,
            selection,
        }
    }

    pub async fn handle(&self) -> Result<ComparisonView, DomainError> {
        let comparison = self.selection.comparison().await?;
        let opportunities = self.catalog.list_all().await?;
        let judgments = self.judgments.list_all().await?;

        Ok(ComparisonView::build(&opportunities, &judgments, &comparison))
    }
}

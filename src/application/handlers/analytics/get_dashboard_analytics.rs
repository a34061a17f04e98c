//! GetDashboardAnalyticsHandler - Query handler for the analytics snapshot.

use std::sync::Arc;

use crate::domain::analysis::{AnalyticsCalculator, DashboardAnalytics};
use crate::domain::foundation::DomainError;
use crate::ports::{JudgmentRepository, OpportunityCatalog};

pub struct GetDashboardAnalyticsHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
}

impl GetDashboardAnalyticsHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
    ) -> Self {
        Self { catalog, judgments }
    }

    pub async fn handle(&self) -> Result<DashboardAnalytics, DomainError> {
        let opportunities = self.catalog.list_all().await?;
        let judgments = self.judgments.list_all().await?;

        Ok(AnalyticsCalculator::compute(&opportunities, &judgments))
    }
}

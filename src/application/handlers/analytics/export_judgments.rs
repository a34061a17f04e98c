//! ExportJudgmentsHandler - Query handler producing the judgments CSV download.

use std::sync::Arc;

use crate::domain::export::{csv_filename, JudgmentCsvExporter, CSV_CONTENT_TYPE};
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{JudgmentRepository, OpportunityCatalog};

/// A rendered CSV file ready to be served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub content_type: &'static str,
    pub content: String,
}

pub struct ExportJudgmentsHandler {
    catalog: Arc<dyn OpportunityCatalog>,
    judgments: Arc<dyn JudgmentRepository>,
}

impl ExportJudgmentsHandler {
    pub fn new(
        catalog: Arc<dyn OpportunityCatalog>,
        judgments: Arc<dyn JudgmentRepository>,
    ) -> Self {
        Self { catalog, judgments }
    }

    pub async fn handle(&self) -> Result<CsvExport, DomainError> {
        let opportunities = self.catalog.list_all().await?;
        let judgments = self.judgments.list_all().await?;

        let export = CsvExport {
            filename: csv_filename(&Timestamp::now()),
            content_type: CSV_CONTENT_TYPE,
            content: JudgmentCsvExporter::export(&opportunities, &judgments),
        };

        tracing::info!(
            rows = judgments.len(),
            filename = %export.filename,
            "Judgments exported"
        );

        Ok(export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{catalog, MockJudgmentRepository};
    use crate::domain::judgment::test_support::judgment;

    #[tokio::test]
    async fn export_has_header_and_one_row_per_judgment() {
        let repo = MockJudgmentRepository::with_judgments(vec![
            judgment("1", "Ada", [8; 5]),
            judgment("gone", "Bob", [4; 5]),
        ]);
        let handler = ExportJudgmentsHandler::new(catalog(), Arc::new(repo));

        let export = handler.handle().await.unwrap();
        let lines: Vec<&str> = export.content.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Company Name,Industry,Stage"));
        assert!(lines[2].starts_with("\"N/A\""));
        assert_eq!(export.content_type, "text/csv;charset=utf-8");
        assert!(export.filename.starts_with("judgments-"));
        assert!(export.filename.ends_with(".csv"));
    }

    #[tokio::test]
    async fn empty_export_is_header_only() {
        let handler =
            ExportJudgmentsHandler::new(catalog(), Arc::new(MockJudgmentRepository::new()));

        let export = handler.handle().await.unwrap();

        assert!(!export.content.contains('\n'));
    }
}

//! CSV export of judgments joined with their opportunities.

use crate::domain::foundation::Timestamp;
use crate::domain::judgment::{Criterion, Judgment};
use crate::domain::opportunity::Opportunity;

/// MIME type of the export download.
pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8";

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 15] = [
    "Company Name",
    "Industry",
    "Stage",
    "Funding Amount",
    "Valuation",
    "Judge Name",
    "Overall Score",
    "Market Potential",
    "Team Quality",
    "Product Innovation",
    "Business Model",
    "Traction",
    "Recommendation",
    "Notes",
    "Judged At",
];

const MISSING: &str = "N/A";

/// Renders judgments as CSV text.
pub struct JudgmentCsvExporter;

impl JudgmentCsvExporter {
    /// One header row followed by one row per judgment, in input order.
    ///
    /// The header is unquoted. Every data field is double-quoted with
    /// embedded quotes doubled. Opportunity columns read `N/A` when the
    /// judgment's opportunity is not in `opportunities`. Rows are joined
    /// with `\n` and there is no trailing newline.
    pub fn export(opportunities: &[Opportunity], judgments: &[Judgment]) -> String {
        let mut lines = Vec::with_capacity(judgments.len() + 1);
        lines.push(CSV_HEADERS.join(","));

        for judgment in judgments {
            let opportunity = opportunities
                .iter()
                .find(|o| &o.id == judgment.opportunity_id());
            let row: Vec<String> = Self::fields(opportunity, judgment)
                .iter()
                .map(|field| quote(field))
                .collect();
            lines.push(row.join(","));
        }

        lines.join("\n")
    }

    fn fields(opportunity: Option<&Opportunity>, judgment: &Judgment) -> Vec<String> {
        let (company, industry, stage, funding, valuation) = match opportunity {
            Some(o) => (
                o.company_name.clone(),
                o.industry.clone(),
                o.stage.label().to_string(),
                o.funding_amount.to_string(),
                o.valuation.to_string(),
            ),
            None => (
                MISSING.to_string(),
                MISSING.to_string(),
                MISSING.to_string(),
                MISSING.to_string(),
                MISSING.to_string(),
            ),
        };

        let mut fields = vec![
            company,
            industry,
            stage,
            funding,
            valuation,
            judgment.judge_name().to_string(),
            format!("{:.2}", judgment.overall_score()),
        ];
        fields.extend(
            Criterion::ALL
                .iter()
                .map(|&c| judgment.scores().get(c).to_string()),
        );
        fields.push(judgment.recommendation().label().to_string());
        fields.push(judgment.notes().to_string());
        fields.push(judgment.judged_at().to_iso_date());
        fields
    }
}

/// Download filename for an export taken at `now`.
pub fn csv_filename(now: &Timestamp) -> String {
    format!("judgments-{}.csv", now.to_iso_date())
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{JudgmentId, OpportunityId};
    use crate::domain::judgment::test_support::{judgment_on, scores};
    use crate::domain::judgment::Recommendation;
    use crate::domain::opportunity::test_support::opportunity;
    use crate::domain::opportunity::FundingStage;

    fn date() -> Timestamp {
        Timestamp::from_ymd(2024, 2, 20).unwrap()
    }

    #[test]
    fn header_is_unquoted() {
        let csv = JudgmentCsvExporter::export(&[], &[]);
        assert_eq!(
            csv,
            "Company Name,Industry,Stage,Funding Amount,Valuation,Judge Name,Overall Score,\
             Market Potential,Team Quality,Product Innovation,Business Model,Traction,\
             Recommendation,Notes,Judged At"
        );
    }

    #[test]
    fn row_quotes_every_field() {
        let mut opp = opportunity("1", FundingStage::SeriesA, "Artificial Intelligence");
        opp.company_name = "TechVision AI".to_string();
        opp.funding_amount = 5_000_000;
        opp.valuation = 25_000_000;
        let j = judgment_on("1", "John Investor", [8, 9, 8, 7, 6], Recommendation::Pass, date());

        let csv = JudgmentCsvExporter::export(&[opp], &[j]);
        let row = csv.lines().nth(1).unwrap();

        assert_eq!(
            row,
            r#""TechVision AI","Artificial Intelligence","Series A","5000000","25000000","John Investor","7.60","8","9","8","7","6","Pass","","2024-02-20""#
        );
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let j = Judgment::restore(
            JudgmentId::from_string("j1"),
            OpportunityId::new("1").unwrap(),
            "Ada",
            scores([5; 5]),
            r#"He said "great""#,
            Recommendation::Pass,
            date(),
        )
        .unwrap();
        let opp = opportunity("1", FundingStage::Seed, "X");

        let csv = JudgmentCsvExporter::export(&[opp], &[j]);

        assert!(csv.contains(r#""He said ""great""""#));
    }

    #[test]
    fn quotes_in_any_field_are_doubled() {
        let mut opp = opportunity("1", FundingStage::Seed, "X");
        opp.company_name = r#"The "Best" Co"#.to_string();
        let j = judgment_on("1", "Ada", [5; 5], Recommendation::Pass, date());

        let csv = JudgmentCsvExporter::export(&[opp], &[j]);

        assert!(csv.contains(r#""The ""Best"" Co""#));
    }

    #[test]
    fn missing_opportunity_renders_na() {
        let j = judgment_on("gone", "Ada", [5; 5], Recommendation::Reject, date());

        let csv = JudgmentCsvExporter::export(&[], &[j]);
        let row = csv.lines().nth(1).unwrap();

        assert!(row.starts_with(r#""N/A","N/A","N/A","N/A","N/A","Ada","5.00""#));
    }

    #[test]
    fn rows_follow_input_order_without_trailing_newline() {
        let opp = opportunity("1", FundingStage::Seed, "X");
        let judgments = vec![
            judgment_on("1", "First", [5; 5], Recommendation::Pass, date()),
            judgment_on("1", "Second", [5; 5], Recommendation::Pass, date()),
        ];

        let csv = JudgmentCsvExporter::export(&[opp], &judgments);
        let lines: Vec<&str> = csv.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("First"));
        assert!(lines[2].contains("Second"));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn filename_uses_iso_date() {
        assert_eq!(csv_filename(&date()), "judgments-2024-02-20.csv");
    }
}

//! Export module - judgments as downloadable CSV.

mod csv;

pub use csv::{csv_filename, JudgmentCsvExporter, CSV_CONTENT_TYPE, CSV_HEADERS};

//! Judgment repository adapters.
//!
//! - `InMemoryJudgmentRepository` - Process-lifetime storage (default)
//! - `JsonFileJudgmentRepository` - JSON file in the configured data directory

mod in_memory;
mod json_file;

pub use in_memory::InMemoryJudgmentRepository;
pub use json_file::{JsonFileJudgmentRepository, JUDGMENTS_FILE_NAME};

//! Judgment handlers.

mod submit_judgment;

pub use submit_judgment::{SubmitJudgmentCommand, SubmitJudgmentHandler, SubmitJudgmentResult};

//! Judgment module - rubric, scores and submitted evaluations.

mod events;
#[allow(clippy::module_inception)]
mod judgment;
mod recommendation;
mod score;
mod score_set;

pub use events::JudgmentSubmitted;
pub use judgment::Judgment;
pub use recommendation::Recommendation;
pub use score::Score;
pub use score_set::{Criterion, ScoreSet};

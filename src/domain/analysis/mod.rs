//! Analysis Module - Pure scoring and aggregation services.
//!
//! # Components
//!
//! - `ScoreAggregator` - Overall score of a score set, per-opportunity averages
//! - `AnalyticsCalculator` - Dashboard-wide counts, rankings and distribution
//! - `JudgeDirectory` - Per-judge statistics and recent activity
//!
//! All functions are pure and stateless. They take domain objects as input
//! and return computed results; nothing here performs I/O.

mod aggregation;
mod analytics;
mod judge_directory;

pub use aggregation::{OpportunityAverage, ScoreAggregator};
pub use analytics::{
    AnalyticsCalculator, DashboardAnalytics, ScoreBucket, ScoredOpportunity, TOP_SCORED_LIMIT,
};
pub use judge_directory::{
    JudgeDirectory, JudgeSummary, JudgedOpportunity, RECENT_JUDGMENTS_LIMIT,
};

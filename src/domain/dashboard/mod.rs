//! Dashboard views - read models assembled from catalog, judgments and selections.

pub mod comparison_view;
pub mod listing;
pub mod opportunity_detail;
pub mod rubric;

pub use comparison_view::{ComparisonColumn, ComparisonView, CriterionAverage};
pub use listing::{FilterOptions, OpportunityCard, OpportunityFilter, OpportunityListing, SortKey};
pub use opportunity_detail::OpportunityDetail;
pub use rubric::{CriterionInfo, RubricView};

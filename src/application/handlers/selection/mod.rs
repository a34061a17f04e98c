//! Selection handlers - favorites, comparison set and comparison view.

mod get_comparison_view;
mod selection_store;

pub use get_comparison_view::GetComparisonViewHandler;
pub use selection_store::{SelectionSnapshot, SelectionStore};

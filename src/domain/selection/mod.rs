//! Selection module - favorites and the comparison set.
//!
//! Both sets are ordered lists of distinct opportunity ids. Favorites are
//! uncapped; the comparison set holds at most [`MAX_COMPARISON`] entries.

mod comparison;
mod events;
mod favorites;
mod kind;

pub use comparison::{ComparisonOutcome, ComparisonSet, MAX_COMPARISON};
pub use events::{ComparisonChanged, FavoritesChanged};
pub use favorites::FavoriteSet;
pub use kind::SelectionKind;

//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, events)
//! - `opportunity` - Catalogued investment opportunities
//! - `judgment` - Rubric, scores and submitted judgments
//! - `analysis` - Pure scoring, analytics and judge statistics
//! - `selection` - Favorites and the comparison set
//! - `dashboard` - Read models for the dashboard views
//! - `export` - CSV export

pub mod analysis;
pub mod dashboard;
pub mod export;
pub mod foundation;
pub mod judgment;
pub mod opportunity;
pub mod selection;

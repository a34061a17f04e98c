//! Opportunity catalog adapters.
//!
//! - `InMemoryOpportunityCatalog` - Catalog held in memory
//! - `CatalogFile` - YAML catalog loader
//! - `seed_catalog` - Built-in catalog embedded in the binary

mod catalog_file;
mod in_memory;
mod seed;

pub use catalog_file::{CatalogFile, CatalogLoadError};
pub use in_memory::InMemoryOpportunityCatalog;
pub use seed::seed_catalog;

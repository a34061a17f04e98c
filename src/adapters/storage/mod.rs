//! Selection storage adapters.
//!
//! - `InMemorySelectionStorage` - Process-lifetime key-value store
//! - `FileSelectionStorage` - One JSON file per key

mod file_selection_storage;
mod in_memory_selection_storage;

pub use file_selection_storage::FileSelectionStorage;
pub use in_memory_selection_storage::InMemorySelectionStorage;

//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Data Ports
//!
//! - `OpportunityCatalog` - Read-only opportunity catalog
//! - `JudgmentRepository` - Append-only judgment persistence
//! - `SelectionStorage` - Key-value store for favorites and comparison
//!
//! ## Event Ports
//!
//! - `EventPublisher` - Port for publishing domain events
//! - `EventSubscriber` - Port for subscribing to domain events
//! - `EventHandler` - Handler that processes incoming events

mod event_publisher;
mod event_subscriber;
mod judgment_repository;
mod opportunity_catalog;
mod selection_storage;

pub use event_publisher::EventPublisher;
pub use event_subscriber::{EventBus, EventHandler, EventSubscriber};
pub use judgment_repository::JudgmentRepository;
pub use opportunity_catalog::OpportunityCatalog;
pub use selection_storage::{SelectionStorage, SelectionStorageError};

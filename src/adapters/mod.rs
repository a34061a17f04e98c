//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Opportunity catalog (built-in seed, YAML file)
//! - `judgments` - Judgment repositories (in-memory, JSON file)
//! - `storage` - Selection key-value stores (in-memory, file)
//! - `events` - In-process event bus
//! - `websocket` - Live update hub and `/api/live` endpoint
//! - `http` - REST API

pub mod catalog;
pub mod events;
pub mod http;
pub mod judgments;
pub mod storage;
pub mod websocket;

pub use events::InMemoryEventBus;

//! WebSocket adapter for live dashboard updates.
//!
//! - `LiveHub` - Broadcast fan-out to connected clients
//! - `LiveEventBridge` - Event bus handler feeding the hub
//! - `ws_handler` / `live_router` - Axum upgrade endpoint
//! - `messages` - Wire protocol

mod event_bridge;
mod handler;
mod hub;
pub mod messages;

pub use event_bridge::{LiveEventBridge, LIVE_EVENT_TYPES};
pub use handler::{live_router, ws_handler};
pub use hub::{ClientId, LiveHub, DEFAULT_LIVE_CHANNEL_CAPACITY};
pub use messages::{LiveUpdate, LiveUpdateType, ServerMessage};

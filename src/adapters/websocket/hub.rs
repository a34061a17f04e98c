//! Live-update hub fanning dashboard updates out to every connected client.
//!
//! ```text
//! event bus ──► LiveEventBridge ──► LiveHub (broadcast) ──► client-a
//!                                                      ├──► client-b
//!                                                      └──► client-c
//! ```
//!
//! All clients see the same updates; there is one audience, so there are no
//! rooms.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use tokio::sync::broadcast;
use uuid::Uuid;

use super::messages::LiveUpdate;

/// Default broadcast buffer size.
pub const DEFAULT_LIVE_CHANNEL_CAPACITY: usize = 128;

/// Unique identifier for a WebSocket client connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broadcast hub for live dashboard updates.
///
/// If the buffer is full the oldest updates are dropped; clients that fall
/// that far behind skip the missed updates and carry on.
pub struct LiveHub {
    sender: broadcast::Sender<LiveUpdate>,
    clients: RwLock<HashSet<ClientId>>,
}

impl LiveHub {
    /// Create a hub whose broadcast buffer holds `channel_capacity` updates.
    ///
    /// A capacity of 0 is raised to 1, the minimum tokio accepts.
    pub fn new(channel_capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(channel_capacity.max(1));
        Self {
            sender,
            clients: RwLock::new(HashSet::new()),
        }
    }

    /// Register a client and return its update stream.
    pub fn join(&self, client_id: ClientId) -> broadcast::Receiver<LiveUpdate> {
        self.clients
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(client_id);
        self.sender.subscribe()
    }

    /// Forget a client. Its receiver should already be dropped.
    pub fn leave(&self, client_id: &ClientId) {
        self.clients
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(client_id);
    }

    /// Send an update to every connected client.
    ///
    /// Returns how many receivers it was queued for; 0 when nobody is connected.
    pub fn broadcast(&self, update: LiveUpdate) -> usize {
        self.sender.send(update).unwrap_or(0)
    }

    /// Number of registered clients.
    pub fn client_count(&self) -> usize {
        self.clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for LiveHub {
    fn default() -> Self {
        Self::new(DEFAULT_LIVE_CHANNEL_CAPACITY)
    }
}

//! Event bridge connecting domain events to live WebSocket clients.
//!
//! ```text
//! Domain event published
//!          │
//!          ▼
//!   LiveEventBridge ── transform ──► LiveUpdate ──► LiveHub::broadcast
//! ```

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, EventEnvelope};
use crate::ports::{EventHandler, EventSubscriber};

use super::hub::LiveHub;
use super::messages::{LiveUpdate, LiveUpdateType};

/// Event types pushed to live clients.
pub const LIVE_EVENT_TYPES: &[&str] = &[
    "judgment.submitted.v1",
    "favorites.changed.v1",
    "comparison.changed.v1",
];

/// Bridge between the event bus and the live hub.
pub struct LiveEventBridge {
    hub: Arc<LiveHub>,
}

impl LiveEventBridge {
    pub fn new(hub: Arc<LiveHub>) -> Self {
        Self { hub }
    }

    /// Create as an Arc (for sharing with event subscriber).
    pub fn new_shared(hub: Arc<LiveHub>) -> Arc<Self> {
        Arc::new(Self::new(hub))
    }

    /// Subscribe this bridge to every live event type.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let bridge = LiveEventBridge::new_shared(hub);
    /// bridge.register(event_bus.as_ref());
    /// ```
    pub fn register(self: &Arc<Self>, subscriber: &impl EventSubscriber) {
        subscriber.subscribe_all(LIVE_EVENT_TYPES, self.clone());
    }

    /// Returns `None` for event types live clients don't care about.
    fn transform(&self, event: &EventEnvelope) -> Option<LiveUpdate> {
        let update_type = match event.event_type.as_str() {
            "judgment.submitted.v1" => LiveUpdateType::JudgmentSubmitted,
            "favorites.changed.v1" => LiveUpdateType::FavoritesChanged,
            "comparison.changed.v1" => LiveUpdateType::ComparisonChanged,
            _ => return None,
        };

        Some(LiveUpdate {
            update_type,
            data: event.payload.clone(),
            timestamp: event.occurred_at,
            correlation_id: event.metadata.correlation_id.clone(),
        })
    }
}

#[async_trait]
impl EventHandler for LiveEventBridge {
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
        let Some(update) = self.transform(&event) else {
            return Ok(());
        };

        let delivered = self.hub.broadcast(update);
        tracing::trace!(event_type = %event.event_type, delivered, "Live update broadcast");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "LiveEventBridge"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventBus;
    use crate::adapters::websocket::ClientId;
    use crate::domain::foundation::EventEnvelope;
    use crate::domain::selection::{ComparisonChanged, ComparisonSet};
    use crate::ports::EventPublisher;
    use serde_json::json;

    fn envelope(event_type: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, "favorites", "Selection", json!({"x": 1}))
    }

    #[test]
    fn transform_maps_each_live_type() {
        let bridge = LiveEventBridge::new(Arc::new(LiveHub::default()));

        let cases = [
            ("judgment.submitted.v1", LiveUpdateType::JudgmentSubmitted),
            ("favorites.changed.v1", LiveUpdateType::FavoritesChanged),
            ("comparison.changed.v1", LiveUpdateType::ComparisonChanged),
        ];
        for (event_type, expected) in cases {
            let update = bridge.transform(&envelope(event_type)).unwrap();
            assert_eq!(update.update_type, expected);
            assert_eq!(update.data["x"], 1);
        }
    }

    #[test]
    fn transform_unknown_event_returns_none() {
        let bridge = LiveEventBridge::new(Arc::new(LiveHub::default()));
        assert!(bridge.transform(&envelope("unknown.event.v1")).is_none());
    }

    #[tokio::test]
    async fn handle_skips_irrelevant_events() {
        let bridge = LiveEventBridge::new(Arc::new(LiveHub::default()));
        assert!(bridge.handle(envelope("internal.cleanup.v1")).await.is_ok());
    }

    #[tokio::test]
    async fn registered_bridge_forwards_bus_events_to_clients() {
        let bus = InMemoryEventBus::new();
        let hub = Arc::new(LiveHub::default());
        let bridge = LiveEventBridge::new_shared(hub.clone());
        bridge.register(&bus);

        let mut rx = hub.join(ClientId::new());
        let event = ComparisonChanged::new(&ComparisonSet::default());
        bus.publish(EventEnvelope::from_event(&event).unwrap())
            .await
            .unwrap();

        let received = rx.recv().await.unwrap();
        assert_eq!(received.update_type, LiveUpdateType::ComparisonChanged);
        assert_eq!(received.data["selection"], "comparison");
    }
}

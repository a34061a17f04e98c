//! In-memory event bus.
//!
//! Delivers events synchronously to every handler registered for the event
//! type, in registration order. This is the process-wide bus that feeds the
//! live-update hub; tests also use it to capture published events.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::{EventHandler, EventPublisher, EventSubscriber};

/// In-process event bus.
///
/// Locks are never held across an await point. A poisoned lock is recovered
/// rather than propagated, since the guarded data is a plain list.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.subscribe("judgment.submitted.v1", bridge);
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("judgment.submitted.v1"));
/// ```
pub struct InMemoryEventBus {
    handlers: RwLock<HashMap<String, Vec<Arc<dyn EventHandler>>>>,
    published: RwLock<Vec<EventEnvelope>>,
    retain_published: bool,
}

impl InMemoryEventBus {
    /// Creates a bus that keeps every published event for inspection.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            published: RwLock::new(Vec::new()),
            retain_published: true,
        }
    }

    /// Creates a bus that only dispatches, for long-running servers.
    pub fn dispatch_only() -> Self {
        Self {
            retain_published: false,
            ..Self::new()
        }
    }

    /// Returns all retained events.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns retained events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Clears retained events.
    pub fn clear(&self) {
        self.published
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Returns count of retained events.
    pub fn event_count(&self) -> usize {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Checks if a specific event type was published.
    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .any(|e| e.event_type == event_type)
    }
}

impl Default for InMemoryEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        if self.retain_published {
            self.published
                .write()
                .unwrap_or_else(PoisonError::into_inner)
                .push(event.clone());
        }

        // Clone handlers to release lock before await points
        let type_handlers: Vec<Arc<dyn EventHandler>> = {
            let handlers = self
                .handlers
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            handlers
                .get(&event.event_type)
                .cloned()
                .unwrap_or_default()
        };

        let mut errors = Vec::new();
        for handler in type_handlers {
            if let Err(e) = handler.handle(event.clone()).await {
                tracing::warn!(
                    handler = handler.name(),
                    event_type = %event.event_type,
                    error = %e,
                    "Event handler failed"
                );
                errors.push(format!("{}: {}", handler.name(), e));
            }
        }

        if !errors.is_empty() {
            return Err(DomainError::new(
                ErrorCode::InternalError,
                format!("Handler errors: {}", errors.join(", ")),
            ));
        }

        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}

impl EventSubscriber for InMemoryEventBus {
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(event_type.to_string())
            .or_default()
            .push(handler);
    }

    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>) {
        let mut handlers = self
            .handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        for event_type in event_types {
            handlers
                .entry((*event_type).to_string())
                .or_default()
                .push(Arc::clone(&handler));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHandler {
        count: AtomicUsize,
    }

    #[async_trait]
    impl EventHandler for CountingHandler {
        async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
            self.count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn name(&self) -> &'static str {
            "CountingHandler"
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl EventHandler for FailingHandler {
        async fn handle(&self, _event: EventEnvelope) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::InternalError, "boom"))
        }

        fn name(&self) -> &'static str {
            "FailingHandler"
        }
    }

    fn envelope(event_type: &str) -> EventEnvelope {
        EventEnvelope::new(event_type, "favorites", "Selection", json!({}))
    }

    #[tokio::test]
    async fn publish_records_and_dispatches_by_type() {
        let bus = InMemoryEventBus::new();
        let handler = Arc::new(CountingHandler {
            count: AtomicUsize::new(0),
        });
        bus.subscribe("favorites.changed.v1", handler.clone());

        bus.publish(envelope("favorites.changed.v1")).await.unwrap();
        bus.publish(envelope("comparison.changed.v1")).await.unwrap();

        assert_eq!(handler.count.load(Ordering::SeqCst), 1);
        assert_eq!(bus.event_count(), 2);
        assert!(bus.has_event("comparison.changed.v1"));
        assert_eq!(bus.events_of_type("favorites.changed.v1").len(), 1);
    }

    #[tokio::test]
    async fn subscribe_all_registers_every_type() {
        let bus = InMemoryEventBus::new();
        let handler = Arc::new(CountingHandler {
            count: AtomicUsize::new(0),
        });
        bus.subscribe_all(&["a.v1", "b.v1"], handler.clone());

        bus.publish(envelope("a.v1")).await.unwrap();
        bus.publish(envelope("b.v1")).await.unwrap();

        assert_eq!(handler.count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_failure_is_reported_after_all_handlers_run() {
        let bus = InMemoryEventBus::new();
        let counter = Arc::new(CountingHandler {
            count: AtomicUsize::new(0),
        });
        bus.subscribe("a.v1", Arc::new(FailingHandler));
        bus.subscribe("a.v1", counter.clone());

        let result = bus.publish(envelope("a.v1")).await;

        assert!(result.is_err());
        assert_eq!(counter.count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn dispatch_only_bus_keeps_nothing() {
        let bus = InMemoryEventBus::dispatch_only();
        bus.publish(envelope("a.v1")).await.unwrap();
        assert_eq!(bus.event_count(), 0);

        bus.publish_all(vec![envelope("a.v1"), envelope("b.v1")])
            .await
            .unwrap();
        bus.clear();
        assert!(bus.published_events().is_empty());
    }
}

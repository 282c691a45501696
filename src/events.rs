use serde::Serialize;
use tokio::sync::broadcast;

use crate::models::{CartEntry, Product};

/// Snapshot published after every successful write.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "kebab-case")]
pub enum StoreEvent {
    CatalogChanged(Vec<Product>),
    CartChanged(Vec<CartEntry>),
}

impl StoreEvent {
    pub fn name(&self) -> &'static str {
        match self {
            StoreEvent::CatalogChanged(_) => "catalog-changed",
            StoreEvent::CartChanged(_) => "cart-changed",
        }
    }
}

/// Fan-out of store events to every registered view.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: StoreEvent) {
        let name = event.name();
        // No subscribers is fine.
        match self.tx.send(event) {
            Ok(receivers) => tracing::debug!(event = name, receivers, "event published"),
            Err(_) => tracing::trace!(event = name, "event dropped, no subscribers"),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}

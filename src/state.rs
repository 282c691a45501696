use std::sync::Arc;

use crate::{
    events::EventBus,
    services::storefront::Storefront,
    storage::{MemoryStore, SessionStore, StorageBackend},
};

#[derive(Clone)]
pub struct AppState {
    pub storefront: Arc<Storefront<StorageBackend>>,
    pub sessions: SessionStore,
    /// Name of the storage backend, for diagnostics.
    pub backend: &'static str,
}

impl AppState {
    pub fn new(backend: StorageBackend, event_capacity: usize) -> Self {
        Self {
            backend: backend.name(),
            storefront: Arc::new(Storefront::new(backend, EventBus::new(event_capacity))),
            sessions: SessionStore::new(),
        }
    }

    /// State over a fresh in-process store.
    pub fn in_memory() -> Self {
        Self::new(StorageBackend::Memory(MemoryStore::new()), 64)
    }
}

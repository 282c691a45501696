use std::{collections::HashMap, sync::Arc};

use parking_lot::RwLock;
use uuid::Uuid;

/// Ephemeral, per-session string storage. Nothing here outlives the process.
#[derive(Debug, Clone)]
pub struct Session {
    id: String,
    items: HashMap<String, String>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            items: HashMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn has_item(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    pub fn set_item(&mut self, key: &str, value: impl Into<String>) {
        self.items.insert(key.to_string(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) {
        self.items.remove(key);
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a fresh session. It is not tracked until [`SessionStore::put`].
    pub fn open(&self) -> Session {
        Session::new()
    }

    pub fn put(&self, session: Session) {
        self.sessions.write().insert(session.id.clone(), session);
    }

    pub fn get(&self, id: &str) -> Option<Session> {
        self.sessions.read().get(id).cloned()
    }

    /// Drop a session and everything stored in it. Returns whether it existed.
    pub fn end(&self, id: &str) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

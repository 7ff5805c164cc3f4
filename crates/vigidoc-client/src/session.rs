use std::sync::Mutex;

use uuid::Uuid;

/// Where the session identifier lives. Injected into the HTTP gateway so its
/// behavior is testable without any ambient storage mechanism.
pub trait SessionStore: Send + Sync {
    /// Current session id, if the store holds or can mint one.
    fn get(&self) -> Option<String>;

    /// Replace the stored session id, e.g. when the server returns a fresh one.
    fn set(&self, id: String);
}

/// Process-lifetime session store. Generates a v4 UUID on first read and
/// keeps it until the server supplies a replacement.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    id: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<String> {
        let mut id = self.id.lock().unwrap_or_else(|e| e.into_inner());
        Some(id.get_or_insert_with(|| Uuid::new_v4().to_string()).clone())
    }

    fn set(&self, new_id: String) {
        *self.id.lock().unwrap_or_else(|e| e.into_inner()) = Some(new_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_an_id_on_first_read_and_keeps_it() {
        let store = MemorySessionStore::new();
        let first = store.get().unwrap();
        assert!(Uuid::parse_str(&first).is_ok());
        assert_eq!(store.get().unwrap(), first);
    }

    #[test]
    fn set_replaces_the_stored_id() {
        let store = MemorySessionStore::new();
        let generated = store.get().unwrap();
        store.set("server-issued".to_string());
        assert_eq!(store.get().unwrap(), "server-issued");
        assert_ne!(store.get().unwrap(), generated);
    }
}

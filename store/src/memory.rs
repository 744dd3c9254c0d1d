use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::SessionStore;

/// In-memory SessionStore for testing and headless use.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::User;
    use crate::session::{Session, USER_KEY};

    fn sample_user() -> User {
        User {
            id: 1,
            name: "Mick".to_string(),
            username: "mick".to_string(),
            email: "a@b.com".to_string(),
            telephone: "0123456789".to_string(),
            location: "Lagos".to_string(),
            is_admin: true,
        }
    }

    #[test]
    fn save_then_load_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load().is_none());

        let session = Session {
            token: "t1".to_string(),
            user: sample_user(),
        };
        store.save(&session);

        let loaded = store.load().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn clear_returns_to_anonymous() {
        let store = MemoryStore::new();
        store.save(&Session {
            token: "t1".to_string(),
            user: sample_user(),
        });

        store.clear();
        assert!(store.load().is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[test]
    fn corrupted_user_blob_reads_as_absent() {
        let store = MemoryStore::new();
        store.save(&Session {
            token: "t1".to_string(),
            user: sample_user(),
        });
        store.set(USER_KEY, "not json");

        assert!(store.load().is_none());
    }

    #[test]
    fn token_without_user_reads_as_absent() {
        let store = MemoryStore::new();
        store.set(crate::session::TOKEN_KEY, "t1");

        assert!(store.load().is_none());
    }
}

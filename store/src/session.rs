//! # Session persistence
//!
//! A [`Session`] is the single authenticated-state value of the application:
//! an opaque bearer token plus a cached snapshot of the account it belongs to.
//! The token is present iff the user is considered authenticated; the cached
//! user is never re-validated against the server on read.
//!
//! ## [`SessionStore`] trait
//!
//! A narrow synchronous key-value interface — `get`/`set`/`remove` over two
//! well-known keys ([`TOKEN_KEY`], [`USER_KEY`]) — with the session-level
//! operations `load`/`save`/`clear` provided on top. Implementations live in
//! sibling modules: `MemoryStore`, and per platform `FileStore` or `LocalStore`.
//!
//! ## Error handling
//!
//! Storage and deserialization failures are treated as absence, never raised:
//! a corrupted user blob makes [`SessionStore::load`] return `None` and the UI
//! falls back to the anonymous state. [`SessionStore::save`] serializes the
//! user before touching either key, so a serialization failure leaves the
//! store unchanged.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// Storage key holding the bearer token string.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the serialized [`User`] JSON blob.
pub const USER_KEY: &str = "user";

/// The authenticated session: token plus cached account snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Synchronous key-value store for the persisted session pair.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Read the persisted session. Returns `None` when either key is absent
    /// or the stored user blob no longer deserializes.
    fn load(&self) -> Option<Session> {
        let token = self.get(TOKEN_KEY)?;
        let raw = self.get(USER_KEY)?;
        let user: User = serde_json::from_str(&raw).ok()?;
        Some(Session { token, user })
    }

    /// Persist both halves of the session. The user is serialized first; if
    /// that fails the store is left untouched.
    fn save(&self, session: &Session) {
        let Ok(user) = serde_json::to_string(&session.user) else {
            return;
        };
        self.set(TOKEN_KEY, &session.token);
        self.set(USER_KEY, &user);
    }

    /// Remove both keys, returning the store to the anonymous state.
    fn clear(&self) {
        self.remove(TOKEN_KEY);
        self.remove(USER_KEY);
    }
}

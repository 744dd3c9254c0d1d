//! # Browser `localStorage` session store
//!
//! [`LocalStore`] is the [`SessionStore`] implementation used on the web
//! platform. Keys are prefixed with `usermick.` so the session pair does not
//! collide with anything else the origin stores.
//!
//! The `Storage` handle is re-acquired from `window()` on every operation —
//! the handle is not `Clone`-friendly across the component tree and lookups
//! are cheap. All errors (storage disabled, quota, missing window) are
//! silently swallowed: reads degrade to an absent key and the UI falls back
//! to the anonymous state rather than crashing.

use crate::session::SessionStore;

const KEY_PREFIX: &str = "usermick";

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn scoped(key: &str) -> String {
        format!("{KEY_PREFIX}.{key}")
    }
}

impl SessionStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(&Self::scoped(key)).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(&Self::scoped(key), value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(&Self::scoped(key));
        }
    }
}

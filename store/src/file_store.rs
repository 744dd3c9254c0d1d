//! # Filesystem-backed session store
//!
//! [`FileStore`] persists the session pair as plain files under a base
//! directory, one file per key:
//!
//! ```text
//! <base_dir>/
//! ├── token
//! └── user
//! ```
//!
//! Used on native targets (e.g. running the app through a webview shell or in
//! tests). [`FileStore::default_base`] resolves a platform-appropriate data
//! directory via [`dirs::data_dir`], falling back to the current directory.
//!
//! All I/O errors are swallowed; a missing or unreadable file reads as an
//! absent key, which the session layer treats as the anonymous state.

use std::path::{Path, PathBuf};

use crate::session::SessionStore;

/// Filesystem-backed SessionStore for native targets.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Platform data directory for the app, e.g. `~/.local/share/usermick/`.
    pub fn default_base() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("usermick")
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.path(key), value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path(key));
    }
}

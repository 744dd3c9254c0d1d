//! Client-side state for UserMick: the shared [`User`] model, the persisted
//! [`Session`], the [`SessionStore`] trait with its platform backends, and the
//! application config.

pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::AppConfig;
pub use models::User;
pub use session::{Session, SessionStore};

//! Session context for the application.
//!
//! The session is owned by exactly one place: the [`SessionHandle`] provided
//! by [`SessionProvider`]. Components read a copy through it and never mutate
//! state directly — every transition funnels through [`SessionHandle::establish`]
//! (login/signup success) or [`SessionHandle::sign_out`]. The handle also hands
//! out [`ApiClient`]s carrying the current bearer token, so callers cannot
//! forget to attach it.
//!
//! The backing [`store::SessionStore`] is platform-appropriate:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStore`]
//! - **Native**: filesystem via [`store::FileStore`]

use std::sync::Arc;

use dioxus::prelude::*;

use api::{ApiClient, AuthResponse};
use store::{AppConfig, Session, SessionStore, User};

/// Reactive session snapshot: `None` means anonymous.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub session: Option<Session>,
}

/// The injected session context: state signal, persistent store, and config.
#[derive(Clone)]
pub struct SessionHandle {
    state: Signal<SessionState>,
    store: Arc<dyn SessionStore>,
    config: AppConfig,
}

impl SessionHandle {
    /// Current session, if authenticated. Subscribes the calling scope.
    pub fn session(&self) -> Option<Session> {
        self.state.read().session.clone()
    }

    /// Cached profile of the authenticated account.
    pub fn user(&self) -> Option<User> {
        self.state.read().session.as_ref().map(|s| s.user.clone())
    }

    /// Bearer token, if authenticated.
    pub fn token(&self) -> Option<String> {
        self.state.read().session.as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().session.is_some()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn page_size(&self) -> u32 {
        self.config.list.page_size
    }

    /// An API client carrying whatever token the session currently holds.
    pub fn client(&self) -> ApiClient {
        ApiClient::from_config(&self.config).with_token(self.token())
    }

    /// Persist a successful login/signup and transition to authenticated.
    pub fn establish(&self, auth: AuthResponse) {
        let session = Session {
            token: auth.token,
            user: auth.user,
        };
        self.store.save(&session);
        let mut state = self.state;
        state.set(SessionState {
            session: Some(session),
        });
    }

    /// Clear the persisted pair and transition to anonymous. No network call.
    pub fn sign_out(&self) {
        self.store.clear();
        let mut state = self.state;
        state.set(SessionState::default());
    }
}

/// Get the session context. Panics outside a [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Provider component that owns the session for the whole app.
/// Reads the persisted session once at mount; deserialization failures fall
/// back to anonymous.
#[component]
pub fn SessionProvider(#[props(default)] config: Option<AppConfig>, children: Element) -> Element {
    let handle = use_hook(|| {
        let config = config.clone().unwrap_or_default();
        let store = make_session_store();
        let session = store.load();
        SessionHandle {
            state: Signal::new(SessionState { session }),
            store,
            config,
        }
    });
    use_context_provider(|| handle);

    rsx! {
        {children}
    }
}

/// Create a platform-appropriate session store.
fn make_session_store() -> Arc<dyn SessionStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStore::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStore::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(store::FileStore::new(store::FileStore::default_base()))
    }
}

//! This crate contains all shared UI for the workspace.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod session;
pub use session::{use_session, SessionHandle, SessionProvider, SessionState};

pub mod list;
pub use list::{RequestState, UserListState};

mod toast;
pub use toast::{push_toast, use_toasts, Toast, ToastProvider, ToastVariant, Toasts};

mod navbar;
pub use navbar::NavBar;

mod users_table;
pub use users_table::UsersTable;

mod user_add_modal;
pub use user_add_modal::UserAddModal;

mod user_edit_modal;
pub use user_edit_modal::UserEditModal;

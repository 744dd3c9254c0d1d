//! The landing view: the users table, guarded behind authentication.

use dioxus::prelude::*;

use ui::{use_session, NavBar, UsersTable};

use crate::Route;

/// Home page component. Anonymous visitors are redirected to sign-in before
/// any protected content renders.
#[component]
pub fn Home() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if !session.is_authenticated() {
        nav.replace(Route::SignIn {});
        return rsx! {};
    }

    rsx! {
        NavBar {}
        UsersTable {}
    }
}

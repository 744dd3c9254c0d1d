use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaArrowRight;
use dioxus_free_icons::Icon;

use crate::components::{Button, ButtonVariant};
use crate::session::use_session;

/// Top-level chrome, conditioned on session state.
#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let user = session.user();

    let sign_out = {
        let session = session.clone();
        move |_| session.sign_out()
    };

    rsx! {
        header {
            class: "navbar",
            Link { class: "navbar-brand", to: "/", "UserMick" }

            if let Some(user) = user {
                nav {
                    class: "navbar-links",
                    span { class: "navbar-welcome", "Welcome, {user.name}" }
                    Link { class: "btn btn-outline", to: "/", "Home" }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: sign_out,
                        "Sign out"
                        Icon { width: 14, height: 14, icon: FaArrowRight }
                    }
                }
            } else {
                nav {
                    class: "navbar-links",
                    Link { class: "btn btn-outline", to: "/", "Home" }
                    Link { class: "btn btn-outline", to: "/signin", "Sign in" }
                    Link {
                        class: "btn btn-primary",
                        to: "/signup",
                        "Get Started"
                        Icon { width: 14, height: 14, icon: FaArrowRight }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::Route;

/// Catch-all 404 page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("unknown route: /{}", segments.join("/"));
    rsx! {
        div {
            class: "not-found",
            div { "404 not found" }
            Link { to: Route::Home {}, "Home" }
        }
    }
}

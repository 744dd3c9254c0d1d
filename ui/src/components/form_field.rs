use dioxus::prelude::*;

use crate::components::{Input, Label};

/// A labelled input with an optional inline validation message below it.
#[component]
pub fn FormField(
    id: String,
    label: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = "".to_string())] placeholder: String,
    value: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    #[props(default)] oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            Label { html_for: "{id}", "{label}" }
            Input {
                id: "{id}",
                r#type,
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = error {
                p { class: "field-error", "{message}" }
            }
        }
    }
}

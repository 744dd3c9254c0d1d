//! Dialog for creating a user. Validation runs locally first; only a clean
//! form reaches the network. Creation requires a held token — the request is
//! refused up front when the session has none.

use dioxus::prelude::*;

use api::{FieldErrors, UserForm};

use crate::components::{Button, ButtonVariant, FormField};
use crate::session::use_session;
use crate::toast::{push_toast, use_toasts, ToastVariant};

#[component]
pub fn UserAddModal(on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let mut form = use_signal(UserForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut sending = use_signal(|| false);

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            if session.token().is_none() {
                push_toast(
                    toasts,
                    ToastVariant::Destructive,
                    "No token found",
                    "No token found, cannot add user",
                );
                return;
            }

            match form().validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(new_user) => {
                    errors.set(FieldErrors::new());
                    sending.set(true);
                    let client = session.client();
                    spawn(async move {
                        match client.create_user(&new_user).await {
                            Ok(created) => {
                                tracing::info!("created user {}", created.id);
                                push_toast(
                                    toasts,
                                    ToastVariant::Default,
                                    "User Created Successfully",
                                    "The new user was created successfully",
                                );
                                sending.set(false);
                                on_saved.call(());
                            }
                            Err(err) => {
                                tracing::error!("failed to create user: {err}");
                                push_toast(
                                    toasts,
                                    ToastVariant::Destructive,
                                    "Uh oh! Something went wrong.",
                                    "There was a problem with your request.",
                                );
                                sending.set(false);
                            }
                        }
                    });
                }
            }
        }
    };

    rsx! {
        div {
            class: "modal-body",
            h2 { class: "modal-title", "Add User" }
            p { class: "modal-description", "Enter the details for the new user" }

            form {
                onsubmit: handle_submit,
                FormField {
                    id: "add-name",
                    label: "Name",
                    value: form().name,
                    disabled: sending(),
                    error: errors().get("name").cloned(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                FormField {
                    id: "add-username",
                    label: "Username",
                    value: form().username,
                    disabled: sending(),
                    error: errors().get("username").cloned(),
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                FormField {
                    id: "add-email",
                    label: "Email",
                    r#type: "email",
                    value: form().email,
                    disabled: sending(),
                    error: errors().get("email").cloned(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                FormField {
                    id: "add-telephone",
                    label: "Phone",
                    value: form().telephone,
                    disabled: sending(),
                    error: errors().get("telephone").cloned(),
                    oninput: move |evt: FormEvent| form.write().telephone = evt.value(),
                }
                FormField {
                    id: "add-location",
                    label: "Location",
                    value: form().location,
                    disabled: sending(),
                    error: errors().get("location").cloned(),
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
                FormField {
                    id: "add-password",
                    label: "Password",
                    r#type: "password",
                    value: form().password,
                    disabled: sending(),
                    error: errors().get("password").cloned(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }

                div {
                    class: "modal-footer",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: sending() || !form().is_edited(),
                        if sending() { "Saving..." } else { "Add User" }
                    }
                }
            }
        }
    }
}

//! Dialog for editing a user. The form is seeded from the current record and
//! the submit button stays disabled until something actually changed. The PUT
//! is a full replacement, echoing the immutable id and admin flag.

use dioxus::prelude::*;

use store::User;

use api::{FieldErrors, UserEditForm};

use crate::components::{Button, ButtonVariant, FormField};
use crate::session::use_session;
use crate::toast::{push_toast, use_toasts, ToastVariant};

#[component]
pub fn UserEditModal(user: User, on_saved: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let initial = use_hook({
        let user = user.clone();
        move || UserEditForm::from_user(&user)
    });
    let mut form = use_signal({
        let initial = initial.clone();
        move || initial
    });
    let mut errors = use_signal(FieldErrors::new);
    let mut sending = use_signal(|| false);

    let is_edited = form() != initial;

    let handle_submit = {
        let session = session.clone();
        let user = user.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            match form().validate(user.id, user.is_admin) {
                Err(field_errors) => errors.set(field_errors),
                Ok(update) => {
                    errors.set(FieldErrors::new());
                    sending.set(true);
                    let client = session.client();
                    spawn(async move {
                        match client.update_user(&update).await {
                            Ok(updated) => {
                                tracing::info!("updated user {}", updated.id);
                                push_toast(
                                    toasts,
                                    ToastVariant::Default,
                                    "Update Succesful",
                                    "The user details were updated successfuly",
                                );
                                sending.set(false);
                                on_saved.call(());
                            }
                            Err(err) => {
                                tracing::error!("failed to update user {}: {err}", update.id);
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
            h2 { class: "modal-title", "Edit" }
            p { class: "modal-description", "Make changes to the user here" }

            form {
                onsubmit: handle_submit,
                FormField {
                    id: "edit-name",
                    label: "Name",
                    value: form().name,
                    disabled: sending(),
                    error: errors().get("name").cloned(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                FormField {
                    id: "edit-username",
                    label: "Username",
                    value: form().username,
                    disabled: sending(),
                    error: errors().get("username").cloned(),
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                FormField {
                    id: "edit-email",
                    label: "Email",
                    r#type: "email",
                    value: form().email,
                    disabled: sending(),
                    error: errors().get("email").cloned(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                FormField {
                    id: "edit-telephone",
                    label: "Phone",
                    value: form().telephone,
                    disabled: sending(),
                    error: errors().get("telephone").cloned(),
                    oninput: move |evt: FormEvent| form.write().telephone = evt.value(),
                }
                FormField {
                    id: "edit-location",
                    label: "Location",
                    value: form().location,
                    disabled: sending(),
                    error: errors().get("location").cloned(),
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
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
                        disabled: sending() || !is_edited,
                        if sending() { "Saving..." } else { "Save changes" }
                    }
                }
            }
        }
    }
}

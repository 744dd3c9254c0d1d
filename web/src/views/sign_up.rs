//! Sign-up page: the full profile schema plus password confirmation.

use dioxus::prelude::*;

use api::{FieldErrors, SignUpForm};
use ui::components::{Button, FormField};
use ui::{push_toast, use_session, use_toasts, NavBar, ToastVariant};

use crate::Route;

/// Sign-up page component.
#[component]
pub fn SignUp() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut form = use_signal(SignUpForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    if session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            match form().validate() {
                Err(field_errors) => errors.set(field_errors),
                Ok(request) => {
                    errors.set(FieldErrors::new());
                    submitting.set(true);
                    let session = session.clone();
                    let client = session.client();
                    spawn(async move {
                        match client.signup(&request).await {
                            Ok(auth) => {
                                session.establish(auth);
                                submitting.set(false);
                                nav.replace(Route::Home {});
                            }
                            Err(err) => {
                                // Duplicate username/email comes back as a
                                // request failure; the server owns that policy.
                                tracing::error!("sign up failed: {err}");
                                submitting.set(false);
                                push_toast(
                                    toasts,
                                    ToastVariant::Destructive,
                                    "Sign up failed",
                                    "There was a problem with your request.",
                                );
                            }
                        }
                    });
                }
            }
        }
    };

    rsx! {
        NavBar {}
        div {
            class: "auth-card",
            h2 {
                class: "auth-title",
                "Sign Up to "
                span { class: "auth-brand", "UserMick" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,
                FormField {
                    id: "signup-name",
                    label: "Name",
                    placeholder: "John Doe",
                    value: form().name,
                    disabled: submitting(),
                    error: errors().get("name").cloned(),
                    oninput: move |evt: FormEvent| form.write().name = evt.value(),
                }
                FormField {
                    id: "signup-username",
                    label: "Username",
                    placeholder: "johndoe",
                    value: form().username,
                    disabled: submitting(),
                    error: errors().get("username").cloned(),
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
                FormField {
                    id: "signup-email",
                    label: "Email Address",
                    r#type: "email",
                    placeholder: "projectmayhem@fc.com",
                    value: form().email,
                    disabled: submitting(),
                    error: errors().get("email").cloned(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                FormField {
                    id: "signup-telephone",
                    label: "Phone",
                    value: form().telephone,
                    disabled: submitting(),
                    error: errors().get("telephone").cloned(),
                    oninput: move |evt: FormEvent| form.write().telephone = evt.value(),
                }
                FormField {
                    id: "signup-location",
                    label: "Location",
                    value: form().location,
                    disabled: submitting(),
                    error: errors().get("location").cloned(),
                    oninput: move |evt: FormEvent| form.write().location = evt.value(),
                }
                FormField {
                    id: "signup-password",
                    label: "Password",
                    r#type: "password",
                    placeholder: "••••••••",
                    value: form().password,
                    disabled: submitting(),
                    error: errors().get("password").cloned(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                FormField {
                    id: "signup-confirm-password",
                    label: "Confirm Password",
                    r#type: "password",
                    placeholder: "••••••••",
                    value: form().confirm_password,
                    disabled: submitting(),
                    error: errors().get("confirm_password").cloned(),
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }
                Button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Sign up →" }
                }
            }

            p {
                class: "auth-alt",
                "Already have an account? "
                Link { to: Route::SignIn {}, "Sign in" }
            }
        }
    }
}

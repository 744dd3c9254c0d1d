//! Sign-in page with email/password form.

use dioxus::prelude::*;

use api::{FieldErrors, SignInForm};
use ui::components::{Button, FormField};
use ui::{push_toast, use_session, use_toasts, NavBar, ToastVariant};

use crate::Route;

/// Sign-in page component.
#[component]
pub fn SignIn() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let nav = use_navigator();
    let mut form = use_signal(SignInForm::default);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    // Already signed in: go straight to the users table.
    if session.is_authenticated() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let handle_submit = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();

            match form().validate() {
                // Field errors render inline; no request is issued.
                Err(field_errors) => errors.set(field_errors),
                Ok(request) => {
                    errors.set(FieldErrors::new());
                    submitting.set(true);
                    let session = session.clone();
                    let client = session.client();
                    spawn(async move {
                        match client.login(&request).await {
                            Ok(auth) => {
                                session.establish(auth);
                                submitting.set(false);
                                nav.replace(Route::Home {});
                            }
                            Err(err) => {
                                tracing::error!("sign in failed: {err}");
                                submitting.set(false);
                                push_toast(
                                    toasts,
                                    ToastVariant::Destructive,
                                    "Sign in failed",
                                    "Check your credentials and try again.",
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
                "Login to "
                span { class: "auth-brand", "UserMick" }
            }

            form {
                class: "auth-form",
                onsubmit: handle_submit,
                FormField {
                    id: "signin-email",
                    label: "Email Address",
                    r#type: "email",
                    placeholder: "projectmayhem@fc.com",
                    value: form().email,
                    disabled: submitting(),
                    error: errors().get("email").cloned(),
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
                FormField {
                    id: "signin-password",
                    label: "Password",
                    r#type: "password",
                    placeholder: "••••••••",
                    value: form().password,
                    disabled: submitting(),
                    error: errors().get("password").cloned(),
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
                Button {
                    class: "auth-submit",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Login →" }
                }
            }

            p {
                class: "auth-alt",
                "No account yet? "
                Link { to: Route::SignUp {}, "Get started" }
            }
        }
    }
}

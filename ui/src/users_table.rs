//! The paginated, searchable users table with its add/edit/delete flows.
//!
//! Fetching is driven by exactly two signals: the page cursor and a reload
//! counter bumped once per completed mutation. Changing either is the sole
//! trigger for a refetch; pagination buttons only move the cursor.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaMagnifyingGlass, FaPenToSquare, FaPlus, FaRotate, FaTrash, FaUser,
};
use dioxus_free_icons::Icon;

use store::User;

use crate::components::{
    Button, ButtonVariant, Input, ModalOverlay, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow,
};
use crate::list::{RequestState, UserListState};
use crate::session::use_session;
use crate::toast::{push_toast, use_toasts, ToastVariant};
use crate::user_add_modal::UserAddModal;
use crate::user_edit_modal::UserEditModal;

#[component]
pub fn UsersTable() -> Element {
    let session = use_session();
    let toasts = use_toasts();
    let page_size = session.page_size();

    let mut list = use_signal(move || UserListState::new(page_size));
    let mut page = use_signal(|| 1u32);
    let mut reload = use_signal(|| 0u32);
    let mut search_term = use_signal(String::new);
    let mut show_add = use_signal(|| false);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    // Refetch on page change or reload bump. Requests share one in-flight
    // slot; a stale response landing after a newer one simply overwrites it.
    {
        let session = session.clone();
        use_effect(move || {
            let p = page();
            let _tick = reload();
            let client = session.client();
            list.write().begin(p);
            spawn(async move {
                match client.list_users(p, page_size).await {
                    Ok(items) => list.write().apply_page(items),
                    Err(err) => {
                        tracing::error!("failed to load users page {p}: {err}");
                        list.write().fail();
                        push_toast(
                            toasts,
                            ToastVariant::Destructive,
                            "Uh oh! Something went wrong.",
                            "There was a problem with your request.",
                        );
                    }
                }
            });
        });
    }

    let on_search = {
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let term = search_term();
            let p = page();
            let client = session.client();
            spawn(async move {
                list.write().begin_search();
                match client.search_users(&term, p, page_size).await {
                    Ok(items) => {
                        list.write().apply_search(items);
                        search_term.set(String::new());
                    }
                    Err(err) => {
                        tracing::error!("search for {term:?} failed: {err}");
                        list.write().fail();
                        push_toast(
                            toasts,
                            ToastVariant::Destructive,
                            "Uh oh! Something went wrong.",
                            "There was a problem with your request.",
                        );
                    }
                }
            });
        }
    };

    // Reset clears the input only; the filtered list stays until the next
    // page change.
    let on_reset = move |_| search_term.set(String::new());

    let on_previous = move |_| {
        if list.write().previous() {
            page.set(list.peek().current_page);
        }
    };

    let on_next = move |_| {
        if list.write().next() {
            page.set(list.peek().current_page);
        }
    };

    // The confirmation dialog gates the delete. Once the request resolves the
    // current page is reloaded exactly once either way; only the toast
    // differs.
    let on_confirm_delete = {
        let session = session.clone();
        move |_| {
            let Some(user) = pending_delete() else {
                return;
            };
            let client = session.client();
            spawn(async move {
                let outcome = client.delete_user(user.id).await;
                if let Err(err) = &outcome {
                    tracing::error!("failed to delete user {}: {err}", user.id);
                }
                let (variant, title, description) =
                    finish_delete(outcome.is_ok(), &mut *reload.write());
                push_toast(toasts, variant, title, description);
                pending_delete.set(None);
            });
        }
    };

    let state = list();

    rsx! {
        div {
            class: "users-container",
            h2 {
                class: "users-heading",
                "Users "
                span { class: "users-heading-accent", "Table" }
            }

            div {
                class: "users-toolbar",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| show_add.set(true),
                    Icon { width: 14, height: 14, icon: FaPlus }
                    "Add User"
                }
                form {
                    class: "users-search",
                    onsubmit: on_search,
                    Input {
                        r#type: "search",
                        placeholder: "find user by name",
                        value: search_term(),
                        oninput: move |evt: FormEvent| search_term.set(evt.value()),
                    }
                    Button {
                        r#type: "submit",
                        "Search"
                        Icon { width: 14, height: 14, icon: FaMagnifyingGlass }
                    }
                    Button {
                        onclick: on_reset,
                        "Reset"
                        Icon { width: 14, height: 14, icon: FaRotate }
                    }
                }
            }

            Table {
                TableHeader {
                    TableRow { class: "users-header-row",
                        TableHead { "Name" }
                        TableHead { "Email" }
                        TableHead { "Phone" }
                        TableHead { "Location" }
                    }
                }
                if state.is_loading() {
                    caption { class: "users-caption", "Loading..." }
                } else if state.items.is_empty() {
                    caption { class: "users-caption", "No user found" }
                } else {
                    TableBody {
                        for user in state.items.clone() {
                            UserRow {
                                key: "{user.id}",
                                user,
                                on_edit: move |user: User| editing.set(Some(user)),
                                on_delete: move |user: User| pending_delete.set(Some(user)),
                            }
                        }
                    }
                }
            }

            div {
                class: "users-pagination",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: state.current_page == 1 || state.is_loading(),
                    onclick: on_previous,
                    "Previous"
                }
                span { class: "users-page-indicator", "Page {state.current_page}" }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: !state.has_next_page || state.is_loading(),
                    onclick: on_next,
                    "Next"
                }
            }

            if state.request == RequestState::Failed {
                p { class: "users-error", "Could not reach the server." }
            }
        }

        if show_add() {
            ModalOverlay {
                on_close: move |_| show_add.set(false),
                UserAddModal {
                    on_saved: move |_| {
                        show_add.set(false);
                        reload += 1;
                    },
                    on_cancel: move |_| show_add.set(false),
                }
            }
        }

        if let Some(user) = editing() {
            ModalOverlay {
                on_close: move |_| editing.set(None),
                UserEditModal {
                    user: user.clone(),
                    on_saved: move |_| {
                        editing.set(None);
                        reload += 1;
                    },
                    on_cancel: move |_| editing.set(None),
                }
            }
        }

        if let Some(user) = pending_delete() {
            ModalOverlay {
                on_close: move |_| pending_delete.set(None),
                div {
                    class: "modal-body",
                    h2 { class: "modal-title", "Delete user" }
                    p {
                        class: "modal-description",
                        "This will permanently remove {user.name}. Continue?"
                    }
                    div {
                        class: "modal-footer",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| pending_delete.set(None),
                            "Cancel"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: on_confirm_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}

/// A resolved delete bumps the reload counter exactly once, success or not;
/// the outcome only picks the toast.
fn finish_delete(deleted: bool, reload: &mut u32) -> (ToastVariant, &'static str, &'static str) {
    *reload += 1;
    if deleted {
        (
            ToastVariant::Default,
            "User Deleted",
            "The user was removed successfully",
        )
    } else {
        (
            ToastVariant::Destructive,
            "Uh oh! Something went wrong.",
            "There was a problem with your request.",
        )
    }
}

#[component]
fn UserRow(user: User, on_edit: EventHandler<User>, on_delete: EventHandler<User>) -> Element {
    let edit_target = user.clone();
    let delete_target = user.clone();

    rsx! {
        TableRow {
            TableCell { class: "users-name-cell",
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(delete_target.clone()),
                    Icon { width: 14, height: 14, icon: FaTrash }
                    "Delete"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_edit.call(edit_target.clone()),
                    Icon { width: 14, height: 14, icon: FaPenToSquare }
                    "Edit"
                }
                Icon { width: 16, height: 16, icon: FaUser }
                "{user.name}"
            }
            TableCell { "{user.email}" }
            TableCell { "{user.telephone}" }
            TableCell { "{user.location}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_delete_reloads_exactly_once_on_success() {
        let mut reload = 0u32;
        let (variant, title, _) = finish_delete(true, &mut reload);
        assert_eq!(reload, 1);
        assert_eq!(variant, ToastVariant::Default);
        assert_eq!(title, "User Deleted");
    }

    #[test]
    fn resolved_delete_reloads_exactly_once_on_failure() {
        let mut reload = 0u32;
        let (variant, title, _) = finish_delete(false, &mut reload);
        assert_eq!(reload, 1);
        assert_eq!(variant, ToastVariant::Destructive);
        assert_eq!(title, "Uh oh! Something went wrong.");
    }
}

//! Toast notifications: a context-held stack of `{variant, title, description}`
//! entries rendered by [`ToastProvider`]. Request failures and mutation
//! outcomes surface here; nothing in the app is fatal.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    fn class(self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct Toasts {
    pub entries: Vec<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn push(&mut self, variant: ToastVariant, title: String, description: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Toast {
            id,
            variant,
            title,
            description,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|toast| toast.id != id);
    }
}

/// Get the toast stack. Panics outside a [`ToastProvider`].
pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

/// Push a toast. On the web it auto-dismisses after a few seconds; everywhere
/// it can be dismissed by clicking.
pub fn push_toast(mut toasts: Signal<Toasts>, variant: ToastVariant, title: &str, description: &str) {
    let id = toasts
        .write()
        .push(variant, title.to_string(), description.to_string());

    #[cfg(target_arch = "wasm32")]
    spawn(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(5)).await;
        toasts.write().dismiss(id);
    });
    #[cfg(not(target_arch = "wasm32"))]
    let _ = id;
}

/// Provider component: owns the stack and renders it above the app.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Toasts::default()));

    rsx! {
        {children}
        ToastHost {}
    }
}

#[component]
fn ToastHost() -> Element {
    let toasts = use_toasts();

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts().entries {
                ToastCard { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastCard(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    rsx! {
        div {
            class: "{toast.variant.class()}",
            onclick: move |_| toasts.write().dismiss(id),
            div { class: "toast-title", "{toast.title}" }
            div { class: "toast-description", "{toast.description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastVariant::Default, "A".into(), "first".into());
        let b = toasts.push(ToastVariant::Destructive, "B".into(), "second".into());
        assert!(b > a);
        assert_eq!(toasts.entries.len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut toasts = Toasts::default();
        let a = toasts.push(ToastVariant::Default, "A".into(), "first".into());
        let b = toasts.push(ToastVariant::Default, "B".into(), "second".into());
        toasts.dismiss(a);
        assert_eq!(toasts.entries.len(), 1);
        assert_eq!(toasts.entries[0].id, b);
    }
}

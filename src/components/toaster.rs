//! Toaster Component
//!
//! Renders the live toasts of one screen corner, oldest first. Toasts remove
//! themselves when their duration runs out (see `ToastNotifier`).

use dioxus::prelude::*;
use movieshelf_core::{Toast, ToastPosition};

use crate::context::use_toasts;

/// CSS classes for a toast
fn toast_class(toast: &Toast) -> String {
    format!("toast {}", toast.request.kind.class())
}

#[component]
pub fn Toaster(position: ToastPosition) -> Element {
    let toasts = use_toasts();

    let visible: Vec<Toast> = toasts
        .read()
        .iter()
        .filter(|t| t.request.position == position)
        .cloned()
        .collect();

    if visible.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "toaster {position.class()}",
            for toast in visible {
                div {
                    key: "{toast.id:?}",
                    class: toast_class(&toast),
                    style: toast.request.style.to_css(),
                    role: "status",
                    if let Some(icon) = toast.request.icon.clone() {
                        span { class: "toast-icon", "{icon}" }
                    }
                    span { class: "toast-message", "{toast.request.message}" }
                }
            }
        }
    }
}

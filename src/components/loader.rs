use dioxus::prelude::*;

/// Spinner shown while a fetch is outstanding
#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loading-state",
            div { class: "loading-spinner" }
            p { class: "loading-message", "Loading..." }
        }
    }
}

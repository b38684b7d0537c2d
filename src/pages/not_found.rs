use dioxus::prelude::*;

use crate::app::Route;

/// Fallback for unknown paths
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main { class: "page",
            h1 { class: "page-title", "Nothing here" }
            p { class: "empty-message", "No page at /{path}." }
            Link { class: "go-back", to: Route::Home {}, "Back to trending" }
        }
    }
}

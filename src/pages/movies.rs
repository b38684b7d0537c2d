//! Movies page - title search.
//!
//! The query lives in the route (`/movies?query=...`) so returning from a
//! details view restores the same results.

use dioxus::prelude::*;
use movieshelf_core::MovieSummary;

use crate::app::Route;
use crate::components::{Loader, MovieList};
use crate::context::use_catalog;

#[component]
pub fn Movies(query: String) -> Element {
    let navigator = use_navigator();
    let catalog = use_catalog();
    let mut draft = use_signal(|| query.clone());
    let mut results: Signal<Option<Vec<MovieSummary>>> = use_signal(|| None);

    // Search whenever the routed query changes
    use_effect(use_reactive((&query,), move |(query,)| {
        if query.trim().is_empty() {
            results.set(Some(Vec::new()));
            return;
        }
        let Some(catalog) = catalog() else {
            return;
        };
        results.set(None);
        spawn(async move {
            match catalog.search_movies(&query).await {
                Ok(movies) => results.set(Some(movies)),
                Err(e) => tracing::error!(query = %query, "Search failed: {}", e),
            }
        });
    }));

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let query = draft().trim().to_string();
        navigator.replace(Route::Movies { query });
    };

    let listing = match results() {
        Some(movies) if movies.is_empty() && !query.trim().is_empty() => rsx! {
            p { class: "empty-message", "No movies match \"{query}\"." }
        },
        Some(movies) => rsx! { MovieList { movies } },
        None => rsx! { Loader {} },
    };

    rsx! {
        main { class: "page",
            form { class: "search-form", onsubmit: submit,
                input {
                    class: "search-input",
                    r#type: "text",
                    placeholder: "Search movies",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                button { class: "btn-primary", r#type: "submit", "Search" }
            }

            {listing}
        }
    }
}

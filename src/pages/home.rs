//! Home page - trending movies.

use dioxus::prelude::*;
use movieshelf_core::MovieSummary;

use crate::components::{Loader, MovieList};
use crate::context::use_catalog;

#[component]
pub fn Home() -> Element {
    let catalog = use_catalog();
    let mut trending: Signal<Option<Vec<MovieSummary>>> = use_signal(|| None);

    // Load once the catalog is ready
    use_effect(move || {
        if let Some(catalog) = catalog() {
            spawn(async move {
                match catalog.trending_movies().await {
                    Ok(movies) => trending.set(Some(movies)),
                    Err(e) => tracing::error!("Failed to load trending movies: {}", e),
                }
            });
        }
    });

    let listing = match trending() {
        Some(movies) => rsx! { MovieList { movies } },
        None => rsx! { Loader {} },
    };

    rsx! {
        main { class: "page",
            h1 { class: "page-title", "Trending today" }
            {listing}
        }
    }
}

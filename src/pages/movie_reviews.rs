//! Reviews sub-route of the details layout.

use dioxus::prelude::*;
use movieshelf_core::{DetailState, MovieId, ReviewsSlot};

use crate::components::Loader;
use crate::context::use_catalog;

#[component]
pub fn MovieReviews(movie_id: MovieId) -> Element {
    let catalog = use_catalog();
    let mut slot = use_signal(|| ReviewsSlot::new("movie reviews"));

    use_effect(use_reactive((&movie_id,), move |(movie_id,)| {
        let Some(catalog) = catalog() else {
            return;
        };
        let ticket = slot.write().begin(movie_id);
        spawn(async move {
            let result = catalog.fetch_movie_reviews(ticket.movie_id()).await;
            slot.write().settle(ticket, result);
        });
    }));

    let reviews = match slot.read().state() {
        DetailState::Loaded(reviews) => reviews.clone(),
        DetailState::Loading => return rsx! { Loader {} },
    };

    rsx! {
        if reviews.is_empty() {
            p { class: "empty-message", "We don't have any reviews for this movie." }
        } else {
            ul { class: "review-list",
                for review in reviews.iter() {
                    li { key: "{review.id}", class: "review-item",
                        h4 { class: "review-author", "Author: {review.author}" }
                        p { class: "review-content", "{review.content}" }
                    }
                }
            }
        }
    }
}

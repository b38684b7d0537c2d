//! Cast sub-route of the details layout.

use dioxus::prelude::*;
use movieshelf_core::details::poster_url;
use movieshelf_core::{CastSlot, DetailState, MovieId};

use crate::components::Loader;
use crate::context::{get_config, use_catalog};

#[component]
pub fn MovieCast(movie_id: MovieId) -> Element {
    let catalog = use_catalog();
    let mut slot = use_signal(|| CastSlot::new("movie cast"));

    use_effect(use_reactive((&movie_id,), move |(movie_id,)| {
        let Some(catalog) = catalog() else {
            return;
        };
        let ticket = slot.write().begin(movie_id);
        spawn(async move {
            let result = catalog.fetch_movie_cast(ticket.movie_id()).await;
            slot.write().settle(ticket, result);
        });
    }));

    let cast = match slot.read().state() {
        DetailState::Loaded(cast) => cast.clone(),
        DetailState::Loading => return rsx! { Loader {} },
    };

    if cast.is_empty() {
        return rsx! {
            p { class: "empty-message", "We don't have any cast information for this movie." }
        };
    }

    let image_base = get_config().image_base;

    rsx! {
        ul { class: "cast-list",
            for member in cast.iter() {
                li { key: "{member.id}", class: "cast-item",
                    if member.profile_path.is_some() {
                        img {
                            class: "cast-photo",
                            src: poster_url(&image_base, member.profile_path.as_deref()),
                            alt: "{member.name}",
                        }
                    }
                    p { class: "cast-name", "{member.name}" }
                    p { class: "cast-character", "Character: {member.character}" }
                }
            }
        }
    }
}

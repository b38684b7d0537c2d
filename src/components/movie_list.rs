//! Movie List Component
//!
//! Grid of listing entries. Opening an entry records the current route as the
//! pending origin so the details view can link back to it.

use dioxus::prelude::*;
use movieshelf_core::details::poster_url;
use movieshelf_core::MovieSummary;

use crate::app::Route;
use crate::context::{get_config, use_pending_origin, PendingOrigin};

#[component]
pub fn MovieList(movies: Vec<MovieSummary>) -> Element {
    let navigator = use_navigator();
    let current = use_route::<Route>();
    let mut pending_origin = use_pending_origin();
    let image_base = get_config().image_base;

    rsx! {
        ul { class: "movie-list",
            for movie in movies {
                li {
                    key: "{movie.id}",
                    class: "movie-card",
                    onclick: {
                        let origin = current.to_string();
                        let movie_id = movie.id;
                        move |_| {
                            pending_origin.set(Some(PendingOrigin { path: origin.clone() }));
                            navigator.push(Route::MovieDetailsHome { movie_id });
                        }
                    },
                    img {
                        class: "movie-card-poster",
                        src: poster_url(&image_base, movie.poster_path.as_deref()),
                        alt: "{movie.title}",
                    }
                    p { class: "movie-card-title", "{movie.title}" }
                    p { class: "movie-card-meta", "{movie.release_date} \u{00B7} {movie.vote_average}" }
                }
            }
        }
    }
}

//! Details Navigation Component
//!
//! Links to the cast and reviews sub-routes plus the "Go Back" link.
//!
//! "Go Back" is plain link navigation to the origin captured when the view
//! was entered. It does not additionally pop browser history.

use dioxus::prelude::*;
use movieshelf_core::{MovieId, SubRoute};

use crate::app::Route;

/// Route of a details sub-route for a movie
pub fn sub_route_target(sub_route: SubRoute, movie_id: MovieId) -> Route {
    match sub_route {
        SubRoute::Cast => Route::MovieCast { movie_id },
        SubRoute::Reviews => Route::MovieReviews { movie_id },
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct DetailsNavProps {
    /// Movie whose sub-routes are linked
    pub movie_id: MovieId,
    /// Path of the "Go Back" link
    pub back_target: String,
}

#[component]
pub fn DetailsNav(props: DetailsNavProps) -> Element {
    rsx! {
        div { class: "links-container",
            div { class: "links",
                for sub_route in SubRoute::ALL {
                    Link {
                        key: "{sub_route.segment()}",
                        to: sub_route_target(sub_route, props.movie_id),
                        class: "nav-link",
                        active_class: "active",
                        "{sub_route.label()}"
                    }
                }
            }
            Link {
                class: "go-back",
                to: props.back_target.clone(),
                "Go Back"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_route_targets_match_segments() {
        let movie_id = MovieId::new(550);
        for sub_route in SubRoute::ALL {
            let path = sub_route_target(sub_route, movie_id).to_string();
            assert_eq!(path, sub_route.path_under("/movies/550"));
        }
    }
}

use std::sync::Arc;

use dioxus::prelude::*;
use movieshelf_core::{MovieId, SnapshotCatalog, ToastPosition, ToastQueue};

use crate::components::Toaster;
use crate::context::{get_config, PendingOrigin, SharedCatalog};
use crate::pages::{Home, MovieCast, MovieDetailsHome, MovieDetailsPage, MovieReviews, Movies, NotFound};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Trending movies
/// - `/movies?query=` - Title search
/// - `/movies/:movie_id` - Details layout, with `cast` and `reviews` sub-routes
#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/movies?:query")]
    Movies { query: String },
    #[nest("/movies/:movie_id")]
        #[layout(MovieDetailsPage)]
            #[route("/")]
            MovieDetailsHome { movie_id: MovieId },
            #[route("/cast")]
            MovieCast { movie_id: MovieId },
            #[route("/reviews")]
            MovieReviews { movie_id: MovieId },
        #[end_layout]
    #[end_nest]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root application component.
///
/// Provides global styles, catalog context, toasts, and routing.
#[component]
pub fn App() -> Element {
    let mut catalog: Signal<Option<SharedCatalog>> = use_signal(|| None);
    let toasts: Signal<ToastQueue> = use_signal(ToastQueue::new);
    let pending_origin: Signal<Option<PendingOrigin>> = use_signal(|| None);

    // Provide shared state to all child components
    use_context_provider(|| catalog);
    use_context_provider(|| toasts);
    use_context_provider(|| pending_origin);

    // Open the catalog on mount
    use_effect(move || {
        spawn(async move {
            let config = get_config();
            match SnapshotCatalog::from_config(&config).await {
                Ok(snapshot) => {
                    tracing::info!(movies = snapshot.len(), "Catalog ready");
                    catalog.set(Some(Arc::new(snapshot)));
                }
                Err(e) => {
                    tracing::error!("Failed to open catalog: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
        for position in ToastPosition::ALL {
            Toaster { key: "{position:?}", position }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_routes_render_paths() {
        let movie_id = MovieId::new(550);
        assert_eq!(Route::MovieCast { movie_id }.to_string(), "/movies/550/cast");
        assert_eq!(Route::MovieReviews { movie_id }.to_string(), "/movies/550/reviews");
    }

    #[test]
    fn sub_route_paths_parse() {
        let route: Route = "/movies/603/reviews".parse().unwrap();
        assert_eq!(route, Route::MovieReviews { movie_id: MovieId::new(603) });
    }
}

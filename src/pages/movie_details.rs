//! Movie Details - Layout for `/movies/:movie_id` and its sub-routes.
//!
//! Fetches the record for the route's movie, renders it with the purchase
//! action, and hosts the cast/reviews outlet below.

use dioxus::prelude::*;
use movieshelf_core::{purchase, DetailSlot, DetailState, MovieDetails, MovieId, NavigationMemory};

use crate::app::Route;
use crate::components::{DetailsNav, Loader, MovieInfo};
use crate::context::{get_config, use_catalog, use_notifier, use_pending_origin};

/// Details layout component.
///
/// Shows the loader until the fetch for `movie_id` settles successfully.
/// A failed fetch is only logged, so the loader stays up.
#[component]
pub fn MovieDetailsPage(movie_id: MovieId) -> Element {
    let catalog = use_catalog();
    let notifier = use_notifier();
    let mut pending_origin = use_pending_origin();
    let mut slot = use_signal(DetailSlot::default);

    // Captured once for the lifetime of this view
    let memory = use_hook(|| {
        NavigationMemory::new(pending_origin.peek().as_ref().map(|o| o.path.clone()))
    });
    use_effect(move || pending_origin.set(None));

    // Fetch on mount and whenever the movie changes
    use_effect(use_reactive((&movie_id,), move |(movie_id,)| {
        let Some(catalog) = catalog() else {
            return;
        };
        let ticket = slot.write().begin(movie_id);
        spawn(async move {
            let result = catalog.fetch_movie_by_id(ticket.movie_id()).await;
            slot.write().settle(ticket, result);
        });
    }));

    let record = match slot.read().state() {
        DetailState::Loaded(record) => record.clone(),
        DetailState::Loading => {
            return rsx! { Loader {} };
        }
    };

    let details = MovieDetails::from_record(&record, &get_config().image_base);

    let on_purchase = move |_: ()| {
        purchase(&record, &notifier);
    };

    rsx! {
        div { class: "details-page",
            MovieInfo { details, on_purchase }

            nav { class: "details-nav-container",
                DetailsNav { movie_id, back_target: memory.back_target().to_string() }
                Outlet::<Route> {}
            }
        }
    }
}

/// Index child of the details layout; the layout itself carries the content.
#[component]
pub fn MovieDetailsHome(movie_id: MovieId) -> Element {
    rsx! {}
}

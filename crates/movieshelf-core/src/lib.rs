//! Movieshelf Core Library
//!
//! Movie catalog browsing with a simulated purchase flow.
//!
//! ## Overview
//!
//! The core is UI-free. It owns the data model for catalog entries, the
//! catalog seam every frontend fetches through, the request-tagged lifecycle
//! of the single detail record a view shows, and the derived presentation
//! values (poster URL, price, availability) that both the desktop app and the
//! CLI render.
//!
//! ## Quick Start
//!
//! ```ignore
//! use movieshelf_core::{DetailSlot, MemoryNotifier, MovieCatalog, MovieId, SnapshotCatalog};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = SnapshotCatalog::bundled()?;
//!     let mut slot = DetailSlot::default();
//!
//!     let ticket = slot.begin(MovieId::new(550));
//!     let result = catalog.fetch_movie_by_id(ticket.movie_id()).await;
//!     slot.settle(ticket, result);
//!
//!     if let Some(movie) = slot.record() {
//!         let notifier = MemoryNotifier::new();
//!         movieshelf_core::purchase(movie, &notifier);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod details;
pub mod error;
pub mod fetcher;
pub mod navigation;
pub mod notify;
pub mod pricing;
pub mod purchase;
pub mod types;

// Re-exports
pub use catalog::{MovieCatalog, SnapshotCatalog};
pub use config::ShelfConfig;
pub use details::MovieDetails;
pub use error::{CatalogError, CatalogResult};
pub use fetcher::{CastSlot, DetailSlot, DetailState, FetchSlot, ReviewsSlot, RequestTicket, Settlement};
pub use navigation::{NavigationMemory, SubRoute, MOVIES_FALLBACK_PATH};
pub use notify::{
    MemoryNotifier, NotificationKind, NotificationRequest, NotificationStyle, Notifier,
    Toast, ToastId, ToastPosition, ToastQueue,
};
pub use pricing::{displayed_price, Availability};
pub use purchase::{purchase, purchase_message, purchase_request};
pub use types::*;

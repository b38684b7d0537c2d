//! Request-tagged fetch lifecycle for per-movie resources.
//!
//! A [`FetchSlot`] owns the single value a view displays for the current
//! movie. Every fetch is tagged with a [`RequestTicket`] carrying the movie id
//! and a generation counter. Responses are applied only while their ticket is
//! still the pending one, so a slow response for a previous movie can never
//! overwrite the record of the movie now on screen.
//!
//! ## States
//!
//! ```text
//!   begin(id) ──► Loading ──settle(Ok)──► Loaded
//!                    │
//!                    └──settle(Err)──► Loading (logged, no retry)
//! ```
//!
//! A failed fetch leaves the slot loading indefinitely. There is no error
//! state and no retry; the failure is only reported through `tracing`.

use std::sync::Arc;

use crate::error::CatalogResult;
use crate::types::{CastMember, MovieId, MovieRecord, Review};

/// Slot for the details record of one movie
pub type DetailSlot = FetchSlot<MovieRecord>;
/// Slot for the cast list of one movie
pub type CastSlot = FetchSlot<Vec<CastMember>>;
/// Slot for the reviews of one movie
pub type ReviewsSlot = FetchSlot<Vec<Review>>;

/// Tag identifying one fetch request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    movie_id: MovieId,
    generation: u64,
}

impl RequestTicket {
    /// Movie this request was issued for
    pub fn movie_id(&self) -> MovieId {
        self.movie_id
    }
}

/// Observable state of a slot
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Loaded(Arc<T>),
}

impl<T> DetailState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading)
    }
}

/// Outcome of settling a response against a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// Response was current and is now displayed
    Applied,
    /// Response was current but failed; the slot stays loading
    Failed,
    /// Response belonged to a superseded request and was discarded
    Stale,
}

#[derive(Debug, Clone)]
pub struct FetchSlot<T> {
    label: &'static str,
    current: Option<MovieId>,
    pending: Option<RequestTicket>,
    generation: u64,
    state: DetailState<T>,
}

impl<T> FetchSlot<T> {
    /// Create an empty slot; `label` names the resource in log output
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            current: None,
            pending: None,
            generation: 0,
            state: DetailState::Loading,
        }
    }

    /// Start a fetch for `movie_id`.
    ///
    /// Switching to a different movie drops the previously loaded value. Any
    /// earlier outstanding ticket becomes stale.
    pub fn begin(&mut self, movie_id: MovieId) -> RequestTicket {
        if self.current != Some(movie_id) {
            self.state = DetailState::Loading;
            self.current = Some(movie_id);
        }
        self.generation += 1;
        let ticket = RequestTicket {
            movie_id,
            generation: self.generation,
        };
        self.pending = Some(ticket);
        tracing::debug!(%movie_id, generation = ticket.generation, resource = self.label, "Fetch started");
        ticket
    }

    /// Apply a response to the slot if its ticket is still pending
    pub fn settle(&mut self, ticket: RequestTicket, result: CatalogResult<T>) -> Settlement {
        if self.pending != Some(ticket) {
            tracing::debug!(
                movie_id = %ticket.movie_id,
                generation = ticket.generation,
                resource = self.label,
                "Discarding stale response"
            );
            return Settlement::Stale;
        }
        self.pending = None;

        match result {
            Ok(value) => {
                self.state = DetailState::Loaded(Arc::new(value));
                Settlement::Applied
            }
            Err(e) => {
                tracing::error!(
                    movie_id = %ticket.movie_id,
                    resource = self.label,
                    error = %e,
                    "Error fetching {}",
                    self.label
                );
                Settlement::Failed
            }
        }
    }

    pub fn state(&self) -> &DetailState<T> {
        &self.state
    }

    /// Loaded value, if any
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            DetailState::Loaded(value) => Some(value),
            DetailState::Loading => None,
        }
    }

    /// Shared handle to the loaded value
    pub fn shared(&self) -> Option<Arc<T>> {
        match &self.state {
            DetailState::Loaded(value) => Some(Arc::clone(value)),
            DetailState::Loading => None,
        }
    }

    /// Movie the slot currently tracks
    pub fn movie_id(&self) -> Option<MovieId> {
        self.current
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }
}

impl FetchSlot<MovieRecord> {
    /// Loaded details record, if any
    pub fn record(&self) -> Option<&MovieRecord> {
        self.value()
    }
}

impl Default for FetchSlot<MovieRecord> {
    fn default() -> Self {
        Self::new("movie details")
    }
}

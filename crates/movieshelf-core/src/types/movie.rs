//! Movie Records - Catalog entries as the upstream API delivers them
//!
//! Field names follow the upstream JSON (`poster_path`, `release_date`, ...)
//! so snapshot files can be dumped straight from the catalog API.

use serde::{Deserialize, Serialize};

use crate::types::MovieId;

/// A labeled category tag attached to a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

impl Genre {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Full catalog entry for one movie
///
/// Immutable once fetched; a re-fetch replaces the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub id: MovieId,

    pub title: String,

    #[serde(default)]
    pub overview: String,

    /// Path fragment appended to the image CDN base; may be absent
    #[serde(default)]
    pub poster_path: Option<String>,

    #[serde(default)]
    pub release_date: String,

    #[serde(default)]
    pub vote_average: f64,

    #[serde(default)]
    pub vote_count: u64,

    /// Genres in the order the catalog returned them
    #[serde(default)]
    pub genres: Vec<Genre>,

    /// Production budget; the unit is whatever the catalog reports
    #[serde(default)]
    pub budget: u64,
}

impl MovieRecord {
    /// Create a bare record with only an id and title
    pub fn new(id: MovieId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            overview: String::new(),
            poster_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            vote_count: 0,
            genres: Vec::new(),
            budget: 0,
        }
    }

    /// Builder-style budget setter
    pub fn with_budget(mut self, budget: u64) -> Self {
        self.budget = budget;
        self
    }

    /// Builder-style genre setter
    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    /// Listing shape of this record
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            poster_path: self.poster_path.clone(),
            release_date: self.release_date.clone(),
            vote_average: self.vote_average,
        }
    }
}

/// Listing entry for trending and search results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
}

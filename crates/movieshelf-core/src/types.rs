//! Core types for Movieshelf

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

pub mod credits;
pub mod movie;

pub use credits::{CastMember, Review};
pub use movie::{Genre, MovieRecord, MovieSummary};

/// Catalog identifier for a movie
///
/// Matches the numeric ids the upstream catalog assigns, and doubles as the
/// `:movie_id` path segment of the details routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl MovieId {
    /// Create a MovieId from its raw number
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw number
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CatalogError::InvalidMovieId(s.to_string()))
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_parse() {
        let id: MovieId = "550".parse().unwrap();
        assert_eq!(id, MovieId::new(550));
        assert_eq!(id.to_string(), "550");
    }

    #[test]
    fn test_movie_id_rejects_garbage() {
        let err = "fight-club".parse::<MovieId>().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidMovieId(ref s) if s == "fight-club"));
    }

    #[test]
    fn test_movie_id_serde_transparent() {
        let json = serde_json::to_string(&MovieId::new(13)).unwrap();
        assert_eq!(json, "13");
        let back: MovieId = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(), 13);
    }
}

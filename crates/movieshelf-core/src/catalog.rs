//! Catalog collaborator.
//!
//! [`MovieCatalog`] is the seam every frontend fetches through. It is object
//! safe so the desktop app can hold an `Arc<dyn MovieCatalog>` in context.
//!
//! [`SnapshotCatalog`] serves a JSON snapshot in the upstream API's shape,
//! either loaded from disk or the demo snapshot compiled into the crate:
//!
//! ```json
//! { "movies": [
//!     { "id": 550, "title": "Fight Club", "budget": 63000000, "genres": [...],
//!       "cast": [ { "id": 819, "name": "Edward Norton", "character": "Narrator" } ],
//!       "reviews": [ { "id": "5b1c...", "author": "Goddard", "content": "..." } ] }
//! ] }
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde::Deserialize;

use crate::config::ShelfConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::types::{CastMember, MovieId, MovieRecord, MovieSummary, Review};

const BUNDLED_SNAPSHOT: &str = include_str!("../data/catalog.json");

/// Read access to a movie catalog
pub trait MovieCatalog: Send + Sync {
    /// Full record for one movie
    fn fetch_movie_by_id(&self, id: MovieId) -> BoxFuture<'_, CatalogResult<MovieRecord>>;

    /// Credited cast, billing order
    fn fetch_movie_cast(&self, id: MovieId) -> BoxFuture<'_, CatalogResult<Vec<CastMember>>>;

    fn fetch_movie_reviews(&self, id: MovieId) -> BoxFuture<'_, CatalogResult<Vec<Review>>>;

    fn trending_movies(&self) -> BoxFuture<'_, CatalogResult<Vec<MovieSummary>>>;

    /// Case-insensitive title search; a blank query matches nothing
    fn search_movies<'a>(&'a self, query: &'a str) -> BoxFuture<'a, CatalogResult<Vec<MovieSummary>>>;
}

#[derive(Debug, Deserialize)]
struct SnapshotDocument {
    movies: Vec<SnapshotEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct SnapshotEntry {
    #[serde(flatten)]
    record: MovieRecord,
    #[serde(default)]
    cast: Vec<CastMember>,
    #[serde(default)]
    reviews: Vec<Review>,
}

/// Catalog backed by an in-memory snapshot
#[derive(Debug, Clone)]
pub struct SnapshotCatalog {
    entries: Vec<SnapshotEntry>,
    index: HashMap<MovieId, usize>,
    latency: Duration,
}

impl SnapshotCatalog {
    /// Parse a snapshot document
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let document: SnapshotDocument = serde_json::from_str(json)?;

        let mut index = HashMap::with_capacity(document.movies.len());
        for (position, entry) in document.movies.iter().enumerate() {
            if index.insert(entry.record.id, position).is_some() {
                tracing::warn!(movie_id = %entry.record.id, "Duplicate snapshot entry, keeping the last one");
            }
        }

        Ok(Self {
            entries: document.movies,
            index,
            latency: Duration::ZERO,
        })
    }

    /// Demo snapshot shipped with the crate
    pub fn bundled() -> CatalogResult<Self> {
        Self::from_json(BUNDLED_SNAPSHOT)
    }

    /// Load a snapshot file
    pub async fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), movies = catalog.len(), "Loaded catalog snapshot");
        Ok(catalog)
    }

    /// Open the catalog a config points at, with its latency applied
    pub async fn from_config(config: &ShelfConfig) -> CatalogResult<Self> {
        let catalog = match config.catalog_path {
            Some(ref path) => Self::load(path).await?,
            None => Self::bundled()?,
        };
        Ok(catalog.with_latency(config.latency))
    }

    /// Delay every call by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    fn entry(&self, id: MovieId) -> CatalogResult<&SnapshotEntry> {
        self.index
            .get(&id)
            .map(|&position| &self.entries[position])
            .ok_or(CatalogError::MovieNotFound(id.get()))
    }

    /// Entries in snapshot order, each id once
    fn listed(&self) -> impl Iterator<Item = &SnapshotEntry> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(position, entry)| self.index.get(&entry.record.id) == Some(position))
            .map(|(_, entry)| entry)
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl MovieCatalog for SnapshotCatalog {
    fn fetch_movie_by_id(&self, id: MovieId) -> BoxFuture<'_, CatalogResult<MovieRecord>> {
        async move {
            self.simulate_latency().await;
            self.entry(id).map(|entry| entry.record.clone())
        }
        .boxed()
    }

    fn fetch_movie_cast(&self, id: MovieId) -> BoxFuture<'_, CatalogResult<Vec<CastMember>>> {
        async move {
            self.simulate_latency().await;
            self.entry(id).map(|entry| entry.cast.clone())
        }
        .boxed()
    }

    fn fetch_movie_reviews(&self, id: MovieId) -> BoxFuture<'_, CatalogResult<Vec<Review>>> {
        async move {
            self.simulate_latency().await;
            self.entry(id).map(|entry| entry.reviews.clone())
        }
        .boxed()
    }

    fn trending_movies(&self) -> BoxFuture<'_, CatalogResult<Vec<MovieSummary>>> {
        async move {
            self.simulate_latency().await;
            Ok(self.listed().map(|entry| entry.record.summary()).collect())
        }
        .boxed()
    }

    fn search_movies<'a>(&'a self, query: &'a str) -> BoxFuture<'a, CatalogResult<Vec<MovieSummary>>> {
        async move {
            self.simulate_latency().await;
            let needle = query.trim().to_lowercase();
            if needle.is_empty() {
                return Ok(Vec::new());
            }
            Ok(self
                .listed()
                .filter(|entry| entry.record.title.to_lowercase().contains(&needle))
                .map(|entry| entry.record.summary())
                .collect())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "movies": [
            {
                "id": 1, "title": "Heat", "budget": 60000000,
                "genres": [{"id": 80, "name": "Crime"}],
                "cast": [{"id": 10, "name": "Al Pacino", "character": "Vincent Hanna"}],
                "reviews": [{"id": "r1", "author": "critic", "content": "Tense."}]
            },
            { "id": 2, "title": "Heathers", "budget": 3000000 },
            { "id": 3, "title": "Alien", "budget": 11000000 }
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_by_id() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        let record = catalog.fetch_movie_by_id(MovieId::new(1)).await.unwrap();
        assert_eq!(record.title, "Heat");
        assert_eq!(record.genres[0].name, "Crime");
    }

    #[tokio::test]
    async fn test_unknown_id_not_found() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        let err = catalog.fetch_movie_by_id(MovieId::new(99)).await.unwrap_err();
        assert!(matches!(err, CatalogError::MovieNotFound(99)));
    }

    #[tokio::test]
    async fn test_cast_and_reviews() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        let cast = catalog.fetch_movie_cast(MovieId::new(1)).await.unwrap();
        assert_eq!(cast[0].character, "Vincent Hanna");

        let reviews = catalog.fetch_movie_reviews(MovieId::new(2)).await.unwrap();
        assert!(reviews.is_empty());
    }

    #[tokio::test]
    async fn test_trending_keeps_snapshot_order() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        let titles: Vec<_> = catalog
            .trending_movies()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.title)
            .collect();
        assert_eq!(titles, vec!["Heat", "Heathers", "Alien"]);
    }

    #[tokio::test]
    async fn test_search_case_insensitive() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT).unwrap();
        let hits = catalog.search_movies("HEAT").await.unwrap();
        assert_eq!(hits.len(), 2);

        let none = catalog.search_movies("   ").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_applied() {
        let catalog = SnapshotCatalog::from_json(SNAPSHOT)
            .unwrap()
            .with_latency(Duration::from_millis(500));

        let start = tokio::time::Instant::now();
        catalog.fetch_movie_by_id(MovieId::new(3)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[test]
    fn test_duplicate_ids_keep_last() {
        let json = r#"{"movies": [{"id": 5, "title": "Old"}, {"id": 5, "title": "New"}]}"#;
        let catalog = SnapshotCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.listed().next().map(|e| e.record.title.as_str()), Some("New"));
    }

    #[test]
    fn test_bundled_snapshot_parses() {
        let catalog = SnapshotCatalog::bundled().unwrap();
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_malformed_snapshot() {
        let err = SnapshotCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}

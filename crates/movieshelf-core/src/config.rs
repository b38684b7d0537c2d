//! Runtime configuration shared by the desktop app and the CLI.

use std::path::PathBuf;
use std::time::Duration;

/// Image CDN prefix poster paths are appended to
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500/";

/// File name of a user-provided catalog snapshot inside the data directory
pub const CATALOG_FILE_NAME: &str = "catalog.json";

/// Movieshelf configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    /// Snapshot file to load; `None` means the bundled demo catalog
    pub catalog_path: Option<PathBuf>,
    /// Prefix for poster URLs
    pub image_base: String,
    /// Artificial delay applied to every catalog call
    pub latency: Duration,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            image_base: DEFAULT_IMAGE_BASE.to_string(),
            latency: Duration::ZERO,
        }
    }
}

impl ShelfConfig {
    /// Build a config, falling back to the snapshot in the data directory when
    /// no explicit catalog is given and one exists there.
    pub fn resolve(catalog_path: Option<PathBuf>, image_base: Option<String>, latency_ms: u64) -> Self {
        let catalog_path = catalog_path.or_else(|| {
            let candidate = default_catalog_path();
            candidate.is_file().then_some(candidate)
        });

        Self {
            catalog_path,
            image_base: image_base.unwrap_or_else(|| DEFAULT_IMAGE_BASE.to_string()),
            latency: Duration::from_millis(latency_ms),
        }
    }
}

/// Default snapshot location (`<data_dir>/movieshelf/catalog.json`)
pub fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movieshelf")
        .join(CATALOG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShelfConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.image_base, DEFAULT_IMAGE_BASE);
        assert_eq!(config.latency, Duration::ZERO);
    }

    #[test]
    fn test_resolve_explicit_values() {
        let config = ShelfConfig::resolve(
            Some(PathBuf::from("/tmp/snapshot.json")),
            Some("http://localhost/".to_string()),
            250,
        );
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/snapshot.json")));
        assert_eq!(config.image_base, "http://localhost/");
        assert_eq!(config.latency, Duration::from_millis(250));
    }

    #[test]
    fn test_default_catalog_path_file_name() {
        let path = default_catalog_path();
        assert!(path.ends_with("movieshelf/catalog.json"));
    }
}

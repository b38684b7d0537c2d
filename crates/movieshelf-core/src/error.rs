//! Error types for Movieshelf

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No catalog entry exists for the requested identifier
    #[error("Movie not found: {0}")]
    MovieNotFound(u64),

    /// Identifier could not be parsed from a path segment or argument
    #[error("Invalid movie id: {0}")]
    InvalidMovieId(String),

    /// Snapshot document could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::MovieNotFound(42);
        assert_eq!(format!("{}", err), "Movie not found: 42");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CatalogError = io_err.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Serialization(_)));
    }
}

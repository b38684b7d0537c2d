//! Navigation memory and details sub-routes.

/// Where "Go Back" leads when the view was entered without an origin
pub const MOVIES_FALLBACK_PATH: &str = "/movies";

/// The location a details view was entered from.
///
/// Captured once when the view is constructed and never re-derived, even as
/// the user moves between the view's own sub-routes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationMemory {
    came_from: Option<String>,
}

impl NavigationMemory {
    pub fn new(came_from: Option<String>) -> Self {
        // An empty origin carries no information; treat it as absent.
        let came_from = came_from.filter(|path| !path.trim().is_empty());
        Self { came_from }
    }

    /// The captured origin, if any
    pub fn came_from(&self) -> Option<&str> {
        self.came_from.as_deref()
    }

    /// Target of the "Go Back" link
    pub fn back_target(&self) -> &str {
        self.came_from.as_deref().unwrap_or(MOVIES_FALLBACK_PATH)
    }
}

/// Nested views shown inside the details layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubRoute {
    Cast,
    Reviews,
}

impl SubRoute {
    pub const ALL: [SubRoute; 2] = [SubRoute::Cast, SubRoute::Reviews];

    /// Link label
    pub fn label(&self) -> &'static str {
        match self {
            SubRoute::Cast => "Cast",
            SubRoute::Reviews => "Reviews",
        }
    }

    /// Path segment relative to the details route
    pub fn segment(&self) -> &'static str {
        match self {
            SubRoute::Cast => "cast",
            SubRoute::Reviews => "reviews",
        }
    }

    /// Absolute path of this sub-route for a details base path
    pub fn path_under(&self, details_path: &str) -> String {
        format!("{}/{}", details_path.trim_end_matches('/'), self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_back_target_uses_origin() {
        let memory = NavigationMemory::new(Some("/movies?query=heat".to_string()));
        assert_eq!(memory.back_target(), "/movies?query=heat");
        assert_eq!(memory.came_from(), Some("/movies?query=heat"));
    }

    #[test]
    fn test_back_target_fallback() {
        assert_eq!(NavigationMemory::new(None).back_target(), "/movies");
        assert_eq!(NavigationMemory::new(Some("  ".to_string())).back_target(), "/movies");
    }

    #[test]
    fn test_sub_route_paths() {
        assert_eq!(SubRoute::Cast.path_under("/movies/550"), "/movies/550/cast");
        assert_eq!(SubRoute::Reviews.path_under("/movies/550/"), "/movies/550/reviews");
        assert_eq!(SubRoute::ALL.map(|r| r.label()), ["Cast", "Reviews"]);
    }
}

//! Path pattern matching.

use crate::error::{Result, RouterError};

/// A mount path that incoming request paths are compared against.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pattern: String,
    normalized: String,
}

impl PathPattern {
    /// Parses a path pattern string.
    ///
    /// Patterns are literal absolute paths. A trailing slash is ignored
    /// on both sides, so `/crud` also answers `/crud/`.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_crud_router::PathPattern;
    ///
    /// let pattern = PathPattern::new("/admin/users").unwrap();
    /// assert!(pattern.match_path("/admin/users/"));
    /// assert!(!pattern.match_path("/admin"));
    /// assert!(PathPattern::new("admin").is_err());
    /// ```
    pub fn new(pattern: &str) -> Result<Self> {
        if !pattern.starts_with('/') || pattern.contains(['?', '#']) {
            return Err(RouterError::InvalidPattern {
                pattern: pattern.to_string(),
            });
        }

        Ok(Self {
            pattern: pattern.to_string(),
            normalized: normalize(pattern).to_string(),
        })
    }

    /// Returns true when the path is this pattern.
    pub fn match_path(&self, path: &str) -> bool {
        normalize(path) == self.normalized
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_path() {
        let pattern = PathPattern::new("/crud").unwrap();
        assert!(pattern.match_path("/crud"));
        assert!(pattern.match_path("/crud/"));
        assert!(!pattern.match_path("/other"));
        assert!(!pattern.match_path("/crud/users"));
    }

    #[test]
    fn test_root_path() {
        let pattern = PathPattern::new("/").unwrap();
        assert!(pattern.match_path("/"));
        assert!(!pattern.match_path("/crud"));
    }

    #[test]
    fn test_trailing_slash_in_pattern() {
        let pattern = PathPattern::new("/admin/users/").unwrap();
        assert!(pattern.match_path("/admin/users"));
        assert_eq!(pattern.pattern(), "/admin/users/");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            PathPattern::new("crud"),
            Err(RouterError::InvalidPattern { .. })
        ));
        assert!(PathPattern::new("/crud?path=home").is_err());
        assert!(PathPattern::new("").is_err());
    }
}

//! Error types for the topology pipeline.
//!
//! Every variant is fatal: the generator aborts before writing any artifact
//! rather than emit an incomplete sitemap or route list.

use thiserror::Error;

/// A defect detected while building the site topology.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Malformed catalog configuration: duplicate slugs within a fixed
    /// dimension, or a city with missing identity fields.
    #[error("catalog integrity: {0}")]
    ConfigIntegrity(String),

    /// Two entries produced the same URL path. Detected per city for
    /// free-text names and globally across the assembled sitemap.
    #[error("slug collision: {path} ({detail})")]
    SlugCollision {
        /// The colliding path.
        path: String,
        /// Which entries collided.
        detail: String,
    },

    /// A free-text name contained no alphanumeric characters and normalized
    /// to the empty string, which would produce an empty path segment.
    #[error("name {name:?} in {scope} normalizes to an empty slug")]
    EmptyNormalization {
        /// The offending display name.
        name: String,
        /// Where the name came from, e.g. "hospitals of ca/san-francisco".
        scope: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TopologyError::SlugCollision {
            path: "/ca/san-francisco/hospital/st-marys/".to_string(),
            detail: "\"St. Mary's\" vs \"St Marys\"".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("slug collision"));
        assert!(msg.contains("/ca/san-francisco/hospital/st-marys/"));
    }
}

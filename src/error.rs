//! Library error type.

use thiserror::Error;

/// Errors surfaced while loading or validating a route manifest.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed manifest: {0}")]
    ManifestParse(#[from] serde_json::Error),

    #[error("invalid route pattern {0:?}: must start with '/'")]
    InvalidRoutePattern(String),
}

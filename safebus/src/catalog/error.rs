//! Catalog error types.

use crate::domain::DomainError;

/// Errors while loading a trip catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON for the expected records
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A trip references an event id the catalog never declares
    #[error("trip {trip} references unknown event {event_id}")]
    UnknownEvent { trip: String, event_id: String },

    /// A record violates a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

//! Trip catalog sources.
//!
//! Trips are built from static sample data at startup, or loaded from a
//! JSON catalog file through the same domain shapes.

mod error;
mod records;
mod sample;

pub use error::CatalogError;
pub use records::{BoardingPointRecord, CatalogFile, EventRecord, RouteRecord, TripRecord};
pub use sample::sample_trips;

use std::path::Path;

use tracing::debug;

use crate::domain::Trip;

/// A trip catalog loaded from a JSON file.
///
/// The file declares events once (with string ids) and trips referencing
/// them by id; see [`CatalogFile`] for the record shapes.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    trips: Vec<Trip>,
}

impl JsonCatalog {
    /// Loads and validates a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `Err` on unreadable files, malformed JSON, trips that
    /// reference an undeclared event, or records violating a domain
    /// invariant.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file: CatalogFile = serde_json::from_str(&json)?;
        let trips = file.into_trips()?;
        debug!(path = %path.display(), trips = trips.len(), "catalog loaded");

        Ok(Self { trips })
    }

    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn into_trips(self) -> Vec<Trip> {
        self.trips
    }
}

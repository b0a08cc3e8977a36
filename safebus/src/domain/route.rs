//! Routes and their boarding points.

use std::sync::Arc;

use chrono::NaiveTime;

use super::{Event, GeoPoint};

/// A pickup location on a route.
///
/// Boarding points are owned by exactly one [`Route`] and kept in pickup
/// order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardingPoint {
    /// Stop name, e.g. "Centro Histórico".
    pub name: String,

    /// Street address of the stop.
    pub address: String,

    /// Scheduled pickup time.
    pub time: NaiveTime,

    /// Stop coordinate.
    pub coordinate: GeoPoint,
}

/// A path from an origin to an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Departure label, e.g. "Terminal Central".
    pub origin: String,

    /// Intermediate pickups, in order.
    pub stops: Vec<BoardingPoint>,

    /// The match this route serves. Shared between routes.
    pub destination: Arc<Event>,

    /// Polyline of the driven path.
    pub path: Vec<GeoPoint>,
}

impl Route {
    /// Human-readable route summary: `origin → stop → … → venue`.
    ///
    /// A route with no intermediate stops collapses to `origin → venue`.
    pub fn description(&self) -> String {
        if self.stops.is_empty() {
            format!("{} → {}", self.origin, self.destination.venue)
        } else {
            let stops = self
                .stops
                .iter()
                .map(|stop| stop.name.as_str())
                .collect::<Vec<_>>()
                .join(" → ");
            format!("{} → {} → {}", self.origin, stops, self.destination.venue)
        }
    }
}

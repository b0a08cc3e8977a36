//! Bookable trips and their availability status.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::{DomainError, Route, parse_duration_mins};

/// Availability state of a trip.
///
/// Status is carried on the trip rather than derived: `Upcoming` encodes
/// departure proximity, which seat counts cannot express. Display labels
/// and colors live in `crate::display`, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    /// Seats are on sale.
    Available,
    /// Departing soon.
    Upcoming,
    /// Few seats remain.
    AlmostFull,
    /// No seats remain.
    SoldOut,
}

impl TripStatus {
    /// Every status, in declaration order.
    pub const ALL: [TripStatus; 4] = [
        TripStatus::Available,
        TripStatus::Upcoming,
        TripStatus::AlmostFull,
        TripStatus::SoldOut,
    ];
}

/// Everything needed to construct a [`Trip`], bundled for a cleaner
/// constructor signature.
#[derive(Debug, Clone)]
pub struct TripSpec {
    /// Service name, e.g. "Camión Seguro A".
    pub name: String,
    /// The route this service drives.
    pub route: Route,
    /// Scheduled departure from the origin.
    pub departure: NaiveTime,
    /// Human-readable duration label, e.g. "2h 30min".
    pub duration_estimate: String,
    /// Seats still bookable.
    pub seats_available: u32,
    /// Total seats on the bus.
    pub seats_total: u32,
    /// Advertised availability state.
    pub status: TripStatus,
    /// Ticket price in Mexican pesos.
    pub price_mxn: f64,
    /// Service policy lines shown to the rider.
    pub policies: Vec<String>,
}

/// A bookable transport service instance.
///
/// Owns its [`Route`]; immutable once constructed. `Trip::new` enforces
/// that seat counts are coherent and that the stored status agrees with
/// them: zero seats available if and only if the trip is sold out.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    name: String,
    route: Route,
    departure: NaiveTime,
    duration_estimate: String,
    seats_available: u32,
    seats_total: u32,
    status: TripStatus,
    price_mxn: f64,
    policies: Vec<String>,
}

impl Trip {
    /// Validates a [`TripSpec`] into a trip.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the bus has zero total seats
    /// - more seats are available than the bus holds
    /// - the status contradicts the seat count (`SoldOut` with seats
    ///   left, or seats exhausted without `SoldOut`)
    pub fn new(spec: TripSpec) -> Result<Self, DomainError> {
        if spec.seats_total == 0 {
            return Err(DomainError::NoCapacity);
        }

        if spec.seats_available > spec.seats_total {
            return Err(DomainError::SeatsExceedCapacity {
                available: spec.seats_available,
                total: spec.seats_total,
            });
        }

        let sold_out = spec.status == TripStatus::SoldOut;
        if sold_out != (spec.seats_available == 0) {
            return Err(DomainError::StatusSeatMismatch {
                status: spec.status,
                available: spec.seats_available,
            });
        }

        Ok(Self {
            name: spec.name,
            route: spec.route,
            departure: spec.departure,
            duration_estimate: spec.duration_estimate,
            seats_available: spec.seats_available,
            seats_total: spec.seats_total,
            status: spec.status,
            price_mxn: spec.price_mxn,
            policies: spec.policies,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn departure(&self) -> NaiveTime {
        self.departure
    }

    /// Duration label as shown to riders, e.g. "2h 30min".
    pub fn duration_estimate(&self) -> &str {
        &self.duration_estimate
    }

    /// Estimated duration in minutes, leniently parsed from the label.
    pub fn duration_mins(&self) -> i64 {
        parse_duration_mins(&self.duration_estimate)
    }

    pub fn seats_available(&self) -> u32 {
        self.seats_available
    }

    pub fn seats_total(&self) -> u32 {
        self.seats_total
    }

    pub fn status(&self) -> TripStatus {
        self.status
    }

    pub fn price_mxn(&self) -> f64 {
        self.price_mxn
    }

    pub fn policies(&self) -> &[String] {
        &self.policies
    }

    /// Share of seats already taken, as a percentage.
    pub fn occupancy_percent(&self) -> f64 {
        let taken = f64::from(self.seats_total - self.seats_available);
        taken / f64::from(self.seats_total) * 100.0
    }
}

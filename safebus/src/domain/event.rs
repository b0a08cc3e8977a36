//! Scheduled events that trips serve.

use chrono::{NaiveDate, NaiveTime};

use super::GeoPoint;

/// A scheduled match at a venue.
///
/// Events are shared, not owned: several routes may carry passengers to
/// the same match, so routes hold their destination behind `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    /// Match name, e.g. "México vs. Argentina".
    pub name: String,

    /// Venue name, e.g. "Estadio Azteca".
    pub venue: String,

    /// Host city, e.g. "Ciudad de México".
    pub city: String,

    /// Venue-local calendar date of the match.
    pub date: NaiveDate,

    /// Scheduled kick-off time.
    pub start_time: NaiveTime,

    /// Venue coordinate.
    pub coordinate: GeoPoint,
}

impl Event {
    /// Whether the match is on or after `today`.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.date >= today
    }
}

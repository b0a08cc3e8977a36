//! Search criteria and their application to the trip list.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::domain::{Trip, TripStatus};

/// User-specified narrowing parameters.
///
/// Every criterion is optional or defaultable; `TripFilter::default()` is
/// the identity filter that keeps every trip.
#[derive(Debug, Clone)]
pub struct TripFilter {
    /// Keep trips whose destination match falls on this calendar date.
    ///
    /// Event dates are venue-local calendar dates; the comparison is
    /// plain date equality, with no time-of-day or time-zone arithmetic.
    pub date: Option<NaiveDate>,

    /// Case-insensitive substring matched against the destination's venue
    /// or city. An empty string filters nothing.
    pub venue_or_city: Option<String>,

    /// Accepted availability states. Defaults to all four, which makes
    /// the status criterion a no-op until narrowed.
    pub statuses: HashSet<TripStatus>,

    /// Upper bound on the estimated trip duration, in minutes.
    pub max_duration_mins: Option<i64>,
}

impl Default for TripFilter {
    fn default() -> Self {
        Self {
            date: None,
            venue_or_city: None,
            statuses: TripStatus::ALL.into_iter().collect(),
            max_duration_mins: None,
        }
    }
}

impl TripFilter {
    /// Returns the sublist of `trips` satisfying every active criterion.
    ///
    /// Stable: survivors keep their relative order. Pure: the input is
    /// unmodified and the output is a fresh list.
    pub fn apply(&self, trips: &[Trip]) -> Vec<Trip> {
        trips
            .iter()
            .filter(|trip| self.matches(trip))
            .cloned()
            .collect()
    }

    /// Whether a single trip passes every active criterion.
    pub fn matches(&self, trip: &Trip) -> bool {
        let event = &trip.route().destination;

        if let Some(date) = self.date {
            if event.date != date {
                return false;
            }
        }

        if let Some(query) = self.venue_or_city.as_deref() {
            if !query.is_empty() {
                let query = query.to_lowercase();
                let hit = event.city.to_lowercase().contains(&query)
                    || event.venue.to_lowercase().contains(&query);
                if !hit {
                    return false;
                }
            }
        }

        if !self.statuses.contains(&trip.status()) {
            return false;
        }

        if let Some(max) = self.max_duration_mins {
            if trip.duration_mins() > max {
                return false;
            }
        }

        true
    }
}

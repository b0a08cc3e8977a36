//! On-disk catalog records.
//!
//! These mirror the JSON catalog format and stay separate from the
//! domain types; conversion into validated domain values happens in
//! [`CatalogFile::into_trips`]. Events are declared once with string ids
//! and referenced by id from trips, so event sharing survives
//! serialization.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::CatalogError;
use crate::domain::{BoardingPoint, Event, GeoPoint, Route, Trip, TripSpec, TripStatus};

/// Top-level catalog file: declared events plus the trips serving them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub events: Vec<EventRecord>,
    pub trips: Vec<TripRecord>,
}

/// A declared event, addressable by id from trip records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub name: String,
    pub venue: String,
    pub city: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub coordinate: GeoPoint,
}

/// A pickup stop on a route record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardingPointRecord {
    pub name: String,
    pub address: String,
    pub time: NaiveTime,
    pub coordinate: GeoPoint,
}

/// A route record referencing its destination event by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    pub origin: String,
    #[serde(default)]
    pub stops: Vec<BoardingPointRecord>,
    pub event_id: String,
    #[serde(default)]
    pub path: Vec<GeoPoint>,
}

/// A bookable trip record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub name: String,
    pub route: RouteRecord,
    pub departure: NaiveTime,
    pub duration_estimate: String,
    pub seats_available: u32,
    pub seats_total: u32,
    pub status: TripStatus,
    pub price_mxn: f64,
    #[serde(default)]
    pub policies: Vec<String>,
}

impl CatalogFile {
    /// Converts the raw records into validated domain trips.
    ///
    /// # Errors
    ///
    /// Returns `Err` when a trip references an undeclared event id, or a
    /// record fails a domain invariant.
    pub fn into_trips(self) -> Result<Vec<Trip>, CatalogError> {
        let events: HashMap<String, Arc<Event>> = self
            .events
            .into_iter()
            .map(|record| {
                let event = Arc::new(Event {
                    name: record.name,
                    venue: record.venue,
                    city: record.city,
                    date: record.date,
                    start_time: record.start_time,
                    coordinate: record.coordinate,
                });
                (record.id, event)
            })
            .collect();

        self.trips
            .into_iter()
            .map(|record| record.into_trip(&events))
            .collect()
    }
}

impl BoardingPointRecord {
    fn into_boarding_point(self) -> BoardingPoint {
        BoardingPoint {
            name: self.name,
            address: self.address,
            time: self.time,
            coordinate: self.coordinate,
        }
    }
}

impl TripRecord {
    fn into_trip(self, events: &HashMap<String, Arc<Event>>) -> Result<Trip, CatalogError> {
        let destination =
            events
                .get(&self.route.event_id)
                .ok_or_else(|| CatalogError::UnknownEvent {
                    trip: self.name.clone(),
                    event_id: self.route.event_id.clone(),
                })?;

        let route = Route {
            origin: self.route.origin,
            stops: self
                .route
                .stops
                .into_iter()
                .map(BoardingPointRecord::into_boarding_point)
                .collect(),
            destination: Arc::clone(destination),
            path: self.route.path,
        };

        let trip = Trip::new(TripSpec {
            name: self.name,
            route,
            departure: self.departure,
            duration_estimate: self.duration_estimate,
            seats_available: self.seats_available,
            seats_total: self.seats_total,
            status: self.status,
            price_mxn: self.price_mxn,
            policies: self.policies,
        })?;

        Ok(trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&TripStatus::AlmostFull).unwrap();
        assert_eq!(json, "\"almost_full\"");

        let status: TripStatus = serde_json::from_str("\"sold_out\"").unwrap();
        assert_eq!(status, TripStatus::SoldOut);
    }

    #[test]
    fn record_roundtrip() {
        let record = EventRecord {
            id: "mex-arg".into(),
            name: "México vs. Argentina".into(),
            venue: "Estadio Azteca".into(),
            city: "Ciudad de México".into(),
            date: NaiveDate::from_ymd_opt(2026, 6, 11).unwrap(),
            start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            coordinate: GeoPoint::new(19.3029, -99.1506),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "mex-arg");
        assert_eq!(back.date, record.date);
        assert_eq!(back.start_time, record.start_time);
    }
}

//! Domain types for the trip reservation engine.
//!
//! This module contains the core model types that represent validated
//! trip data. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod duration;
mod error;
mod event;
mod geo;
mod reservation;
mod route;
mod trip;

pub use duration::parse_duration_mins;
pub use error::DomainError;
pub use event::Event;
pub use geo::GeoPoint;
pub use reservation::{InvalidReservationCode, Reservation, ReservationCode};
pub(crate) use reservation::ReservationDraft;
pub use route::{BoardingPoint, Route};
pub use trip::{Trip, TripSpec, TripStatus};

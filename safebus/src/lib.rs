//! Safe-bus trip reservation engine.
//!
//! The domain core of a bus service that gets match-goers to stadium
//! events safely: browse and filter scheduled trips, then walk a
//! two-step reservation wizard to a confirmed booking.

pub mod booking;
pub mod catalog;
pub mod display;
pub mod domain;
pub mod search;
pub mod validate;
pub mod verify;

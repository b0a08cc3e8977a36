//! Confirmed reservations and their codes.

use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{BoardingPoint, Trip};

/// Error returned when parsing an invalid reservation code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid reservation code: {reason}")]
pub struct InvalidReservationCode {
    reason: &'static str,
}

/// An 8-character booking reference, e.g. `3F9A01BC`.
///
/// Codes are always 8 uppercase ASCII letters or digits. This type
/// guarantees that any `ReservationCode` value is valid by construction.
///
/// # Examples
///
/// ```
/// use safebus::domain::ReservationCode;
///
/// let code = ReservationCode::parse("3F9A01BC").unwrap();
/// assert_eq!(code.as_str(), "3F9A01BC");
///
/// // Lowercase is rejected
/// assert!(ReservationCode::parse("3f9a01bc").is_err());
///
/// // Wrong length is rejected
/// assert!(ReservationCode::parse("3F9A").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReservationCode([u8; 8]);

impl ReservationCode {
    /// Mints a fresh code from a random UUID, truncated and upper-cased.
    ///
    /// Collisions between codes generated in one booking session are
    /// vanishingly unlikely (8 hex characters of a v4 UUID).
    pub fn generate() -> Self {
        let hex = Uuid::new_v4().simple().to_string();
        let mut bytes = [0u8; 8];
        for (out, byte) in bytes.iter_mut().zip(hex.bytes()) {
            *out = byte.to_ascii_uppercase();
        }
        ReservationCode(bytes)
    }

    /// Parses a code from a string.
    ///
    /// The input must be exactly 8 uppercase ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidReservationCode> {
        let raw = s.as_bytes();

        if raw.len() != 8 {
            return Err(InvalidReservationCode {
                reason: "must be exactly 8 characters",
            });
        }

        let mut bytes = [0u8; 8];
        for (out, &byte) in bytes.iter_mut().zip(raw) {
            if !byte.is_ascii_uppercase() && !byte.is_ascii_digit() {
                return Err(InvalidReservationCode {
                    reason: "must be uppercase ASCII letters or digits",
                });
            }
            *out = byte;
        }

        Ok(ReservationCode(bytes))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII uppercase letters and digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for ReservationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReservationCode({})", self.as_str())
    }
}

impl fmt::Display for ReservationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the wizard hands over at confirmation time, bundled for a
/// cleaner constructor signature.
#[derive(Debug, Clone)]
pub(crate) struct ReservationDraft {
    pub trip: Trip,
    pub boarding: Option<BoardingPoint>,
    pub seat_number: Option<u32>,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub seat_count: u32,
    pub accessible: bool,
}

/// A confirmed booking against a trip.
///
/// Only the booking wizard constructs one, after both of its steps
/// validate; immutable from then on. A reservation holds its own copy of
/// the trip and never mutates the trip's seat count; there is no
/// persistence layer behind this model.
#[derive(Debug, Clone)]
pub struct Reservation {
    code: ReservationCode,
    trip: Trip,
    boarding: Option<BoardingPoint>,
    seat_number: Option<u32>,
    full_name: String,
    phone: String,
    email: String,
    seat_count: u32,
    accessible: bool,
    created_at: DateTime<Utc>,
}

impl Reservation {
    pub(crate) fn new(
        code: ReservationCode,
        draft: ReservationDraft,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            code,
            trip: draft.trip,
            boarding: draft.boarding,
            seat_number: draft.seat_number,
            full_name: draft.full_name,
            phone: draft.phone,
            email: draft.email,
            seat_count: draft.seat_count,
            accessible: draft.accessible,
            created_at,
        }
    }

    pub fn code(&self) -> ReservationCode {
        self.code
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Chosen pickup; `None` means boarding at the route origin.
    pub fn boarding(&self) -> Option<&BoardingPoint> {
        self.boarding.as_ref()
    }

    pub fn seat_number(&self) -> Option<u32> {
        self.seat_number
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn seat_count(&self) -> u32 {
        self.seat_count
    }

    pub fn accessible(&self) -> bool {
        self.accessible
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

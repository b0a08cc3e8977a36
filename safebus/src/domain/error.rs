//! Domain error types.
//!
//! These errors represent invariant violations caught at construction
//! time. User-input validation states live in `crate::validate` instead.

use super::TripStatus;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A trip must have at least one seat in total
    #[error("trip must have at least one seat")]
    NoCapacity,

    /// More seats available than the bus holds
    #[error("seats available ({available}) exceed seat total ({total})")]
    SeatsExceedCapacity { available: u32, total: u32 },

    /// Stored status disagrees with the seat count (e.g. "available" with
    /// zero seats left)
    #[error("status {status:?} is inconsistent with {available} seats available")]
    StatusSeatMismatch {
        status: TripStatus,
        available: u32,
    },
}

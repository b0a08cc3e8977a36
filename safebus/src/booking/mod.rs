//! The two-step reservation wizard.
//!
//! Collects personal data, then reservation details, and mints an
//! immutable [`crate::domain::Reservation`] on confirmation. All "errors"
//! here are user-input validation states surfaced inline; nothing in this
//! module performs I/O, so there is no retry concept.

mod wizard;

pub use wizard::{
    MAX_SEATS_PER_BOOKING, PersonalDataErrors, ReservationWizard, Step, WizardError,
};

//! Reservation wizard state machine.

use chrono::Utc;
use tracing::debug;

use crate::domain::{BoardingPoint, Reservation, ReservationCode, ReservationDraft, Trip};
use crate::validate::{self, FieldError};

/// Hard cap on seats per booking, regardless of availability.
pub const MAX_SEATS_PER_BOOKING: u32 = 8;

/// Wizard position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Collecting name, phone and email.
    PersonalData,
    /// Collecting seat count and accessibility needs.
    ReservationDetails,
}

/// Per-field validation state of the personal-data step.
///
/// `None` means the field currently passes. The presentation layer
/// renders these inline next to the offending fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PersonalDataErrors {
    pub full_name: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl PersonalDataErrors {
    /// True when every field passes.
    pub fn is_clean(&self) -> bool {
        self.full_name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// Errors from driving the wizard.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// The trip has no seats left, so a wizard cannot be opened for it
    #[error("trip is sold out")]
    TripSoldOut,

    /// `confirm` was called before reaching the details step
    #[error("personal data step is not complete")]
    NotReady,
}

/// Two-step reservation flow over a single trip.
///
/// `PersonalData` gates progression on field validation;
/// `ReservationDetails` always holds valid values (the seat count is
/// clamped and the accessibility flag is a plain bool), so confirmation
/// cannot fail once reached. Going back never loses entered data.
#[derive(Debug, Clone)]
pub struct ReservationWizard {
    trip: Trip,
    boarding: Option<BoardingPoint>,
    step: Step,
    full_name: String,
    phone: String,
    email: String,
    seat_count: u32,
    accessible: bool,
}

impl ReservationWizard {
    /// Opens a wizard for a trip.
    ///
    /// `boarding` is the rider's chosen pickup; `None` means boarding at
    /// the route origin.
    ///
    /// # Errors
    ///
    /// Returns `Err` when the trip has no seats left.
    pub fn new(trip: Trip, boarding: Option<BoardingPoint>) -> Result<Self, WizardError> {
        if trip.seats_available() == 0 {
            return Err(WizardError::TripSoldOut);
        }

        Ok(Self {
            trip,
            boarding,
            step: Step::PersonalData,
            full_name: String::new(),
            phone: String::new(),
            email: String::new(),
            seat_count: 1,
            accessible: false,
        })
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn trip(&self) -> &Trip {
        &self.trip
    }

    /// Stores the name and reports its validation state.
    pub fn set_full_name(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.full_name = value.into();
        validate::full_name(&self.full_name)
    }

    /// Stores the phone number and reports its validation state.
    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.phone = value.into();
        validate::phone(&self.phone)
    }

    /// Stores the email and reports its validation state.
    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), FieldError> {
        self.email = value.into();
        validate::email(&self.email)
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

    /// Current validation state of every personal-data field.
    pub fn personal_data_errors(&self) -> PersonalDataErrors {
        PersonalDataErrors {
            full_name: validate::full_name(&self.full_name).err(),
            phone: validate::phone(&self.phone).err(),
            email: validate::email(&self.email).err(),
        }
    }

    /// Moves from personal data to reservation details.
    ///
    /// A no-op while any field is invalid: the wizard stays on
    /// `PersonalData` and the failing fields are reported back. Calling
    /// this from the details step does nothing.
    pub fn advance(&mut self) -> Result<(), PersonalDataErrors> {
        if self.step == Step::ReservationDetails {
            return Ok(());
        }

        let errors = self.personal_data_errors();
        if !errors.is_clean() {
            return Err(errors);
        }

        self.step = Step::ReservationDetails;
        Ok(())
    }

    /// Returns to the personal-data step, keeping every entered value.
    pub fn back(&mut self) {
        self.step = Step::PersonalData;
    }

    /// Largest bookable seat count for this trip.
    pub fn max_seats(&self) -> u32 {
        self.trip.seats_available().min(MAX_SEATS_PER_BOOKING)
    }

    pub fn seat_count(&self) -> u32 {
        self.seat_count
    }

    /// Adds a seat; a no-op at [`Self::max_seats`].
    pub fn increment_seats(&mut self) {
        if self.seat_count < self.max_seats() {
            self.seat_count += 1;
        }
    }

    /// Removes a seat; a no-op at one.
    pub fn decrement_seats(&mut self) {
        if self.seat_count > 1 {
            self.seat_count -= 1;
        }
    }

    pub fn accessible(&self) -> bool {
        self.accessible
    }

    pub fn set_accessible(&mut self, value: bool) {
        self.accessible = value;
    }

    /// Confirms the booking, minting an immutable [`Reservation`] with a
    /// freshly generated code and a UTC timestamp.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the wizard has not reached the details step.
    pub fn confirm(&self) -> Result<Reservation, WizardError> {
        if self.step != Step::ReservationDetails {
            return Err(WizardError::NotReady);
        }

        let code = ReservationCode::generate();
        debug!(
            code = %code,
            trip = self.trip.name(),
            seats = self.seat_count,
            "reservation confirmed"
        );

        let draft = ReservationDraft {
            trip: self.trip.clone(),
            boarding: self.boarding.clone(),
            seat_number: None,
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            seat_count: self.seat_count,
            accessible: self.accessible,
        };

        Ok(Reservation::new(code, draft, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::domain::{Event, GeoPoint, Route, TripSpec, TripStatus};

    fn trip_with_seats(available: u32) -> Trip {
        let status = if available == 0 {
            TripStatus::SoldOut
        } else {
            TripStatus::Available
        };
        Trip::new(TripSpec {
            name: "Camión Seguro A".into(),
            route: Route {
                origin: "Terminal Central".into(),
                stops: vec![BoardingPoint {
                    name: "Centro Histórico".into(),
                    address: "Av. Juárez 100".into(),
                    time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
                    coordinate: GeoPoint::new(19.4326, -99.1332),
                }],
                destination: Arc::new(Event {
                    name: "México vs. Argentina".into(),
                    venue: "Estadio Azteca".into(),
                    city: "Ciudad de México".into(),
                    date: NaiveDate::from_ymd_opt(2026, 6, 11).unwrap(),
                    start_time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                    coordinate: GeoPoint::new(19.3029, -99.1506),
                }),
                path: vec![],
            },
            departure: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            duration_estimate: "2h 30min".into(),
            seats_available: available,
            seats_total: 40,
            status,
            price_mxn: 250.0,
            policies: vec![],
        })
        .unwrap()
    }

    fn wizard_with_seats(available: u32) -> ReservationWizard {
        ReservationWizard::new(trip_with_seats(available), None).unwrap()
    }

    fn fill_personal_data(wizard: &mut ReservationWizard) {
        wizard.set_full_name("Ana Lopez").unwrap();
        wizard.set_phone("8112345678").unwrap();
        wizard.set_email("a@b.com").unwrap();
    }

    #[test]
    fn sold_out_trip_cannot_open_wizard() {
        let result = ReservationWizard::new(trip_with_seats(0), None);
        assert_eq!(result.unwrap_err(), WizardError::TripSoldOut);
    }

    #[test]
    fn starts_on_personal_data_with_defaults() {
        let wizard = wizard_with_seats(5);

        assert_eq!(wizard.step(), Step::PersonalData);
        assert_eq!(wizard.seat_count(), 1);
        assert!(!wizard.accessible());
    }

    #[test]
    fn too_short_name_blocks_advance() {
        let mut wizard = wizard_with_seats(5);
        assert_eq!(
            wizard.set_full_name("Al"),
            Err(FieldError::TooShort { min: 3 })
        );
        wizard.set_phone("8112345678").unwrap();
        wizard.set_email("a@b.com").unwrap();

        let errors = wizard.advance().unwrap_err();
        assert_eq!(wizard.step(), Step::PersonalData);
        assert_eq!(errors.full_name, Some(FieldError::TooShort { min: 3 }));
        assert_eq!(errors.phone, None);
        assert_eq!(errors.email, None);
    }

    #[test]
    fn empty_fields_block_advance() {
        let mut wizard = wizard_with_seats(5);

        let errors = wizard.advance().unwrap_err();
        assert_eq!(errors.full_name, Some(FieldError::Required));
        assert_eq!(errors.phone, Some(FieldError::Required));
        assert_eq!(errors.email, Some(FieldError::Required));
    }

    #[test]
    fn valid_personal_data_advances() {
        let mut wizard = wizard_with_seats(5);
        fill_personal_data(&mut wizard);

        wizard.advance().unwrap();
        assert_eq!(wizard.step(), Step::ReservationDetails);
    }

    #[test]
    fn back_preserves_entered_values() {
        let mut wizard = wizard_with_seats(5);
        fill_personal_data(&mut wizard);
        wizard.advance().unwrap();
        wizard.increment_seats();
        wizard.set_accessible(true);

        wizard.back();

        assert_eq!(wizard.step(), Step::PersonalData);
        assert_eq!(wizard.full_name(), "Ana Lopez");
        assert_eq!(wizard.phone(), "8112345678");
        assert_eq!(wizard.email(), "a@b.com");
        assert_eq!(wizard.seat_count(), 2);
        assert!(wizard.accessible());

        // And forward again without retyping anything
        wizard.advance().unwrap();
        assert_eq!(wizard.step(), Step::ReservationDetails);
    }

    #[test]
    fn seat_stepper_clamps_to_availability() {
        let mut wizard = wizard_with_seats(5);

        // Decrementing at one is a no-op
        wizard.decrement_seats();
        assert_eq!(wizard.seat_count(), 1);

        // Incrementing seven times from one caps at min(5, 8) = 5
        for _ in 0..7 {
            wizard.increment_seats();
        }
        assert_eq!(wizard.seat_count(), 5);
    }

    #[test]
    fn seat_stepper_caps_at_eight_on_roomy_trips() {
        let mut wizard = wizard_with_seats(40);

        for _ in 0..20 {
            wizard.increment_seats();
        }
        assert_eq!(wizard.seat_count(), MAX_SEATS_PER_BOOKING);
    }

    #[test]
    fn confirm_before_details_step_is_rejected() {
        let wizard = wizard_with_seats(5);
        assert_eq!(wizard.confirm().unwrap_err(), WizardError::NotReady);
    }

    #[test]
    fn confirm_produces_reservation() {
        let mut wizard = wizard_with_seats(5);
        fill_personal_data(&mut wizard);
        wizard.advance().unwrap();
        wizard.increment_seats();
        wizard.set_accessible(true);

        let reservation = wizard.confirm().unwrap();

        assert_eq!(reservation.full_name(), "Ana Lopez");
        assert_eq!(reservation.phone(), "8112345678");
        assert_eq!(reservation.email(), "a@b.com");
        assert_eq!(reservation.seat_count(), 2);
        assert!(reservation.accessible());
        assert_eq!(reservation.trip().name(), "Camión Seguro A");
        assert_eq!(reservation.seat_number(), None);
        assert!(reservation.boarding().is_none());
    }

    #[test]
    fn confirm_with_chosen_boarding_point() {
        let trip = trip_with_seats(5);
        let boarding = trip.route().stops.first().cloned();
        let mut wizard = ReservationWizard::new(trip, boarding).unwrap();
        fill_personal_data(&mut wizard);
        wizard.advance().unwrap();

        let reservation = wizard.confirm().unwrap();
        assert_eq!(reservation.boarding().unwrap().name, "Centro Histórico");
    }

    #[test]
    fn codes_are_unique_per_confirmation() {
        let mut wizard = wizard_with_seats(5);
        fill_personal_data(&mut wizard);
        wizard.advance().unwrap();

        let codes: HashSet<String> = (0..100)
            .map(|_| wizard.confirm().unwrap().code().to_string())
            .collect();
        assert_eq!(codes.len(), 100);
    }
}

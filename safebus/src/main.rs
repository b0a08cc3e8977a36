use std::time::Duration;

use chrono::Utc;

use safebus::booking::ReservationWizard;
use safebus::catalog::{JsonCatalog, sample_trips};
use safebus::display::{price_label, status_label};
use safebus::search::TripFilter;
use safebus::verify::{SimulatedVerifier, VerificationRequest, Verifier};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Catalog from a file if configured, the built-in samples otherwise
    let trips = match std::env::var("SAFEBUS_CATALOG") {
        Ok(path) => JsonCatalog::from_path(&path)
            .expect("Failed to load catalog")
            .into_trips(),
        Err(_) => sample_trips(Utc::now().date_naive()),
    };
    println!("Loaded {} trips", trips.len());

    // Narrow to Mexico City departures under three hours
    let filter = TripFilter {
        venue_or_city: Some("Ciudad de México".into()),
        max_duration_mins: Some(180),
        ..TripFilter::default()
    };
    let matches = filter.apply(&trips);

    println!("{} match the filter:", matches.len());
    for trip in &matches {
        println!(
            "  {}: {} [{}] {}",
            trip.name(),
            trip.route().description(),
            status_label(trip.status()),
            price_label(trip.price_mxn()),
        );
    }

    let Some(trip) = matches
        .into_iter()
        .find(|trip| trip.seats_available() > 0)
    else {
        println!("No bookable trip matched the filter.");
        return;
    };

    // Phone verification, simulated (always approves after its latency)
    let verifier = SimulatedVerifier::new(Duration::from_millis(300));
    verifier
        .verify(VerificationRequest::SmsCode {
            phone: "+52 81 1234 5678".into(),
            code: "123456".into(),
        })
        .await
        .expect("simulated verification approves");

    // Walk the wizard the way the reservation screen does
    let boarding = trip.route().stops.first().cloned();
    let mut wizard = ReservationWizard::new(trip, boarding).expect("trip has seats");
    wizard.set_full_name("Ana López").expect("valid name");
    wizard.set_phone("8112345678").expect("valid phone");
    wizard.set_email("ana.lopez@correo.mx").expect("valid email");
    wizard.advance().expect("personal data is complete");
    wizard.increment_seats();

    let reservation = wizard.confirm().expect("details step always confirms");
    println!(
        "Reserva {}: {} asiento(s) para {} en {}",
        reservation.code(),
        reservation.seat_count(),
        reservation.full_name(),
        reservation.trip().name(),
    );
}

//! Built-in sample catalog.
//!
//! The five demonstration buses serving three sample matches, with dates
//! placed relative to a caller-supplied "today" so the events always lie
//! in the near future.

use std::sync::Arc;

use chrono::{Days, NaiveDate, NaiveTime};

use crate::domain::{BoardingPoint, Event, GeoPoint, Route, Trip, TripSpec, TripStatus};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    // All sample times are literal and in range
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn in_days(today: NaiveDate, days: u64) -> NaiveDate {
    today
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

fn stop(name: &str, address: &str, time: NaiveTime, lat: f64, lon: f64) -> BoardingPoint {
    BoardingPoint {
        name: name.into(),
        address: address.into(),
        time,
        coordinate: GeoPoint::new(lat, lon),
    }
}

/// The three sample matches.
fn sample_events(today: NaiveDate) -> [Arc<Event>; 3] {
    [
        Arc::new(Event {
            name: "México vs. Argentina".into(),
            venue: "Estadio Azteca".into(),
            city: "Ciudad de México".into(),
            date: in_days(today, 2),
            start_time: hm(18, 0),
            coordinate: GeoPoint::new(19.3029, -99.1506),
        }),
        Arc::new(Event {
            name: "Brasil vs. Uruguay".into(),
            venue: "Estadio BBVA".into(),
            city: "Monterrey".into(),
            date: in_days(today, 3),
            start_time: hm(20, 0),
            coordinate: GeoPoint::new(25.7204, -100.3097),
        }),
        Arc::new(Event {
            name: "España vs. Alemania".into(),
            venue: "Estadio Akron".into(),
            city: "Guadalajara".into(),
            date: in_days(today, 4),
            start_time: hm(19, 30),
            coordinate: GeoPoint::new(20.6926, -103.4144),
        }),
    ]
}

/// The five demonstration trips, with their events genuinely shared.
pub fn sample_trips(today: NaiveDate) -> Vec<Trip> {
    let [azteca, bbva, akron] = sample_events(today);

    let common_policies = [
        "Solo mujeres y personas no binarias",
        "Prohibido fumar y consumir alcohol",
        "Se requiere identificación oficial",
        "El boleto es personal e intransferible",
    ];

    let specs = vec![
        TripSpec {
            name: "Camión Seguro A".into(),
            route: Route {
                origin: "Terminal Central".into(),
                stops: vec![
                    stop(
                        "Centro Histórico",
                        "Av. Juárez 100",
                        hm(14, 30),
                        19.4326,
                        -99.1332,
                    ),
                    stop(
                        "Polanco",
                        "Av. Presidente Masaryk 200",
                        hm(15, 0),
                        19.4338,
                        -99.1950,
                    ),
                ],
                destination: Arc::clone(&azteca),
                path: vec![
                    GeoPoint::new(19.4270, -99.1676),
                    GeoPoint::new(19.4326, -99.1332),
                    GeoPoint::new(19.4338, -99.1950),
                    GeoPoint::new(19.3029, -99.1506),
                ],
            },
            departure: hm(14, 0),
            duration_estimate: "2h 30min".into(),
            seats_available: 28,
            seats_total: 40,
            status: TripStatus::Available,
            price_mxn: 250.0,
            policies: common_policies.iter().map(|p| p.to_string()).collect(),
        },
        TripSpec {
            name: "Camión Seguro B".into(),
            route: Route {
                origin: "Terminal Norte".into(),
                stops: vec![stop(
                    "Satélite",
                    "Circuito Centro Comercial 50",
                    hm(15, 0),
                    19.5081,
                    -99.2336,
                )],
                destination: Arc::clone(&azteca),
                path: vec![
                    GeoPoint::new(19.5126, -99.1313),
                    GeoPoint::new(19.5081, -99.2336),
                    GeoPoint::new(19.3029, -99.1506),
                ],
            },
            departure: hm(14, 30),
            duration_estimate: "2h 15min".into(),
            seats_available: 8,
            seats_total: 40,
            status: TripStatus::AlmostFull,
            price_mxn: 230.0,
            policies: common_policies.iter().map(|p| p.to_string()).collect(),
        },
        TripSpec {
            name: "Camión Seguro C".into(),
            route: Route {
                origin: "Aeropuerto".into(),
                stops: vec![],
                destination: bbva,
                path: vec![
                    GeoPoint::new(19.4363, -99.0721),
                    GeoPoint::new(25.7204, -100.3097),
                ],
            },
            departure: hm(8, 0),
            duration_estimate: "8h 00min".into(),
            seats_available: 35,
            seats_total: 45,
            status: TripStatus::Available,
            price_mxn: 850.0,
            policies: vec![
                "Solo mujeres y personas no binarias".into(),
                "Incluye snacks y bebidas".into(),
                "Paradas cada 2 horas".into(),
                "WiFi a bordo disponible".into(),
            ],
        },
        TripSpec {
            name: "Camión Seguro D".into(),
            route: Route {
                origin: "Centro de Convenciones".into(),
                stops: vec![stop(
                    "Plaza Mayor",
                    "Av. Universidad 1000",
                    hm(16, 30),
                    20.6765,
                    -103.3471,
                )],
                destination: akron,
                path: vec![
                    GeoPoint::new(20.6597, -103.3496),
                    GeoPoint::new(20.6765, -103.3471),
                    GeoPoint::new(20.6926, -103.4144),
                ],
            },
            departure: hm(16, 0),
            duration_estimate: "1h 15min".into(),
            seats_available: 18,
            seats_total: 40,
            status: TripStatus::Upcoming,
            price_mxn: 180.0,
            policies: vec![
                "Solo mujeres y personas no binarias".into(),
                "Salida confirmada con mínimo 20 personas".into(),
                "Reembolso completo 24h antes del evento".into(),
            ],
        },
        TripSpec {
            name: "Camión Seguro E".into(),
            route: Route {
                origin: "Zona Rosa".into(),
                stops: vec![],
                destination: azteca,
                path: vec![
                    GeoPoint::new(19.4284, -99.1677),
                    GeoPoint::new(19.3029, -99.1506),
                ],
            },
            departure: hm(16, 0),
            duration_estimate: "1h 45min".into(),
            seats_available: 0,
            seats_total: 35,
            status: TripStatus::SoldOut,
            price_mxn: 200.0,
            policies: vec![
                "Solo mujeres y personas no binarias".into(),
                "Servicio directo sin paradas".into(),
                "Lista de espera disponible".into(),
            ],
        },
    ];

    specs
        .into_iter()
        // The sample values above satisfy every trip invariant
        .map(|spec| Trip::new(spec).expect("sample trip is valid"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 9).unwrap()
    }

    #[test]
    fn five_trips_three_events() {
        let trips = sample_trips(today());
        assert_eq!(trips.len(), 5);

        let venues: std::collections::HashSet<_> = trips
            .iter()
            .map(|t| t.route().destination.venue.clone())
            .collect();
        assert_eq!(venues.len(), 3);
    }

    #[test]
    fn events_lie_in_the_near_future() {
        let trips = sample_trips(today());
        assert!(
            trips
                .iter()
                .all(|t| t.route().destination.is_upcoming(today()))
        );
    }

    #[test]
    fn azteca_event_is_shared() {
        let trips = sample_trips(today());

        // A, B and E all serve the Azteca match through one shared event
        assert!(Arc::ptr_eq(
            &trips[0].route().destination,
            &trips[1].route().destination,
        ));
        assert!(Arc::ptr_eq(
            &trips[0].route().destination,
            &trips[4].route().destination,
        ));
    }

    #[test]
    fn statuses_match_the_fixture() {
        let trips = sample_trips(today());
        let statuses: Vec<_> = trips.iter().map(|t| t.status()).collect();

        assert_eq!(
            statuses,
            [
                TripStatus::Available,
                TripStatus::AlmostFull,
                TripStatus::Available,
                TripStatus::Upcoming,
                TripStatus::SoldOut,
            ]
        );
    }
}

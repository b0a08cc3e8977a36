//! Presentation lookup tables.
//!
//! Display concerns stay out of the domain model; renderers fetch labels
//! and colors here.

use crate::domain::TripStatus;

/// An RGB triple in the 0.0–1.0 range.
pub type Rgb = (f64, f64, f64);

/// Rider-facing label for a trip status.
pub fn status_label(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Available => "Disponible",
        TripStatus::Upcoming => "Próximo",
        TripStatus::AlmostFull => "Casi lleno",
        TripStatus::SoldOut => "Agotado",
    }
}

/// Badge color for a trip status.
pub fn status_color(status: TripStatus) -> Rgb {
    match status {
        TripStatus::Available => (0.2, 0.8, 0.4),
        TripStatus::Upcoming => (0.2, 0.5, 0.9),
        TripStatus::AlmostFull => (0.95, 0.75, 0.2),
        TripStatus::SoldOut => (0.95, 0.3, 0.3),
    }
}

/// Price label in Mexican pesos, e.g. `$250 MXN`.
pub fn price_label(price_mxn: f64) -> String {
    format!("${price_mxn:.0} MXN")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_label_and_color() {
        let labels: Vec<_> = TripStatus::ALL.iter().map(|s| status_label(*s)).collect();
        assert_eq!(labels, ["Disponible", "Próximo", "Casi lleno", "Agotado"]);

        for status in TripStatus::ALL {
            let (r, g, b) = status_color(status);
            assert!((0.0..=1.0).contains(&r));
            assert!((0.0..=1.0).contains(&g));
            assert!((0.0..=1.0).contains(&b));
        }
    }

    #[test]
    fn price_labels() {
        assert_eq!(price_label(250.0), "$250 MXN");
        assert_eq!(price_label(230.0), "$230 MXN");
        assert_eq!(price_label(199.5), "$200 MXN");
    }
}

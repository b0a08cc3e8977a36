//! Duration-label parsing.
//!
//! Trip durations are carried as human-readable labels like `"2h 30min"`.
//! The filter engine needs them as minutes; parsing is lenient, so a bad
//! label never fails a whole search.

/// Parses a duration label into total minutes.
///
/// Accepts `"<N>h <M>min"`, `"<N>h"` or `"<M>min"` (whitespace-separated
/// optional hour and minute components). A missing or malformed component
/// contributes zero rather than failing the parse.
///
/// # Examples
///
/// ```
/// use safebus::domain::parse_duration_mins;
///
/// assert_eq!(parse_duration_mins("2h 30min"), 150);
/// assert_eq!(parse_duration_mins("1h"), 60);
/// assert_eq!(parse_duration_mins("45min"), 45);
/// assert_eq!(parse_duration_mins("0h 0min"), 0);
/// ```
pub fn parse_duration_mins(label: &str) -> i64 {
    let mut total = 0i64;

    for token in label.split_whitespace() {
        if let Some(minutes) = token.strip_suffix("min") {
            total += i64::from(minutes.parse::<u32>().unwrap_or(0));
        } else if let Some(hours) = token.strip_suffix('h') {
            total += i64::from(hours.parse::<u32>().unwrap_or(0)) * 60;
        }
    }

    total
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        /// Well-formed labels parse to exactly h*60 + m.
        #[test]
        fn well_formed(h in 0i64..24, m in 0i64..60) {
            let label = format!("{h}h {m}min");
            prop_assert_eq!(parse_duration_mins(&label), h * 60 + m);
        }

        /// No input ever panics or returns a negative total.
        #[test]
        fn never_panics(s in ".{0,40}") {
            prop_assert!(parse_duration_mins(&s) >= 0);
        }
    }
}

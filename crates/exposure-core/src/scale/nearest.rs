//! Nearest canonical stop selection and display formatting.
//!
//! Apertures use absolute distance. Shutter times span four orders of
//! magnitude, so they use distance relative to the candidate:
//!
//! ```text
//! aperture: argmin |stop − f|
//! shutter:  argmin |stop − t| / stop
//! ```
//!
//! Ties keep the first candidate in table order.

/// Closest candidate by absolute distance. `None` if there are no candidates.
pub fn nearest_absolute(candidates: impl IntoIterator<Item = f64>, target: f64) -> Option<f64> {
    nearest_by(candidates, |stop| (stop - target).abs())
}

/// Closest candidate by distance relative to the candidate itself.
pub fn nearest_relative(candidates: impl IntoIterator<Item = f64>, target: f64) -> Option<f64> {
    nearest_by(candidates, |stop| (stop - target).abs() / stop)
}

fn nearest_by(
    candidates: impl IntoIterator<Item = f64>,
    distance: impl Fn(f64) -> f64,
) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for stop in candidates {
        let d = distance(stop);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((stop, d)),
        }
    }
    best.map(|(stop, _)| stop)
}

/// Shortest decimal rendering of an f-number with no table marking.
pub fn format_aperture(stop: f64) -> String {
    format!("{stop}")
}

/// Render a shutter time.
///
/// - `t ≤ 0.5 s` → `"1/<N>"` with `N = round(1/t)`, ties to even
///   (1/2.5 s renders as `"1/2"`)
/// - `0.5 s < t < 4 s` → one decimal place, e.g. `"2.5"`
/// - `t ≥ 4 s` → whole seconds, e.g. `"8"`
pub fn format_shutter(seconds: f64) -> String {
    if seconds <= 0.5 {
        format!("1/{}", (1.0 / seconds).round_ties_even() as u64)
    } else if seconds < 4.0 {
        format!("{seconds:.1}")
    } else {
        format!("{}", seconds.round_ties_even() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::tables::{F_STOPS_THIRD, SHUTTERS_THIRD};

    #[test]
    fn test_nearest_absolute_picks_lens_marking() {
        let f = 2.0_f64.powf(1.5);
        assert_eq!(nearest_absolute(F_STOPS_THIRD.iter().copied(), f), Some(2.8));
    }

    #[test]
    fn test_nearest_keeps_first_on_tie() {
        assert_eq!(nearest_absolute([1.0, 3.0], 2.0), Some(1.0));
    }

    #[test]
    fn test_nearest_of_nothing_is_none() {
        assert_eq!(nearest_absolute(std::iter::empty::<f64>(), 2.0), None);
        assert_eq!(nearest_relative(std::iter::empty::<f64>(), 2.0), None);
    }

    #[test]
    fn test_relative_distance_differs_from_absolute() {
        // 0.7 s is absolutely closer to 0.5 than to 1.0 (0.2 vs 0.3) but
        // relatively closer to 1.0 (0.3 vs 0.4).
        let candidates = [0.5, 1.0];
        assert_eq!(nearest_absolute(candidates, 0.7), Some(0.5));
        assert_eq!(nearest_relative(candidates, 0.7), Some(1.0));
    }

    #[test]
    fn test_nearest_relative_on_fast_shutters() {
        let t = 1.0 / 240.0;
        assert_eq!(
            nearest_relative(SHUTTERS_THIRD.iter().copied(), t),
            Some(1.0 / 250.0)
        );
    }

    #[test]
    fn test_format_aperture() {
        assert_eq!(format_aperture(2.0), "2");
        assert_eq!(format_aperture(2.8), "2.8");
        assert_eq!(format_aperture(5.6), "5.6");
        assert_eq!(format_aperture(0.7), "0.7");
        assert_eq!(format_aperture(90.0), "90");
    }

    #[test]
    fn test_format_shutter_bands() {
        assert_eq!(format_shutter(1.0 / 8000.0), "1/8000");
        assert_eq!(format_shutter(1.0 / 125.0), "1/125");
        assert_eq!(format_shutter(0.5), "1/2");
        assert_eq!(format_shutter(1.0 / 3.0), "1/3");
        assert_eq!(format_shutter(1.0 / 2.5), "1/2");
        assert_eq!(format_shutter(1.3), "1.3");
        assert_eq!(format_shutter(2.5), "2.5");
        assert_eq!(format_shutter(4.0), "4");
        assert_eq!(format_shutter(60.0), "60");
    }
}

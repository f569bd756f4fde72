//! Canonical f-stop and shutter-speed tables.
//!
//! Each table is ascending. F-numbers are the marked values found on lens
//! barrels; shutter times are in seconds, 1/8000 s to 60 s.

use super::StopGranularity;
use crate::error::{ExposureError, Scale};

/// Classic full-stop f-numbers, f/0.7 to f/90.
pub const F_STOPS_FULL: &[f64] = &[
    0.7, 1.0, 1.4, 2.0, 2.8, 4.0, 5.6, 8.0, 11.0, 16.0, 22.0, 32.0, 45.0, 64.0, 90.0,
];

/// Classic half-stop f-numbers.
pub const F_STOPS_HALF: &[f64] = &[
    0.7, 0.8, 1.0, 1.2, 1.4, 1.7, 2.0, 2.4, 2.8, 3.3, 4.0, 4.8, 5.6, 6.7, 8.0, 9.5, 11.0, 13.0,
    16.0, 19.0, 22.0, 27.0, 32.0, 38.0, 45.0, 54.0, 64.0, 76.0, 90.0,
];

/// Classic third-stop f-numbers.
pub const F_STOPS_THIRD: &[f64] = &[
    0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.4, 1.6, 1.8, 2.0, 2.2, 2.5, 2.8, 3.2, 3.5, 4.0, 4.5, 5.0,
    5.6, 6.3, 7.1, 8.0, 9.0, 10.0, 11.0, 13.0, 14.0, 16.0, 18.0, 20.0, 22.0, 25.0, 29.0, 32.0,
    36.0, 40.0, 45.0, 51.0, 57.0, 64.0, 72.0, 80.0, 90.0,
];

/// Lens markings for [`F_STOPS_FULL`], index for index.
pub const F_STOP_LABELS_FULL: &[&str] = &[
    "0.7", "1.0", "1.4", "2", "2.8", "4", "5.6", "8", "11", "16", "22", "32", "45", "64", "90",
];

/// Lens markings for [`F_STOPS_HALF`].
pub const F_STOP_LABELS_HALF: &[&str] = &[
    "0.7", "0.8", "1.0", "1.2", "1.4", "1.7", "2", "2.4", "2.8", "3.3", "4", "4.8", "5.6", "6.7",
    "8", "9.5", "11", "13", "16", "19", "22", "27", "32", "38", "45", "54", "64", "76", "90",
];

/// Lens markings for [`F_STOPS_THIRD`].
pub const F_STOP_LABELS_THIRD: &[&str] = &[
    "0.7", "0.8", "0.9", "1.0", "1.1", "1.2", "1.4", "1.6", "1.8", "2", "2.2", "2.5", "2.8", "3.2",
    "3.5", "4", "4.5", "5.0", "5.6", "6.3", "7.1", "8", "9", "10", "11", "13", "14", "16", "18",
    "20", "22", "25", "29", "32", "36", "40", "45", "51", "57", "64", "72", "80", "90",
];

/// Classic full-stop shutter times in seconds.
pub const SHUTTERS_FULL: &[f64] = &[
    1.0 / 8000.0,
    1.0 / 4000.0,
    1.0 / 2000.0,
    1.0 / 1000.0,
    1.0 / 500.0,
    1.0 / 250.0,
    1.0 / 125.0,
    1.0 / 60.0,
    1.0 / 30.0,
    1.0 / 15.0,
    1.0 / 8.0,
    1.0 / 4.0,
    1.0 / 2.0,
    1.0,
    2.0,
    4.0,
    8.0,
    15.0,
    30.0,
    60.0,
];

/// Classic third-stop shutter times in seconds.
pub const SHUTTERS_THIRD: &[f64] = &[
    1.0 / 8000.0,
    1.0 / 6400.0,
    1.0 / 5000.0,
    1.0 / 4000.0,
    1.0 / 3200.0,
    1.0 / 2500.0,
    1.0 / 2000.0,
    1.0 / 1600.0,
    1.0 / 1250.0,
    1.0 / 1000.0,
    1.0 / 800.0,
    1.0 / 640.0,
    1.0 / 500.0,
    1.0 / 400.0,
    1.0 / 320.0,
    1.0 / 250.0,
    1.0 / 200.0,
    1.0 / 160.0,
    1.0 / 125.0,
    1.0 / 100.0,
    1.0 / 80.0,
    1.0 / 60.0,
    1.0 / 50.0,
    1.0 / 40.0,
    1.0 / 30.0,
    1.0 / 25.0,
    1.0 / 20.0,
    1.0 / 15.0,
    1.0 / 13.0,
    1.0 / 10.0,
    1.0 / 8.0,
    1.0 / 6.0,
    1.0 / 5.0,
    1.0 / 4.0,
    1.0 / 3.0,
    1.0 / 2.5,
    1.0 / 2.0,
    1.0 / 1.6,
    1.0 / 1.25,
    1.0,
    1.3,
    1.6,
    2.0,
    2.5,
    3.2,
    4.0,
    5.0,
    6.0,
    8.0,
    10.0,
    13.0,
    15.0,
    20.0,
    25.0,
    30.0,
    40.0,
    50.0,
    60.0,
];

/// F-number table for a granularity. Every granularity has one.
pub const fn aperture_stops(granularity: StopGranularity) -> &'static [f64] {
    match granularity {
        StopGranularity::Full => F_STOPS_FULL,
        StopGranularity::Half => F_STOPS_HALF,
        StopGranularity::Third => F_STOPS_THIRD,
    }
}

/// Lens markings parallel to [`aperture_stops`].
pub const fn aperture_labels(granularity: StopGranularity) -> &'static [&'static str] {
    match granularity {
        StopGranularity::Full => F_STOP_LABELS_FULL,
        StopGranularity::Half => F_STOP_LABELS_HALF,
        StopGranularity::Third => F_STOP_LABELS_THIRD,
    }
}

/// Marking for a table f-number, `None` if `stop` is not in the table.
pub fn aperture_label(granularity: StopGranularity, stop: f64) -> Option<&'static str> {
    aperture_stops(granularity)
        .iter()
        .position(|&s| s == stop)
        .map(|i| aperture_labels(granularity)[i])
}

/// Shutter table for a granularity. There is no half-stop shutter table.
pub fn shutter_stops(granularity: StopGranularity) -> Result<&'static [f64], ExposureError> {
    match granularity {
        StopGranularity::Full => Ok(SHUTTERS_FULL),
        StopGranularity::Third => Ok(SHUTTERS_THIRD),
        StopGranularity::Half => Err(ExposureError::UnsupportedGranularity {
            scale: Scale::Shutter,
            key: granularity.divisions(),
        }),
    }
}

/// Table entries inside `[min, max]`, inclusive on both ends.
pub fn stops_within(table: &'static [f64], min: f64, max: f64) -> impl Iterator<Item = f64> {
    table
        .iter()
        .copied()
        .filter(move |&stop| stop >= min && stop <= max)
}

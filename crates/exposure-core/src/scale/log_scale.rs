//! Linear-in-log mapping between a control position and a physical value.
//!
//! Stops are geometric, so a control that moves evenly through stops maps
//! its position linearly onto `log2(value)`:
//!
//! ```text
//! steps = round(stops_per_octave × (log2 max − log2 min) × divisions)
//! x'    = round(x × steps) / steps
//! value = 2^((log2 max − log2 min) × x' + log2 min)
//! ```
//!
//! Rounding is half-to-even throughout so that a control sitting exactly
//! between two clicks settles on the even one.

/// A quantized logarithmic scale between two positive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    min: f64,
    max: f64,
    log_min: f64,
    log_max: f64,
    steps: f64,
}

impl LogScale {
    /// Build a scale over `[min, max]`.
    ///
    /// `stops_per_octave` is 2 for f-numbers (one doubling of the f-number is
    /// two stops of light) and 1 for shutter times. Bounds must already be
    /// validated as positive with `min < max`.
    pub fn new(min: f64, max: f64, stops_per_octave: f64, divisions: u8) -> Self {
        let log_min = min.log2();
        let log_max = max.log2();
        let raw_steps = (stops_per_octave * (log_max - log_min) * f64::from(divisions))
            .round_ties_even();
        Self {
            min,
            max,
            log_min,
            log_max,
            // A range narrower than half a click still gets one click.
            steps: raw_steps.max(1.0),
        }
    }

    /// Number of discrete clicks spanning the range.
    pub fn steps(&self) -> u32 {
        self.steps as u32
    }

    /// Snap a position to the nearest click. Positions outside `[0, 1]`
    /// are not clamped.
    pub fn snap(&self, x: f64) -> f64 {
        (x * self.steps).round_ties_even() / self.steps
    }

    /// Physical value at a snapped position.
    pub fn value_at(&self, x: f64) -> f64 {
        let snapped = self.snap(x);
        ((self.log_max - self.log_min) * snapped + self.log_min).exp2()
    }

    /// Continuous inverse of [`value_at`](Self::value_at), clamped to `[0, 1]`.
    pub fn position_of(&self, value: f64) -> f64 {
        if value <= self.min {
            return 0.0;
        }
        if value >= self.max {
            return 1.0;
        }
        (value.log2() - self.log_min) / (self.log_max - self.log_min)
    }
}

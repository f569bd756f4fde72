//! Status-line snapshot of the engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ExposureEngine;

/// Display-ready snapshot of the current exposure.
///
/// Renders as `f/5.6 1/100s ISO 100 EV=11.6`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExposureReadout {
    pub aperture: String,
    pub shutter: String,
    pub iso: f64,
    pub light_value: f64,
    pub bias: Option<f64>,
}

impl ExposureReadout {
    pub fn capture(engine: &ExposureEngine) -> Self {
        Self {
            aperture: engine.display_aperture(),
            shutter: engine.display_shutter(),
            iso: engine.iso(),
            light_value: engine.light_value(),
            bias: engine.bias(),
        }
    }
}

impl fmt::Display for ExposureReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "f/{} {}s ISO {:.0} EV={:4.1}",
            self.aperture, self.shutter, self.iso, self.light_value
        )
    }
}

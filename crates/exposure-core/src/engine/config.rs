//! Engine configuration: the aperture and shutter ranges and their stop
//! granularity.
//!
//! `EngineConfig` is the only input to [`ExposureEngine::new`]. It can be
//! built in code or loaded from JSON; fields left out of the JSON fall back
//! to the full canonical span at third-stop granularity.
//!
//! [`ExposureEngine::new`]: crate::ExposureEngine::new

use serde::{Deserialize, Serialize};

use crate::error::{ExposureError, Scale};
use crate::scale::StopGranularity;
use crate::scale::tables::{self, F_STOPS_FULL, SHUTTERS_FULL};

/// Aperture range in f-numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApertureRange {
    /// Widest aperture (smallest f-number).
    pub min: f64,
    /// Narrowest aperture (largest f-number).
    pub max: f64,
    /// Stop granularity. Full, half and third stops are supported.
    pub granularity: StopGranularity,
}

impl ApertureRange {
    pub const fn new(min: f64, max: f64, granularity: StopGranularity) -> Self {
        Self {
            min,
            max,
            granularity,
        }
    }

    /// Canonical f-numbers inside this range.
    pub fn stops(&self) -> impl Iterator<Item = f64> {
        tables::stops_within(tables::aperture_stops(self.granularity), self.min, self.max)
    }

    fn validate(&self) -> Result<(), ExposureError> {
        validate_bounds(Scale::Aperture, self.min, self.max)?;
        if self.stops().next().is_none() {
            return Err(ExposureError::EmptyScale {
                scale: Scale::Aperture,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for ApertureRange {
    fn default() -> Self {
        Self::new(F_STOPS_FULL[0], F_STOPS_FULL[F_STOPS_FULL.len() - 1], StopGranularity::Third)
    }
}

/// Shutter range in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShutterRange {
    /// Fastest shutter time.
    pub min: f64,
    /// Slowest shutter time.
    pub max: f64,
    /// Stop granularity. Only full and third stops are supported.
    pub granularity: StopGranularity,
}

impl ShutterRange {
    pub const fn new(min: f64, max: f64, granularity: StopGranularity) -> Self {
        Self {
            min,
            max,
            granularity,
        }
    }

    /// Canonical shutter times inside this range.
    ///
    /// Fails for granularities that have no shutter table.
    pub fn stops(&self) -> Result<impl Iterator<Item = f64>, ExposureError> {
        let table = tables::shutter_stops(self.granularity)?;
        Ok(tables::stops_within(table, self.min, self.max))
    }

    fn validate(&self) -> Result<(), ExposureError> {
        validate_bounds(Scale::Shutter, self.min, self.max)?;
        if self.stops()?.next().is_none() {
            return Err(ExposureError::EmptyScale {
                scale: Scale::Shutter,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for ShutterRange {
    fn default() -> Self {
        Self::new(SHUTTERS_FULL[0], SHUTTERS_FULL[SHUTTERS_FULL.len() - 1], StopGranularity::Third)
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub aperture: ApertureRange,
    pub shutter: ShutterRange,
}

impl EngineConfig {
    /// Build from raw integer granularity keys, as a settings screen would
    /// store them.
    pub fn from_keys(
        min_f: f64,
        max_f: f64,
        step_f: u8,
        min_t: f64,
        max_t: f64,
        step_t: u8,
    ) -> Result<Self, ExposureError> {
        let shutter_granularity = StopGranularity::try_from(step_t)?;
        if shutter_granularity == StopGranularity::Half {
            return Err(ExposureError::UnsupportedGranularity {
                scale: Scale::Shutter,
                key: step_t,
            });
        }
        let config = Self {
            aperture: ApertureRange::new(min_f, max_f, StopGranularity::try_from(step_f)?),
            shutter: ShutterRange::new(min_t, max_t, shutter_granularity),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ExposureError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the aperture range, keeping everything else.
    pub fn with_aperture(mut self, min: f64, max: f64) -> Self {
        self.aperture.min = min;
        self.aperture.max = max;
        self
    }

    /// Replace the shutter range, keeping everything else.
    pub fn with_shutter(mut self, min: f64, max: f64) -> Self {
        self.shutter.min = min;
        self.shutter.max = max;
        self
    }

    pub fn validate(&self) -> Result<(), ExposureError> {
        self.aperture.validate()?;
        self.shutter.validate()
    }
}

fn validate_bounds(scale: Scale, min: f64, max: f64) -> Result<(), ExposureError> {
    let ok = min.is_finite() && max.is_finite() && min > 0.0 && min < max;
    if ok {
        Ok(())
    } else {
        Err(ExposureError::InvalidRange { scale, min, max })
    }
}

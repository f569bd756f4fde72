//! The exposure engine: control position ↔ stop conversions and
//! reciprocity-preserving updates of the exposure triangle.
//!
//! # Light value
//! ```text
//! LV = log2(N² / t) + log2(ISO / 100)
//! ```
//! ISO 100 is the reference sensitivity.
//!
//! # Reciprocity
//! Holding LV fixed, a new aperture forces a new shutter time and vice versa:
//! ```text
//! t = ISO × N² / (100 × 2^LV)
//! N = sqrt(100 × t × 2^LV / ISO)
//! ```

pub mod config;
pub mod readout;

use serde::{Deserialize, Serialize};

use crate::error::{ExposureError, Quantity, require_position, require_positive};
use crate::scale::log_scale::LogScale;
use crate::scale::nearest::{format_aperture, format_shutter, nearest_absolute, nearest_relative};
use crate::scale::tables;

use config::EngineConfig;

/// One f-number doubling is two stops of light.
const APERTURE_STOPS_PER_OCTAVE: f64 = 2.0;
/// One shutter time doubling is one stop of light.
const SHUTTER_STOPS_PER_OCTAVE: f64 = 1.0;
/// Reference sensitivity for light values.
const REFERENCE_ISO: f64 = 100.0;

const INITIAL_F_NUMBER: f64 = 8.0;
const INITIAL_SHUTTER: f64 = 1.0 / 100.0;
const INITIAL_ISO: f64 = 100.0;

/// Light value of an exposure triangle.
///
/// Inputs must be positive; the engine validates before calling this.
pub fn light_value(f_number: f64, shutter: f64, iso: f64) -> f64 {
    (f_number * f_number / shutter).log2() + (iso / REFERENCE_ISO).log2()
}

/// A control position resolved onto a stop scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleReading {
    /// Canonical display string, e.g. `"2.8"` or `"1/250"`.
    pub label: String,
    /// The continuous value at the snapped position. Used for downstream math.
    pub value: f64,
    /// The canonical table entry the label was rendered from.
    pub nominal: f64,
}

/// The exposure triangle plus bias, as returned by the setters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureState {
    pub f_number: f64,
    pub shutter: f64,
    pub iso: f64,
    pub bias: Option<f64>,
}

/// Arguments for [`ExposureEngine::set_exposure`]. Unset fields are `None`.
///
/// Exactly three shapes are accepted: all four fields, `f_number` alone, or
/// `shutter` alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureRequest {
    pub f_number: Option<f64>,
    pub shutter: Option<f64>,
    pub iso: Option<f64>,
    pub bias: Option<f64>,
}

impl ExposureRequest {
    /// A complete baseline exposure.
    pub fn baseline(f_number: f64, shutter: f64, iso: f64, bias: f64) -> Self {
        Self {
            f_number: Some(f_number),
            shutter: Some(shutter),
            iso: Some(iso),
            bias: Some(bias),
        }
    }

    pub fn aperture(f_number: f64) -> Self {
        Self {
            f_number: Some(f_number),
            ..Self::default()
        }
    }

    pub fn shutter(shutter: f64) -> Self {
        Self {
            shutter: Some(shutter),
            ..Self::default()
        }
    }

    fn describe(&self) -> String {
        let given: Vec<&str> = [
            ("f_number", self.f_number.is_some()),
            ("shutter", self.shutter.is_some()),
            ("iso", self.iso.is_some()),
            ("bias", self.bias.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, set)| set.then_some(name))
        .collect();
        if given.is_empty() {
            "no fields given".to_string()
        } else {
            format!("got {}", given.join(" + "))
        }
    }
}

/// Result of [`ExposureEngine::drive_aperture`]: everything a caller needs
/// to refresh both controls after the aperture control moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApertureDrive {
    pub aperture: ScaleReading,
    pub shutter_label: String,
    pub shutter_position: f64,
    pub state: ExposureState,
}

/// Stateful exposure calculator.
///
/// Owns the current aperture, shutter time, ISO, bias and light value. Every
/// state-changing call either keeps LV consistent with the triangle or holds
/// it fixed on purpose (the reciprocity setters).
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureEngine {
    config: EngineConfig,
    aperture_scale: LogScale,
    shutter_scale: LogScale,
    f_number: f64,
    shutter: f64,
    iso: f64,
    bias: Option<f64>,
    light_value: f64,
}

impl Default for ExposureEngine {
    /// Full canonical span at third stops, starting at f/8, 1/100 s, ISO 100.
    fn default() -> Self {
        let config = EngineConfig::default();
        Self::from_validated(config)
    }
}

impl ExposureEngine {
    /// Validate `config` and build an engine at f/8, 1/100 s, ISO 100.
    pub fn new(config: EngineConfig) -> Result<Self, ExposureError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: EngineConfig) -> Self {
        let aperture_scale = LogScale::new(
            config.aperture.min,
            config.aperture.max,
            APERTURE_STOPS_PER_OCTAVE,
            config.aperture.granularity.divisions(),
        );
        let shutter_scale = LogScale::new(
            config.shutter.min,
            config.shutter.max,
            SHUTTER_STOPS_PER_OCTAVE,
            config.shutter.granularity.divisions(),
        );
        tracing::info!(
            "exposure engine: f/{}..f/{} in {}, {}s..{}s in {}",
            config.aperture.min,
            config.aperture.max,
            config.aperture.granularity.label(),
            config.shutter.min,
            config.shutter.max,
            config.shutter.granularity.label(),
        );
        Self {
            config,
            aperture_scale,
            shutter_scale,
            f_number: INITIAL_F_NUMBER,
            shutter: INITIAL_SHUTTER,
            iso: INITIAL_ISO,
            bias: None,
            light_value: light_value(INITIAL_F_NUMBER, INITIAL_SHUTTER, INITIAL_ISO),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn f_number(&self) -> f64 {
        self.f_number
    }

    pub fn shutter(&self) -> f64 {
        self.shutter
    }

    pub fn iso(&self) -> f64 {
        self.iso
    }

    pub fn bias(&self) -> Option<f64> {
        self.bias
    }

    /// Current light value. Bias does not enter into it.
    pub fn light_value(&self) -> f64 {
        self.light_value
    }

    pub fn state(&self) -> ExposureState {
        ExposureState {
            f_number: self.f_number,
            shutter: self.shutter,
            iso: self.iso,
            bias: self.bias,
        }
    }

    // ── Aperture ─────────────────────────────────────────────────

    /// Map a control position onto the aperture scale.
    ///
    /// The position snaps to the nearest click; the resulting f-number is
    /// stored and LV recomputed. The label is the closest canonical stop by
    /// absolute distance.
    pub fn position_to_aperture(&mut self, x: f64) -> Result<ScaleReading, ExposureError> {
        let reading = self.read_aperture(x)?;
        self.f_number = reading.value;
        self.recompute_light_value();
        tracing::debug!(
            "aperture x={x:.3} -> f/{} ({:.4}), LV {:.2}",
            reading.label,
            reading.value,
            self.light_value
        );
        Ok(reading)
    }

    /// Continuous inverse of [`position_to_aperture`](Self::position_to_aperture),
    /// clamped to `[0, 1]`.
    pub fn aperture_to_position(&self, f_number: f64) -> Result<f64, ExposureError> {
        let f_number = require_positive(Quantity::FNumber, f_number)?;
        Ok(self.aperture_scale.position_of(f_number))
    }

    /// Canonical label for the current f-number.
    pub fn display_aperture(&self) -> String {
        let nominal = self.nearest_aperture(self.f_number);
        self.aperture_label(nominal)
    }

    fn read_aperture(&self, x: f64) -> Result<ScaleReading, ExposureError> {
        let x = require_position(x)?;
        let value = self.aperture_scale.value_at(x);
        let nominal = self.nearest_aperture(value);
        Ok(ScaleReading {
            label: self.aperture_label(nominal),
            value,
            nominal,
        })
    }

    fn nearest_aperture(&self, f_number: f64) -> f64 {
        // Config validation guarantees at least one stop in range.
        nearest_absolute(self.config.aperture.stops(), f_number).unwrap_or(f_number)
    }

    /// The table literal for a stop, e.g. `"5.0"` rather than `"5"`.
    fn aperture_label(&self, nominal: f64) -> String {
        tables::aperture_label(self.config.aperture.granularity, nominal)
            .map_or_else(|| format_aperture(nominal), str::to_owned)
    }

    // ── Shutter ──────────────────────────────────────────────────

    /// Map a control position onto the shutter scale.
    ///
    /// Same structure as the aperture mapping, one stop per octave, with the
    /// label chosen by relative distance.
    pub fn position_to_shutter(&mut self, x: f64) -> Result<ScaleReading, ExposureError> {
        let x = require_position(x)?;
        let value = self.shutter_scale.value_at(x);
        let nominal = self.nearest_shutter(value);
        let reading = ScaleReading {
            label: format_shutter(nominal),
            value,
            nominal,
        };
        self.shutter = value;
        self.recompute_light_value();
        tracing::debug!(
            "shutter x={x:.3} -> {}s ({:.6}), LV {:.2}",
            reading.label,
            reading.value,
            self.light_value
        );
        Ok(reading)
    }

    /// Continuous inverse of [`position_to_shutter`](Self::position_to_shutter),
    /// clamped to `[0, 1]`.
    pub fn shutter_to_position(&self, shutter: f64) -> Result<f64, ExposureError> {
        let shutter = require_positive(Quantity::ShutterTime, shutter)?;
        Ok(self.shutter_scale.position_of(shutter))
    }

    /// Canonical label for the current shutter time, e.g. after a
    /// reciprocity recompute moved it between table entries.
    pub fn display_shutter(&self) -> String {
        format_shutter(self.nearest_shutter(self.shutter))
    }

    fn nearest_shutter(&self, shutter: f64) -> f64 {
        self.config
            .shutter
            .stops()
            .ok()
            .and_then(|stops| nearest_relative(stops, shutter))
            .unwrap_or(shutter)
    }

    // ── Reciprocity ──────────────────────────────────────────────

    /// Apply one of the three accepted update shapes.
    ///
    /// Any other combination is rejected with
    /// [`ExposureError::AmbiguousCall`] and leaves the state untouched.
    pub fn set_exposure(&mut self, request: ExposureRequest) -> Result<ExposureState, ExposureError> {
        match request {
            ExposureRequest {
                f_number: Some(f),
                shutter: Some(t),
                iso: Some(iso),
                bias: Some(bias),
            } => self.set_baseline(f, t, iso, bias),
            ExposureRequest {
                f_number: Some(f),
                shutter: None,
                iso: None,
                bias: None,
            } => self.set_aperture(f),
            ExposureRequest {
                f_number: None,
                shutter: Some(t),
                iso: None,
                bias: None,
            } => self.set_shutter(t),
            _ => {
                let reason = request.describe();
                tracing::warn!("rejected exposure update: {reason}");
                Err(ExposureError::AmbiguousCall(format!(
                    "expected all of f_number, shutter, iso and bias, or f_number alone, \
                     or shutter alone; {reason}"
                )))
            }
        }
    }

    /// Adopt a complete exposure verbatim and recompute LV.
    pub fn set_baseline(
        &mut self,
        f_number: f64,
        shutter: f64,
        iso: f64,
        bias: f64,
    ) -> Result<ExposureState, ExposureError> {
        let f_number = require_positive(Quantity::FNumber, f_number)?;
        let shutter = require_positive(Quantity::ShutterTime, shutter)?;
        let iso = require_positive(Quantity::Iso, iso)?;
        if !bias.is_finite() {
            return Err(ExposureError::NonFiniteBias(bias));
        }

        self.f_number = f_number;
        self.shutter = shutter;
        self.iso = iso;
        self.bias = Some(bias);
        self.recompute_light_value();
        tracing::debug!(
            "baseline f/{f_number} {shutter}s ISO {iso} bias {bias} -> LV {:.2}",
            self.light_value
        );
        Ok(self.state())
    }

    /// Adopt a new f-number and recompute the shutter time at fixed LV.
    pub fn set_aperture(&mut self, f_number: f64) -> Result<ExposureState, ExposureError> {
        let f_number = require_positive(Quantity::FNumber, f_number)?;
        let shutter = self.iso * f_number * f_number / (REFERENCE_ISO * self.light_value.exp2());
        let shutter = require_positive(Quantity::ShutterTime, shutter)?;

        self.f_number = f_number;
        self.shutter = shutter;
        tracing::debug!("aperture f/{f_number} at LV {:.2} -> {shutter:.6}s", self.light_value);
        Ok(self.state())
    }

    /// Adopt a new shutter time and recompute the f-number at fixed LV.
    pub fn set_shutter(&mut self, shutter: f64) -> Result<ExposureState, ExposureError> {
        let shutter = require_positive(Quantity::ShutterTime, shutter)?;
        let f_number = (REFERENCE_ISO * shutter * self.light_value.exp2() / self.iso).sqrt();
        let f_number = require_positive(Quantity::FNumber, f_number)?;

        self.f_number = f_number;
        self.shutter = shutter;
        tracing::debug!("shutter {shutter}s at LV {:.2} -> f/{f_number:.3}", self.light_value);
        Ok(self.state())
    }

    /// The aperture control moved: snap it to a canonical stop and let the
    /// shutter follow at the current LV.
    ///
    /// Unlike [`position_to_aperture`](Self::position_to_aperture), LV is
    /// held rather than recomputed, so the shutter time absorbs the change.
    pub fn drive_aperture(&mut self, x: f64) -> Result<ApertureDrive, ExposureError> {
        let aperture = self.read_aperture(x)?;
        let state = self.set_aperture(aperture.nominal)?;
        let shutter_position = self.shutter_to_position(state.shutter)?;
        Ok(ApertureDrive {
            aperture,
            shutter_label: self.display_shutter(),
            shutter_position,
            state,
        })
    }

    fn recompute_light_value(&mut self) {
        self.light_value = light_value(self.f_number, self.shutter, self.iso);
    }
}

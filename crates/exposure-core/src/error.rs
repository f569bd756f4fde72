//! Error taxonomy for the exposure engine.
//!
//! Configuration errors fail fast at construction. Domain errors and
//! rejected setter calls leave the engine state untouched.

use std::fmt;

/// Which stop scale an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    Aperture,
    Shutter,
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Aperture => write!(f, "aperture"),
            Self::Shutter => write!(f, "shutter"),
        }
    }
}

/// A physical exposure quantity fed into the logarithmic math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    FNumber,
    ShutterTime,
    Iso,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FNumber => write!(f, "f-number"),
            Self::ShutterTime => write!(f, "shutter time"),
            Self::Iso => write!(f, "ISO"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExposureError {
    #[error("unknown stop granularity key: {0} (expected 1, 2 or 3)")]
    UnknownGranularity(u8),

    #[error("{scale} scale does not support granularity key {key}")]
    UnsupportedGranularity { scale: Scale, key: u8 },

    #[error("invalid {scale} range: min {min} must be positive and below max {max}")]
    InvalidRange { scale: Scale, min: f64, max: f64 },

    #[error("{scale} range {min}..={max} contains no canonical stop")]
    EmptyScale { scale: Scale, min: f64, max: f64 },

    #[error("invalid engine config: {0}")]
    ConfigParse(String),

    #[error("{quantity} must be a positive finite number, got {value}")]
    NonPositive { quantity: Quantity, value: f64 },

    #[error("control position must be finite, got {0}")]
    NonFinitePosition(f64),

    #[error("exposure bias must be finite, got {0}")]
    NonFiniteBias(f64),

    #[error("unsupported exposure update: {0}")]
    AmbiguousCall(String),
}

impl ExposureError {
    /// Raised while building or validating an [`EngineConfig`](crate::EngineConfig).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownGranularity(_)
                | Self::UnsupportedGranularity { .. }
                | Self::InvalidRange { .. }
                | Self::EmptyScale { .. }
                | Self::ConfigParse(_)
        )
    }

    /// Raised for inputs outside the domain of the logarithmic math.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Self::NonPositive { .. } | Self::NonFinitePosition(_) | Self::NonFiniteBias(_)
        )
    }
}

impl From<serde_json::Error> for ExposureError {
    fn from(err: serde_json::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}

/// Reject zero, negative, NaN and infinite values before they reach `log2`.
pub(crate) fn require_positive(quantity: Quantity, value: f64) -> Result<f64, ExposureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ExposureError::NonPositive { quantity, value })
    }
}

pub(crate) fn require_position(x: f64) -> Result<f64, ExposureError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(ExposureError::NonFinitePosition(x))
    }
}

//! Discrete stop scales: canonical tables, log-domain quantization, and
//! nearest-stop selection with display formatting.

pub mod log_scale;
pub mod nearest;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::error::ExposureError;

/// How finely a scale is divided between doublings.
///
/// Serialized as its integer key (`1`, `2` or `3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum StopGranularity {
    /// Full stops.
    Full,
    /// Half stops.
    Half,
    /// Third stops.
    Third,
}

impl StopGranularity {
    /// Number of increments per stop.
    pub const fn divisions(self) -> u8 {
        match self {
            Self::Full => 1,
            Self::Half => 2,
            Self::Third => 3,
        }
    }

    /// Human-readable label for UI menus.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "full stops",
            Self::Half => "half stops",
            Self::Third => "third stops",
        }
    }
}

impl TryFrom<u8> for StopGranularity {
    type Error = ExposureError;

    fn try_from(key: u8) -> Result<Self, Self::Error> {
        match key {
            1 => Ok(Self::Full),
            2 => Ok(Self::Half),
            3 => Ok(Self::Third),
            other => Err(ExposureError::UnknownGranularity(other)),
        }
    }
}

impl From<StopGranularity> for u8 {
    fn from(granularity: StopGranularity) -> Self {
        granularity.divisions()
    }
}

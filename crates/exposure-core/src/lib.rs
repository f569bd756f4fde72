//! Exposure Core — domain layer for the exposure calculator.
//!
//! Maps control positions onto classic f-stop and shutter-speed scales and
//! keeps the exposure triangle (aperture, shutter time, ISO) consistent
//! through light-value bookkeeping. No UI or framework dependencies.

pub mod controls;
pub mod engine;
pub mod error;
pub mod scale;
pub mod shared;

// Re-exports for convenience.
pub use controls::{Control, ControlLocks};
pub use engine::config::{ApertureRange, EngineConfig, ShutterRange};
pub use engine::readout::ExposureReadout;
pub use engine::{
    ApertureDrive, ExposureEngine, ExposureRequest, ExposureState, ScaleReading, light_value,
};
pub use error::ExposureError;
pub use scale::StopGranularity;
pub use shared::SharedEngine;

//! Message contracts between the exposure engine and a UI.
//!
//! One JSON object per line, using the `#[serde(tag = "type", content = "data")]`
//! shape, e.g. `{"type":"DriveAperture","data":{"position":0.4}}`.

use serde::{Deserialize, Serialize};

use exposure_core::{Control, ExposureReadout, ExposureRequest, ExposureState};

/// Messages from the engine to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum EngineToUi {
    /// Full state snapshot after every handled command.
    State {
        /// Display strings and light value for the status line.
        readout: ExposureReadout,
        /// Rendered status line, e.g. `f/5.6 1/100s ISO 100 EV=11.6`.
        label: String,
        /// Raw exposure triangle.
        state: ExposureState,
        /// Where the aperture control should sit.
        aperture_position: f64,
        /// Where the shutter control should sit.
        shutter_position: f64,
        /// Controls the user may drive, most recent first.
        enabled: Vec<Control>,
    },

    /// A command was rejected. The previous state still holds.
    Error {
        /// Error description.
        message: String,
    },
}

/// Messages from the UI to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiToEngine {
    /// Request a fresh snapshot.
    RequestState,

    /// The aperture control moved; LV follows the new aperture.
    SetAperturePosition {
        /// Control position in `[0, 1]`.
        position: f64,
    },

    /// The shutter control moved; LV follows the new shutter time.
    SetShutterPosition {
        /// Control position in `[0, 1]`.
        position: f64,
    },

    /// The aperture control moved; shutter follows at fixed LV.
    DriveAperture {
        /// Control position in `[0, 1]`.
        position: f64,
    },

    /// Apply a reciprocity update.
    SetExposure {
        /// Fields to set; see [`ExposureRequest`] for accepted shapes.
        request: ExposureRequest,
    },

    /// A control's lock switch was pressed.
    Touch {
        /// The control that was touched.
        control: Control,
    },
}

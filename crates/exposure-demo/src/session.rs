//! Command handling. This is the only place engine state changes.

use exposure_core::{Control, ControlLocks, ExposureEngine, ExposureError, ExposureReadout};

use crate::ipc::{EngineToUi, UiToEngine};

/// An engine plus the lock state of its three controls.
pub struct Session {
    engine: ExposureEngine,
    locks: ControlLocks,
}

impl Session {
    pub fn new(engine: ExposureEngine) -> Self {
        Self {
            engine,
            locks: ControlLocks::default(),
        }
    }

    pub fn engine(&self) -> &ExposureEngine {
        &self.engine
    }

    /// Apply one command and reply with the new state, or with the error
    /// while the previous state stays in place.
    pub fn handle(&mut self, command: UiToEngine) -> EngineToUi {
        match self.apply(command).and_then(|()| self.snapshot()) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!("command rejected: {e}");
                EngineToUi::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    fn apply(&mut self, command: UiToEngine) -> Result<(), ExposureError> {
        match command {
            UiToEngine::RequestState => {}
            UiToEngine::SetAperturePosition { position } => {
                self.engine.position_to_aperture(position)?;
                self.locks.touch(Control::Aperture);
            }
            UiToEngine::SetShutterPosition { position } => {
                self.engine.position_to_shutter(position)?;
                self.locks.touch(Control::Shutter);
            }
            UiToEngine::DriveAperture { position } => {
                let drive = self.engine.drive_aperture(position)?;
                tracing::debug!(
                    "f/{} moved shutter to {}s (x={:.3})",
                    drive.aperture.label,
                    drive.shutter_label,
                    drive.shutter_position
                );
                self.locks.touch(Control::Aperture);
            }
            UiToEngine::SetExposure { request } => {
                self.engine.set_exposure(request)?;
            }
            UiToEngine::Touch { control } => self.locks.touch(control),
        }
        Ok(())
    }

    pub fn snapshot(&self) -> Result<EngineToUi, ExposureError> {
        let readout = ExposureReadout::capture(&self.engine);
        let state = self.engine.state();
        Ok(EngineToUi::State {
            label: readout.to_string(),
            readout,
            state,
            aperture_position: self.engine.aperture_to_position(state.f_number)?,
            shutter_position: self.engine.shutter_to_position(state.shutter)?,
            enabled: self.locks.enabled().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exposure_core::{EngineConfig, ExposureRequest};

    fn session() -> Session {
        let config = EngineConfig::default().with_aperture(2.0, 32.0);
        let mut engine = ExposureEngine::new(config).unwrap();
        engine.set_baseline(5.6, 0.01, 100.0, 0.0).unwrap();
        Session::new(engine)
    }

    #[test]
    fn test_request_state_reports_label() {
        let mut session = session();
        match session.handle(UiToEngine::RequestState) {
            EngineToUi::State { label, enabled, .. } => {
                assert_eq!(label, "f/5.6 1/100s ISO 100 EV=11.6");
                assert!(enabled.is_empty());
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_drive_aperture_keeps_light_value() {
        let mut session = session();
        let lv = session.engine().light_value();
        let x = session.engine().aperture_to_position(8.0).unwrap();
        match session.handle(UiToEngine::DriveAperture { position: x }) {
            EngineToUi::State {
                readout, enabled, ..
            } => {
                assert_eq!(readout.aperture, "8");
                assert_eq!(readout.shutter, "1/50");
                assert_eq!(readout.light_value, lv);
                assert_eq!(enabled, vec![Control::Aperture]);
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_positions_follow_engine() {
        let mut session = session();
        let reply = session.handle(UiToEngine::SetExposure {
            request: ExposureRequest::baseline(32.0, 1.0 / 8000.0, 100.0, 0.0),
        });
        assert!(matches!(reply, EngineToUi::State { .. }));
        match session.snapshot().unwrap() {
            EngineToUi::State {
                aperture_position,
                shutter_position,
                ..
            } => {
                assert_eq!(aperture_position, 1.0);
                assert_eq!(shutter_position, 0.0);
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_rejected_command_keeps_state() {
        let mut session = session();
        let before = session.engine().state();
        let reply = session.handle(UiToEngine::SetExposure {
            request: ExposureRequest::default(),
        });
        assert!(matches!(reply, EngineToUi::Error { .. }));
        assert_eq!(session.engine().state(), before);
    }

    #[test]
    fn test_commands_parse_from_json() {
        let command: UiToEngine =
            serde_json::from_str(r#"{"type":"SetExposure","data":{"request":{"f_number":4.0}}}"#)
                .unwrap();
        let mut session = session();
        assert!(matches!(session.handle(command), EngineToUi::State { .. }));
        assert_eq!(session.engine().f_number(), 4.0);

        let command: UiToEngine =
            serde_json::from_str(r#"{"type":"Touch","data":{"control":"Iso"}}"#).unwrap();
        assert!(matches!(command, UiToEngine::Touch { control: Control::Iso }));
    }
}

//! Which two of the three exposure controls the user is driving.
//!
//! Aperture, shutter and ISO are tied together by the light value, so only
//! two can be set freely. The two most recently touched controls are
//! enabled; the remaining one is derived.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Aperture,
    Shutter,
    Iso,
}

impl Control {
    pub const ALL: [Control; 3] = [Control::Aperture, Control::Shutter, Control::Iso];
}

/// The last two distinct controls touched, most recent first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlLocks {
    recent: [Option<Control>; 2],
}

impl ControlLocks {
    /// Start with `first` and `second` enabled, `second` the most recent.
    pub fn new(first: Control, second: Control) -> Self {
        let mut locks = Self::default();
        locks.touch(first);
        locks.touch(second);
        locks
    }

    /// Record a touch. Touching the most recent control again changes nothing.
    pub fn touch(&mut self, control: Control) {
        if self.recent[0] == Some(control) {
            return;
        }
        self.recent = [Some(control), self.recent[0]];
        tracing::debug!("control touched: {control:?}, enabled {:?}", self.recent);
    }

    pub fn is_enabled(&self, control: Control) -> bool {
        self.recent.contains(&Some(control))
    }

    /// Enabled controls, most recent first.
    pub fn enabled(&self) -> impl Iterator<Item = Control> + '_ {
        self.recent.iter().flatten().copied()
    }

    /// The control the engine computes, once two others have been touched.
    pub fn derived(&self) -> Option<Control> {
        match self.recent {
            [Some(_), Some(_)] => Control::ALL.into_iter().find(|c| !self.is_enabled(*c)),
            _ => None,
        }
    }
}

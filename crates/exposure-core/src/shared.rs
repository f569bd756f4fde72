//! Thread-shareable engine handle.
//!
//! The engine mutates several fields together, so one lock guards the whole
//! state and every access goes through a closure.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::engine::ExposureEngine;

#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<ExposureEngine>>,
}

impl SharedEngine {
    pub fn new(engine: ExposureEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Run `f` with exclusive access to the engine.
    pub fn with<R>(&self, f: impl FnOnce(&mut ExposureEngine) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut *guard)
    }

    /// Copy of the current engine.
    pub fn snapshot(&self) -> ExposureEngine {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let shared = SharedEngine::default();
        let other = shared.clone();
        shared
            .with(|engine| engine.set_baseline(4.0, 0.01, 100.0, 0.0))
            .unwrap();
        assert_eq!(other.snapshot().f_number(), 4.0);
    }

    #[test]
    fn test_concurrent_updates_keep_light_value() {
        let shared = SharedEngine::default();
        shared
            .with(|engine| engine.set_baseline(4.0, 0.01, 100.0, 0.0))
            .unwrap();
        let lv = shared.snapshot().light_value();

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for step in 0..50 {
                        let f = 2.0 + f64::from(i * 50 + step) * 0.01;
                        shared.with(|engine| engine.set_aperture(f)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let engine = shared.snapshot();
        let recomputed =
            crate::engine::light_value(engine.f_number(), engine.shutter(), engine.iso());
        assert!((recomputed - lv).abs() < 1e-9);
    }
}

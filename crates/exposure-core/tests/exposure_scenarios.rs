//! End-to-end behavior of the exposure engine through its public API.
//!
//! Run with: `cargo test -p exposure-core`

use exposure_core::{
    EngineConfig, ExposureEngine, ExposureError, ExposureRequest, StopGranularity, light_value,
};

fn lens_engine() -> ExposureEngine {
    let config = EngineConfig::from_keys(2.0, 4.0, 3, 1.0 / 500.0, 1.0 / 125.0, 3)
        .expect("valid config");
    ExposureEngine::new(config).expect("engine")
}

/// Evenly spaced positions across the unit interval.
fn positions() -> impl Iterator<Item = f64> {
    (0..=200).map(|i| i as f64 / 200.0)
}

#[test]
fn test_aperture_scenarios() {
    let mut engine = lens_engine();
    let expected = [(0.0, "2", 2.0), (0.5, "2.8", 2.83), (1.0, "4", 4.0)];
    for (x, label, value) in expected {
        let reading = engine.position_to_aperture(x).unwrap();
        assert_eq!(reading.label, label, "x={x}");
        assert!(
            (reading.value - value).abs() < 0.01,
            "x={x}: {:.4} vs {value}",
            reading.value
        );
    }
}

#[test]
fn test_shutter_scenarios() {
    let mut engine = lens_engine();
    for (x, label) in [(0.0, "1/500"), (0.5, "1/250"), (1.0, "1/125")] {
        assert_eq!(engine.position_to_shutter(x).unwrap().label, label, "x={x}");
    }
}

#[test]
fn test_forward_mappings_are_monotone() {
    let mut engine = ExposureEngine::default();
    let mut last_f = 0.0;
    let mut last_t = 0.0;
    for x in positions() {
        let f = engine.position_to_aperture(x).unwrap().value;
        let t = engine.position_to_shutter(x).unwrap().value;
        assert!(f >= last_f, "aperture not monotone at x={x}");
        assert!(t >= last_t, "shutter not monotone at x={x}");
        last_f = f;
        last_t = t;
    }
}

#[test]
fn test_inverse_is_within_one_click() {
    let mut engine = ExposureEngine::default();
    let config = *engine.config();
    // Third-stop f/0.7..f/90 has 42 clicks; 1/8000..60 s has 57.
    let aperture_click = 1.0 / 42.0;
    let shutter_click = 1.0 / 57.0;
    for x in positions() {
        let f = engine.position_to_aperture(x).unwrap().value;
        let back = engine.aperture_to_position(f).unwrap();
        assert!((back - x).abs() <= aperture_click, "aperture x={x} back={back}");

        let t = engine.position_to_shutter(x).unwrap().value;
        let back = engine.shutter_to_position(t).unwrap();
        assert!((back - x).abs() <= shutter_click, "shutter x={x} back={back}");
    }

    assert_eq!(engine.aperture_to_position(config.aperture.min).unwrap(), 0.0);
    assert_eq!(engine.aperture_to_position(config.aperture.max).unwrap(), 1.0);
    assert_eq!(engine.shutter_to_position(config.shutter.min).unwrap(), 0.0);
    assert_eq!(engine.shutter_to_position(config.shutter.max).unwrap(), 1.0);
}

#[test]
fn test_endpoints_round_trip() {
    let mut engine = lens_engine();
    let f = engine.position_to_aperture(0.0).unwrap().value;
    assert_eq!(engine.aperture_to_position(f).unwrap(), 0.0);
    let f = engine.position_to_aperture(1.0).unwrap().value;
    assert!((engine.aperture_to_position(f).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_reciprocity_aperture_change() {
    let mut engine = ExposureEngine::default();
    engine
        .set_exposure(ExposureRequest::baseline(4.0, 0.01, 100.0, 0.0))
        .unwrap();
    let lv = engine.light_value();

    let state = engine.set_exposure(ExposureRequest::aperture(5.6)).unwrap();
    assert!((state.shutter - 0.02).abs() / 0.02 < 0.1, "t={}", state.shutter);
    let after = light_value(state.f_number, state.shutter, state.iso);
    assert!((after - lv).abs() < 1e-9);
}

#[test]
fn test_reciprocity_shutter_change() {
    let mut engine = ExposureEngine::default();
    engine
        .set_exposure(ExposureRequest::baseline(4.0, 0.01, 100.0, 0.0))
        .unwrap();

    let state = engine
        .set_exposure(ExposureRequest::shutter(1.0 / 200.0))
        .unwrap();
    assert!((state.f_number - 2.8).abs() / 2.8 < 0.1, "f={}", state.f_number);
}

#[test]
fn test_unrecognized_update_is_rejected() {
    let mut engine = ExposureEngine::default();
    let before = engine.state();
    let err = engine
        .set_exposure(ExposureRequest {
            iso: Some(800.0),
            ..ExposureRequest::default()
        })
        .unwrap_err();
    assert!(matches!(err, ExposureError::AmbiguousCall(_)));
    assert_eq!(engine.state(), before);
}

#[test]
fn test_bad_configuration_fails_fast() {
    assert!(EngineConfig::from_keys(4.0, 2.0, 3, 0.002, 0.008, 3)
        .unwrap_err()
        .is_configuration());
    assert!(EngineConfig::from_keys(2.0, 4.0, 0, 0.002, 0.008, 3)
        .unwrap_err()
        .is_configuration());

    let mut config = EngineConfig::default();
    config.shutter.granularity = StopGranularity::Half;
    assert!(ExposureEngine::new(config).unwrap_err().is_configuration());
}

#[test]
fn test_config_from_json_drives_engine() {
    let config = EngineConfig::from_json(
        r#"{
            "aperture": { "min": 2.0, "max": 32.0, "granularity": 1 },
            "shutter": { "min": 0.001, "max": 1.0, "granularity": 1 }
        }"#,
    )
    .unwrap();
    let mut engine = ExposureEngine::new(config).unwrap();
    assert_eq!(engine.position_to_aperture(0.0).unwrap().label, "2");
    assert_eq!(engine.position_to_aperture(1.0).unwrap().label, "32");
    assert_eq!(engine.position_to_shutter(0.0).unwrap().label, "1/1000");
    assert_eq!(engine.position_to_shutter(1.0).unwrap().label, "1.0");
}

//! Shared helpers for the integration tests
//!
//! Provides:
//! - A physics-aware echo generator (distance + temperature → echo µs)
//! - A ready-to-measure sensor on fake hardware
//! - Pre-built ranging scenarios

#![allow(dead_code)]

pub mod scenarios;

use hcsr04_core::{
    calibration::sound_speed_from_temperature,
    mock::{FakeDelay, FakeEcho, FakeTrigger},
    Hcsr04, SensorConfig,
};

/// Sensor type used throughout the integration tests
pub type TestSensor = Hcsr04<FakeTrigger, FakeEcho, FakeDelay>;

/// Echo length (µs) a target at `distance_cm` produces in air at `temp_c`
///
/// Uses the same linear speed model as the driver, rounded to whole µs the
/// way a hardware timer would.
pub fn echo_for_distance(distance_cm: f32, temp_c: i16) -> u32 {
    let speed = sound_speed_from_temperature(temp_c) as f32;
    (distance_cm * 2.0 * 1_000_000.0 / speed + 0.5) as u32
}

/// Sensor built from `config`, initialised, replaying `durations`
pub fn ready_sensor(durations: &[u32], config: SensorConfig) -> TestSensor {
    let mut sensor = Hcsr04::new(
        FakeTrigger::new(),
        FakeEcho::with_durations(durations),
        FakeDelay::new(),
        config,
    )
    .expect("default calibration is valid");
    sensor.init().expect("fake trigger never fails");
    sensor
}

/// Compare distances with the sensor's 0.3 cm resolution
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 0.3,
        "distance {actual} cm, expected {expected} cm"
    );
}

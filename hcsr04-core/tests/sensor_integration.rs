//! Integration tests for the complete measurement pipeline
//!
//! Tests the data flow from trigger and echo timing through classification,
//! median selection and temperature-compensated conversion.

mod common;

use embedded_hal::digital::PinState;
use hcsr04_core::{
    constants::{ECHO_DELAY_MS, OUT_OF_RANGE_US, TRIGGER_PULSE_US},
    echo::PollingEcho,
    mock::{FakeDelay, FakeEcho, FakePinError, FakeTrigger, SimClock, SimEchoLine},
    Hcsr04, Reading, SensorConfig, SensorError, SettlingDelay,
};

use common::{
    assert_close, echo_for_distance, ready_sensor,
    scenarios::{Expected, Scenarios},
};

#[test]
fn test_scenarios_through_median_filter() {
    for scenario in Scenarios::all() {
        let config = SensorConfig::default().with_temperature_c(scenario.temperature_c);
        let mut sensor = ready_sensor(&scenario.durations, config);

        let reading = sensor
            .get_median_filter_distance()
            .unwrap_or_else(|e| panic!("{}: {:?}", scenario.name, e));

        match (scenario.expected, reading) {
            (Expected::Distance(cm), Reading::Valid(measured)) => assert_close(measured, cm),
            (Expected::OutOfRange, Reading::OutOfRange) => {}
            (expected, got) => panic!("{}: expected {:?}, got {:?}", scenario.name, expected, got),
        }
    }
}

#[test]
fn test_room_temperature_end_to_end() {
    let mut sensor = ready_sensor(&[1000], SensorConfig::default());

    let calibration = *sensor.calibration();
    assert_eq!(calibration.sound_speed_cm_per_s(), 34_330);
    assert!((calibration.round_trip_us_per_cm() - 58.27).abs() < 0.02);

    let cm = sensor.get_distance().unwrap().value().unwrap();
    assert!((cm - 17.16).abs() < 0.01);
}

#[test]
fn test_hardware_timeout_reads_out_of_range() {
    let mut sensor = ready_sensor(&[0], SensorConfig::default());
    let reading = sensor.get_distance().unwrap();

    assert_eq!(reading, Reading::OutOfRange);
    assert_eq!(reading.value(), None);
}

#[test]
fn test_temperature_update_changes_distance_not_window() {
    let duration = echo_for_distance(200.0, 30);
    let mut sensor = ready_sensor(&[duration, duration], SensorConfig::default());
    let window = sensor.echo_window();

    // Sound is faster in hot air, so at the default 20°C the target reads short
    let uncompensated = sensor.get_distance().unwrap().value().unwrap();
    assert!(uncompensated < 199.0);

    sensor.set_temperature(30).unwrap();
    let compensated = sensor.get_distance().unwrap().value().unwrap();
    assert_close(compensated, 200.0);

    assert_eq!(sensor.echo_window(), window);
    let expected_rtt = 2_000_000.0 / (33_130.0 + 60.0 * 30.0);
    assert!((sensor.calibration().round_trip_us_per_cm() - expected_rtt).abs() < 1e-3);
}

#[test]
fn test_max_distance_bounds_the_wait() {
    let config = SensorConfig::default().with_max_distance_cm(100);
    let beyond = echo_for_distance(150.0, 20);
    let mut sensor = ready_sensor(&[beyond], config);

    assert_eq!(sensor.get_distance().unwrap(), Reading::OutOfRange);

    let (_, echo, _) = sensor.release();
    assert_eq!(echo.last_request(), Some((PinState::High, 100 * 58)));
}

#[test]
fn test_timeout_ceiling() {
    // 500 cm at 20°C is 29 000 µs, inside the ceiling; extreme cold is not
    let cold = ready_sensor(&[], SensorConfig::default().with_temperature_c(-200).with_max_distance_cm(500));
    assert_eq!(cold.echo_window().timeout_max_us, OUT_OF_RANGE_US);

    let room = ready_sensor(&[], SensorConfig::default().with_max_distance_cm(u16::MAX));
    assert_eq!(room.echo_window().timeout_max_us, 500 * 58);
}

#[test]
fn test_median_timing_budget() {
    let d = echo_for_distance(50.0, 20);
    let mut sensor = ready_sensor(&[d, d, d], SensorConfig::default());
    sensor.get_median_filter_distance().unwrap();

    let (trigger, echo, delay) = sensor.release();
    assert_eq!(echo.remaining(), 0);
    assert_eq!(delay.us_calls(), &[TRIGGER_PULSE_US; 3]);
    assert_eq!(delay.ms_calls(), &[ECHO_DELAY_MS; 2]);
    assert_eq!(
        trigger.edges(),
        &[
            PinState::Low,
            PinState::High, PinState::Low,
            PinState::High, PinState::Low,
            PinState::High, PinState::Low,
        ]
    );
}

#[test]
fn test_strict_config_settles_every_cycle() {
    let d = echo_for_distance(50.0, 20);
    let mut sensor = ready_sensor(&[d, d, d, d], SensorConfig::strict());
    sensor.get_distance().unwrap();
    sensor.get_median_filter_distance().unwrap();

    let (_, _, delay) = sensor.release();
    assert_eq!(delay.ms_calls(), &[ECHO_DELAY_MS; 4]);
}

#[test]
fn test_settling_off_never_waits() {
    let config = SensorConfig::default().with_settling_delay(SettlingDelay::Off);
    let mut sensor = ready_sensor(&[1000, 1000, 1000], config);
    sensor.get_median_filter_distance().unwrap();

    let (_, _, delay) = sensor.release();
    assert!(delay.ms_calls().is_empty());
}

#[test]
fn test_echo_failure_propagates() {
    let mut sensor =
        Hcsr04::with_defaults(FakeTrigger::new(), FakeEcho::failing(), FakeDelay::new()).unwrap();
    sensor.init().unwrap();

    assert_eq!(sensor.get_distance(), Err(SensorError::Pin(FakePinError)));
    assert_eq!(sensor.get_median_filter_distance(), Err(SensorError::Pin(FakePinError)));
}

#[test]
fn test_polling_echo_end_to_end() {
    let now = core::cell::Cell::new(0);
    let rise = 450;
    let fall = rise + echo_for_distance(75.0, 20);
    let echo = PollingEcho::new(SimEchoLine::pulse(&now, rise, fall), SimClock::new(&now, 2));

    let mut sensor =
        Hcsr04::with_defaults(FakeTrigger::new(), echo, FakeDelay::new()).unwrap();
    sensor.init().unwrap();

    // 2 µs polling granularity costs at most 0.05 cm
    let cm = sensor.get_distance().unwrap().value().unwrap();
    assert_close(cm, 75.0);
}

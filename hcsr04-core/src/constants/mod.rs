//! Constants for the HC-SR04 driver
//!
//! Every magic number of the measurement pipeline lives here, grouped by
//! where it comes from:
//! - **Physics**: speed of sound and its temperature coefficient
//! - **Sensor**: module timing and range limits from the datasheet
//!
//! Names carry their unit suffix (`_US`, `_MS`, `_CM`, `_C`).

/// Speed of sound model and unit conversion factors.
pub mod physics;

/// HC-SR04 module timing, range limits and driver defaults.
pub mod sensors;

// Re-export commonly used constants for convenience
pub use physics::{SOUND_SPEED_ZERO_C_CM_PER_S, SOUND_SPEED_CM_PER_S_PER_C};

pub use sensors::{
    RANGE_MIN_CM, RANGE_MAX_CM, OUT_OF_RANGE_US, TRIGGER_PULSE_US, ECHO_DELAY_MS,
    DEFAULT_TEMPERATURE_C, DEFAULT_MAX_DISTANCE_CM,
};

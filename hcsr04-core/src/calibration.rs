//! Temperature calibration and echo timeouts
//!
//! The speed of sound rises by roughly 0.6 m/s per °C, which is a 3.5%
//! distance error between a cold garage and a warm room. Everything that
//! depends on it is derived here once and then reused for every measurement.
//!
//! ## Derived values
//!
//! ```text
//! speed      = 33130 + 60 * T              cm/s
//! round_trip = 2_000_000 / speed           µs per cm (out and back)
//! timeout(d) = clamp(d, 4, 500) * trunc(round_trip)
//! ```
//!
//! The echo timeouts are computed from the calibration at construction time
//! and deliberately stay fixed when the temperature is updated later.

use crate::constants::physics::{
    ROUND_TRIP_LEGS, SOUND_SPEED_CM_PER_S_PER_C, SOUND_SPEED_ZERO_C_CM_PER_S, US_PER_SECOND,
};
use crate::constants::sensors::{OUT_OF_RANGE_US, RANGE_MAX_CM, RANGE_MIN_CM};
use crate::errors::{SensorError, SensorResult};

/// Speed of sound for an air temperature (cm/s)
///
/// Linear model with no bounds on `temp_c`; extreme inputs give implausible
/// speeds, which [`Calibration::from_temperature`] rejects when they reach
/// zero or below.
pub fn sound_speed_from_temperature(temp_c: i16) -> i32 {
    SOUND_SPEED_ZERO_C_CM_PER_S + SOUND_SPEED_CM_PER_S_PER_C * i32::from(temp_c)
}

/// Time for sound to travel 1 cm forward and 1 cm back (µs)
///
/// `speed_cm_per_s` must be positive.
pub fn round_trip_time_per_cm(speed_cm_per_s: i32) -> f32 {
    ROUND_TRIP_LEGS * US_PER_SECOND / speed_cm_per_s as f32
}

/// Conversion constants for one ambient temperature
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Calibration {
    temperature_c: i16,
    sound_speed_cm_per_s: i32,
    round_trip_us_per_cm: f32,
}

impl Calibration {
    /// Calibrate for `temp_c`, rejecting temperatures that leave no positive
    /// speed of sound
    pub fn from_temperature<E>(temp_c: i16) -> SensorResult<Self, E> {
        let speed = sound_speed_from_temperature(temp_c);
        if speed <= 0 {
            log_warn!("Rejected temperature {}°C: sound speed {} cm/s", temp_c, speed);
            return Err(SensorError::InvalidSoundSpeed {
                temperature: temp_c,
                speed,
            });
        }

        Ok(Self {
            temperature_c: temp_c,
            sound_speed_cm_per_s: speed,
            round_trip_us_per_cm: round_trip_time_per_cm(speed),
        })
    }

    /// Temperature this calibration was derived from (°C)
    pub fn temperature_c(&self) -> i16 {
        self.temperature_c
    }

    /// Speed of sound (cm/s)
    pub fn sound_speed_cm_per_s(&self) -> i32 {
        self.sound_speed_cm_per_s
    }

    /// Round-trip time per centimetre (µs)
    pub fn round_trip_us_per_cm(&self) -> f32 {
        self.round_trip_us_per_cm
    }

    /// Echo duration matching `distance_cm`, clamped to the sensor's range
    ///
    /// The round-trip constant is truncated to whole microseconds before the
    /// multiplication, so timeouts are a little shorter than the exact value.
    pub fn echo_timeout_for_distance(&self, distance_cm: u16) -> u32 {
        let distance = distance_cm.clamp(RANGE_MIN_CM, RANGE_MAX_CM);
        u32::from(distance).saturating_mul(self.round_trip_us_per_cm as u32)
    }

    /// Derive the accepted echo window for a maximum working distance
    pub fn echo_window(&self, max_distance_cm: u16) -> EchoWindow {
        let timeout_min_us = self.echo_timeout_for_distance(RANGE_MIN_CM);
        let timeout_max_us = self.echo_timeout_for_distance(max_distance_cm).min(OUT_OF_RANGE_US);

        EchoWindow { timeout_min_us, timeout_max_us }
    }
}

/// Accepted echo durations, exclusive on both ends
///
/// Fixed when the sensor is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EchoWindow {
    /// Echoes this short or shorter are near-field noise (µs)
    pub timeout_min_us: u32,
    /// Echoes this long or longer are out of range; also the wait bound (µs)
    pub timeout_max_us: u32,
}

impl EchoWindow {
    /// `true` when `duration_us` is a plausible echo
    pub fn accepts(&self, duration_us: u32) -> bool {
        duration_us != 0 && duration_us > self.timeout_min_us && duration_us < self.timeout_max_us
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EchoWindow {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "({}us, {}us)", self.timeout_min_us, self.timeout_max_us)
    }
}

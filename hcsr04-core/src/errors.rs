//! Error Types for the Ranging Driver
//!
//! ## What Is (and Is Not) an Error
//!
//! A lost echo is the normal outcome of pointing the sensor at open space, so
//! it is *not* an error: distance operations return
//! [`Reading::OutOfRange`](crate::Reading::OutOfRange) for it. Errors are
//! reserved for conditions the caller has to fix:
//!
//! - `Pin`: the GPIO/timer collaborator failed
//! - `InvalidSoundSpeed`: a temperature drove the calibration to zero or below
//! - `NotInitialized`: a measurement was requested before `init()`
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use hcsr04_core::{Reading, SensorError};
//!
//! fn handle<E: core::fmt::Debug>(result: Result<Reading<f32>, SensorError<E>>) {
//!     match result {
//!         Ok(Reading::Valid(_cm)) => {
//!             // Use the distance
//!         }
//!         Ok(Reading::OutOfRange) => {
//!             // Nothing in range, or the echo was lost; try again later
//!         }
//!         Err(SensorError::InvalidSoundSpeed { .. }) => {
//!             // Temperature input is broken, keep the previous value
//!         }
//!         Err(_) => {
//!             // Wiring or HAL problem
//!         }
//!     }
//! }
//! ```
//!
//! Errors are `Copy` whenever the HAL error is, so they can be returned from
//! tight loops and stored without allocation.

use thiserror_no_std::Error;

/// Result type for driver operations
pub type SensorResult<T, E> = Result<T, SensorError<E>>;

/// Driver errors, generic over the HAL's pin error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError<E> {
    /// Trigger pin, echo pin or echo timer reported a failure
    #[error("Pin error: {0:?}")]
    Pin(E),

    /// Temperature produced a speed of sound that cannot be divided by
    #[error("Temperature {temperature}°C gives invalid sound speed {speed} cm/s")]
    InvalidSoundSpeed {
        /// Temperature that was rejected (°C)
        temperature: i16,
        /// Speed of sound the linear model produced (cm/s)
        speed: i32,
    },

    /// Measurement requested before the pins were initialised
    #[error("Sensor not initialised, call init() first")]
    NotInitialized,
}

impl<E> SensorError<E> {
    /// Convert the pin error type, keeping every other variant
    pub fn map_pin<F>(self, f: impl FnOnce(E) -> F) -> SensorError<F> {
        match self {
            Self::Pin(e) => SensorError::Pin(f(e)),
            Self::InvalidSoundSpeed { temperature, speed } => {
                SensorError::InvalidSoundSpeed { temperature, speed }
            }
            Self::NotInitialized => SensorError::NotInitialized,
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for SensorError<E> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Pin(e) =>
                defmt::write!(fmt, "Pin error: {}", e),
            Self::InvalidSoundSpeed { temperature, speed } =>
                defmt::write!(fmt, "Temperature {}C gives sound speed {} cm/s", temperature, speed),
            Self::NotInitialized =>
                defmt::write!(fmt, "Sensor not initialised"),
        }
    }
}

//! Sensor configuration
//!
//! Runtime switches for the two timing policies, plus the construction-time
//! temperature and working distance.
//!
//! ```rust
//! use hcsr04_core::{SensorConfig, SettlingDelay};
//!
//! // Parking sensor: short range, interrupts off while timing
//! let config = SensorConfig::default()
//!     .with_max_distance_cm(150)
//!     .with_preemption_suppressed(true)
//!     .with_settling_delay(SettlingDelay::PerCycle);
//! assert_eq!(config.max_distance_cm, 150);
//! ```

use crate::constants::sensors::{DEFAULT_MAX_DISTANCE_CM, DEFAULT_TEMPERATURE_C};

/// When to wait for a fading echo before the next trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SettlingDelay {
    /// After every pulse cycle, single readings included
    PerCycle,
    /// Only between the samples of the median filter
    #[default]
    MedianOnly,
    /// Never; the caller paces measurements itself
    Off,
}

/// Construction parameters for [`Hcsr04`](crate::Hcsr04)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorConfig {
    /// Initial ambient temperature (°C)
    pub temperature_c: i16,

    /// Longest distance worth waiting for (cm); shorter means faster misses
    pub max_distance_cm: u16,

    /// Run trigger and echo timing inside a critical section
    ///
    /// Needed where interrupts or other tasks could delay the echo read past
    /// its window. Blocks interrupts for up to the maximum echo timeout.
    pub suppress_preemption: bool,

    /// Echo settling policy
    pub settling_delay: SettlingDelay,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            temperature_c: DEFAULT_TEMPERATURE_C,
            max_distance_cm: DEFAULT_MAX_DISTANCE_CM,
            suppress_preemption: false,
            settling_delay: SettlingDelay::MedianOnly,
        }
    }
}

impl SensorConfig {
    /// Replace the initial temperature (°C)
    pub fn with_temperature_c(mut self, temperature_c: i16) -> Self {
        self.temperature_c = temperature_c;
        self
    }

    /// Replace the maximum working distance (cm)
    pub fn with_max_distance_cm(mut self, max_distance_cm: u16) -> Self {
        self.max_distance_cm = max_distance_cm;
        self
    }

    /// Enable or disable the critical section around timing
    pub fn with_preemption_suppressed(mut self, suppress: bool) -> Self {
        self.suppress_preemption = suppress;
        self
    }

    /// Select the settling policy
    pub fn with_settling_delay(mut self, settling_delay: SettlingDelay) -> Self {
        self.settling_delay = settling_delay;
        self
    }

    /// Settings for an RTOS or busy firmware: timing protected, every cycle
    /// followed by a settling pause
    pub fn strict() -> Self {
        Self {
            suppress_preemption: true,
            settling_delay: SettlingDelay::PerCycle,
            ..Self::default()
        }
    }
}

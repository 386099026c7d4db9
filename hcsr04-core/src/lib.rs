//! Driver core for HC-SR04 class ultrasonic ranging sensors
//!
//! Triggers a sonic burst, times the echo's round trip and converts it into a
//! distance compensated for the ambient temperature.
//! Works with the HC-SR04, HC-SRF05, DYP-ME007 and BLJ-ME007Y modules.
//!
//! Key constraints:
//! - No heap allocation anywhere
//! - Blocking, bounded waits (never longer than the echo ceiling)
//! - Hardware reached only through `embedded-hal` traits
//!
//! ```no_run
//! use hcsr04_core::{Hcsr04, Reading, SensorConfig};
//! # use hcsr04_core::mock::{FakeDelay, FakeEcho, FakeTrigger};
//! # let (trigger, echo, delay) = (FakeTrigger::new(), FakeEcho::new(), FakeDelay::new());
//!
//! let mut sensor = Hcsr04::new(trigger, echo, delay, SensorConfig::default())?;
//! sensor.init()?;
//!
//! match sensor.get_median_filter_distance()? {
//!     Reading::Valid(_cm) => {}, // Obstacle in range
//!     Reading::OutOfRange => {}, // No usable echo
//! }
//! # Ok::<(), hcsr04_core::SensorError<hcsr04_core::mock::FakePinError>>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod calibration;
pub mod config;
pub mod constants;
pub mod distance;
pub mod echo;
pub mod errors;
pub mod median;
pub mod mock;
pub mod pulse;
pub mod reading;
pub mod sensor;
pub mod traits;

// Public API
pub use calibration::Calibration;
pub use config::{SensorConfig, SettlingDelay};
pub use errors::{SensorError, SensorResult};
pub use reading::Reading;
pub use sensor::Hcsr04;
pub use traits::{EchoInput, MicrosClock};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

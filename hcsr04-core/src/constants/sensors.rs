//! Sensor Specifications and Limits
//!
//! Operating characteristics of HC-SR04 compatible modules:
//!
//! ```text
//! Operating voltage     5V (3.3V for the -P variants)
//! Operating current     10..20 mA
//! Working range         4 cm .. 250 cm (500 cm best case)
//! Measuring angle       15°
//! Operating frequency   40 kHz
//! Resolution            0.3 cm
//! Maximum polling rate  20 Hz
//! ```

// ===== RANGE LIMITS =====

/// Shortest distance the driver accepts (cm).
///
/// Below ~1.5 cm the module reports values that jump around 2.5..3.5 cm,
/// so anything closer than this floor is treated as out of range.
///
/// Source: bench measurements against a flat target
pub const RANGE_MIN_CM: u16 = 4;

/// Longest distance the module can resolve under ideal conditions (cm).
///
/// Source: HC-SR04 datasheet
pub const RANGE_MAX_CM: u16 = 500;

/// Echo pulse length the module emits when nothing reflects (µs).
///
/// The module holds the echo line high for 30 000..38 000 µs when the burst
/// is lost. No genuine echo is longer, so this is also the ceiling for the
/// maximum echo timeout.
///
/// Source: HC-SR04 datasheet
pub const OUT_OF_RANGE_US: u32 = 38_000;

// ===== TIMING =====

/// Length of the trigger pulse (µs).
///
/// The module needs at least 10 µs and tolerates up to 100 µs. It starts its
/// 8-cycle 40 kHz burst 300..500 µs after the falling edge.
///
/// Source: HC-SR04 datasheet
pub const TRIGGER_PULSE_US: u32 = 10;

/// Settling time for a fading echo before the next trigger (ms).
///
/// Anything in 30..60 ms works; 50 ms matches the 20 Hz polling limit.
/// A shorter pause lets the previous reflection be read as the next echo.
pub const ECHO_DELAY_MS: u32 = 50;

/// Number of samples the median filter takes.
pub const MEDIAN_SAMPLES: usize = 3;

// ===== DRIVER DEFAULTS =====

/// Ambient temperature assumed when the caller gives none (°C).
pub const DEFAULT_TEMPERATURE_C: i16 = 20;

/// Maximum working distance assumed when the caller gives none (cm).
pub const DEFAULT_MAX_DISTANCE_CM: u16 = 300;

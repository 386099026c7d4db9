//! Echo duration to distance conversion

use crate::{calibration::Calibration, reading::Reading};

/// Convert an echo duration (µs) into a distance (cm)
///
/// `OutOfRange` passes through unchanged; it never becomes a number.
pub fn duration_to_distance(duration: Reading<u32>, calibration: &Calibration) -> Reading<f32> {
    duration.map(|us| us as f32 / calibration.round_trip_us_per_cm())
}

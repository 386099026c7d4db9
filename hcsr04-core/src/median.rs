//! Median-of-three noise filter
//!
//! A single reflection off a chair leg or a stray echo from the previous
//! burst shows up as one wild sample. Taking three independent samples and
//! keeping the middle one rejects a single spike without smoothing away real
//! movement the way an average would.
//!
//! Out-of-range samples take part in the selection: they rank above every
//! valid duration, so one lost echo out of three still yields a distance and
//! two lost echoes yield `OutOfRange`.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{
    config::SettlingDelay,
    constants::sensors::{ECHO_DELAY_MS, MEDIAN_SAMPLES},
    distance::duration_to_distance,
    errors::SensorResult,
    reading::Reading,
    sensor::Hcsr04,
    traits::EchoInput,
};

/// Middle value of three samples
///
/// Fixed comparison tree, no sorting: find the smallest sample, then the
/// smaller of the other two is the median. Ties go to the earlier sample.
pub fn median_of_three<T: PartialOrd + Copy>(samples: [T; MEDIAN_SAMPLES]) -> T {
    let [a, b, c] = samples;

    if a <= b && a <= c {
        if b <= c { b } else { c }
    } else if b <= a && b <= c {
        if a <= c { a } else { c }
    } else if a <= b {
        a
    } else {
        b
    }
}

impl<TRIG, ECHO, D, E> Hcsr04<TRIG, ECHO, D>
where
    TRIG: OutputPin<Error = E>,
    ECHO: EchoInput<Error = E>,
    D: DelayNs,
{
    /// Distance (cm) from the median of three pulse cycles
    ///
    /// With the default [`SettlingDelay::MedianOnly`] policy the sensor pauses
    /// between samples, so a call takes at least 100 ms.
    pub fn get_median_filter_distance(&mut self) -> SensorResult<Reading<f32>, E> {
        let mut samples = [Reading::OutOfRange; MEDIAN_SAMPLES];

        for (i, sample) in samples.iter_mut().enumerate() {
            if i > 0 && self.config.settling_delay == SettlingDelay::MedianOnly {
                self.delay.delay_ms(ECHO_DELAY_MS);
            }
            *sample = self.measure_echo_duration()?;
        }

        let median = median_of_three(samples);
        log_debug!("Median of {:?} is {:?}", samples, median);

        Ok(duration_to_distance(median, &self.calibration))
    }
}

//! Pulse cycle: trigger, time the echo, classify
//!
//! ```text
//! trigger  ──┐10µs┌───────────────────────────────────────
//!            └────┘
//! echo     ────────────── 300..500µs ──┌──── t ────┐──────
//!                                      └───────────┘
//! ```
//!
//! The echo has to be timed a few dozen µs after the trigger falls at the
//! latest, so nothing may run between the falling edge and the start of the
//! echo measurement. With `suppress_preemption` both steps run inside a
//! critical section.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::{
    calibration::EchoWindow,
    config::SettlingDelay,
    constants::sensors::{ECHO_DELAY_MS, TRIGGER_PULSE_US},
    errors::{SensorError, SensorResult},
    reading::Reading,
    sensor::Hcsr04,
    traits::EchoInput,
};

/// Sort a raw echo duration into valid or out of range
///
/// Zero (no pulse before the timeout) and anything outside the exclusive
/// window are out of range.
pub fn classify(duration_us: u32, window: &EchoWindow) -> Reading<u32> {
    if window.accepts(duration_us) {
        Reading::Valid(duration_us)
    } else {
        Reading::OutOfRange
    }
}

impl<TRIG, ECHO, D, E> Hcsr04<TRIG, ECHO, D>
where
    TRIG: OutputPin<Error = E>,
    ECHO: EchoInput<Error = E>,
    D: DelayNs,
{
    /// Run one pulse cycle and return the classified echo duration (µs)
    ///
    /// Blocks for at most the maximum echo timeout, plus the settling delay
    /// when the sensor is configured with [`SettlingDelay::PerCycle`].
    pub fn measure_echo_duration(&mut self) -> SensorResult<Reading<u32>, E> {
        if !self.initialized {
            return Err(SensorError::NotInitialized);
        }

        let timeout_us = self.window.timeout_max_us;
        let timed = if self.config.suppress_preemption {
            critical_section::with(|_| self.fire_and_time(timeout_us))
        } else {
            self.fire_and_time(timeout_us)
        };
        let raw_us = timed.map_err(SensorError::Pin)?;

        if self.config.settling_delay == SettlingDelay::PerCycle {
            self.delay.delay_ms(ECHO_DELAY_MS);
        }

        let reading = classify(raw_us, &self.window);
        if reading.is_out_of_range() {
            log_debug!("Echo {} µs outside {:?}", raw_us, self.window);
        }
        Ok(reading)
    }

    fn fire_and_time(&mut self, timeout_us: u32) -> Result<u32, E> {
        self.trigger.set_high()?;
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low()?;

        self.echo.measure_pulse_us(PinState::High, timeout_us)
    }
}

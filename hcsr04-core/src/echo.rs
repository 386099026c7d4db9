//! Software echo timing by polling
//!
//! For MCUs without a spare input-capture channel: poll the echo pin in a
//! tight loop and timestamp the edges with a free-running µs counter.
//! Resolution is one loop iteration (typically 1..3 µs), roughly 0.05 cm.
//!
//! The wait has three phases, all bounded by the same timeout measured from
//! the start of the call:
//!
//! ```text
//! 1. wait while a previous pulse is still at `level`
//! 2. wait for the line to reach `level`     ← rising edge timestamp
//! 3. wait for the line to leave `level`     ← falling edge timestamp
//! ```

use embedded_hal::digital::{InputPin, PinState};

use crate::traits::{EchoInput, MicrosClock};

/// [`EchoInput`] over any `InputPin` and µs clock
pub struct PollingEcho<P, C> {
    pin: P,
    clock: C,
}

impl<P, C> PollingEcho<P, C>
where
    P: InputPin,
    C: MicrosClock,
{
    /// Time pulses on `pin` with `clock`
    pub fn new(pin: P, clock: C) -> Self {
        Self { pin, clock }
    }

    /// Give the pin and clock back
    pub fn release(self) -> (P, C) {
        (self.pin, self.clock)
    }

    fn at_level(&mut self, level: PinState) -> Result<bool, P::Error> {
        match level {
            PinState::High => self.pin.is_high(),
            PinState::Low => self.pin.is_low(),
        }
    }

    /// Spin until the line is (or is not) at `level`; `None` on timeout
    fn wait_for(
        &mut self,
        level: PinState,
        wanted: bool,
        start_us: u32,
        timeout_us: u32,
    ) -> Result<Option<u32>, P::Error> {
        loop {
            let now = self.clock.now_us();
            if self.at_level(level)? == wanted {
                return Ok(Some(now));
            }
            if now.wrapping_sub(start_us) >= timeout_us {
                return Ok(None);
            }
        }
    }
}

impl<P, C> EchoInput for PollingEcho<P, C>
where
    P: InputPin,
    C: MicrosClock,
{
    type Error = P::Error;

    fn measure_pulse_us(&mut self, level: PinState, timeout_us: u32) -> Result<u32, Self::Error> {
        let start = self.clock.now_us();

        if self.wait_for(level, false, start, timeout_us)?.is_none() {
            return Ok(0);
        }
        let Some(rise) = self.wait_for(level, true, start, timeout_us)? else {
            return Ok(0);
        };
        let Some(fall) = self.wait_for(level, false, start, timeout_us)? else {
            return Ok(0);
        };

        Ok(fall.wrapping_sub(rise))
    }
}

//! Hardware seams of the driver
//!
//! The trigger line and the delay provider come straight from `embedded-hal`
//! (`OutputPin`, `DelayNs`). Timing the echo has no `embedded-hal` trait, so
//! it is described here. Keep these small: a HAL port should be a few lines.

use embedded_hal::digital::PinState;

/// Bounded measurement of a pulse on the echo line
///
/// Semantics follow the classic `pulseIn` primitive:
/// - wait for the line to reach `level`,
/// - time how long it stays there,
/// - give up once `timeout_us` has elapsed since the call started.
///
/// ## Implementation Requirements
///
/// - Return `Ok(0)` when no complete pulse was seen before the timeout
/// - Never block longer than `timeout_us` plus the implementation's own
///   polling granularity
/// - Report hardware faults through `Self::Error`, never as a duration
///
/// ## Example Implementation
///
/// ```rust
/// use embedded_hal::digital::PinState;
/// use hcsr04_core::EchoInput;
///
/// struct InputCapture {
///     // ... timer peripheral in input-capture mode
/// }
///
/// impl EchoInput for InputCapture {
///     type Error = core::convert::Infallible;
///
///     fn measure_pulse_us(&mut self, _level: PinState, _timeout_us: u32) -> Result<u32, Self::Error> {
///         // Arm capture on both edges, wait, return CCR2 - CCR1
///         Ok(0) // placeholder
///     }
/// }
/// ```
///
/// Platforms without input capture can use
/// [`PollingEcho`](crate::echo::PollingEcho) over any `InputPin`.
pub trait EchoInput {
    /// Error reported by the underlying pin or timer
    type Error;

    /// Length in µs of the next pulse at `level`, or 0 on timeout
    fn measure_pulse_us(&mut self, level: PinState, timeout_us: u32) -> Result<u32, Self::Error>;
}

/// Free-running microsecond counter
///
/// The counter may wrap at `u32::MAX`; users compute elapsed time with
/// `wrapping_sub`, which stays correct for intervals under ~71 minutes.
pub trait MicrosClock {
    /// Current counter value in µs
    fn now_us(&mut self) -> u32;
}

impl<T: EchoInput + ?Sized> EchoInput for &mut T {
    type Error = T::Error;

    fn measure_pulse_us(&mut self, level: PinState, timeout_us: u32) -> Result<u32, Self::Error> {
        T::measure_pulse_us(self, level, timeout_us)
    }
}

impl<T: MicrosClock + ?Sized> MicrosClock for &mut T {
    fn now_us(&mut self) -> u32 {
        T::now_us(self)
    }
}

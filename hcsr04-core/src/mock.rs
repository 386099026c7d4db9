//! Fake hardware for tests and host-side simulation
//!
//! All fakes are `no_std` and allocation-free so the same tests can run on
//! target. Recordings are capped at [`MAX_RECORDED`] entries; anything beyond
//! is dropped silently.
//!
//! - [`FakeTrigger`]: output pin that records every level it was driven to
//! - [`FakeEcho`]: `EchoInput` that replays a script of durations
//! - [`FakeDelay`]: `DelayNs` that records requested delays instead of waiting
//! - [`SimClock`] / [`SimEchoLine`]: a µs clock and an input pin sharing one
//!   simulated time base, for exercising [`PollingEcho`](crate::echo::PollingEcho)

use core::cell::Cell;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, InputPin, OutputPin, PinState};
use heapless::{Deque, Vec};

use crate::traits::{EchoInput, MicrosClock};

/// Capacity of every recording and script
pub const MAX_RECORDED: usize = 32;

/// Error injected by the failing fakes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakePinError;

impl digital::Error for FakePinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that remembers its edges
#[derive(Debug, Default)]
pub struct FakeTrigger {
    edges: Vec<PinState, MAX_RECORDED>,
    fail: bool,
}

impl FakeTrigger {
    /// Working pin with an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin whose every write fails
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Levels written so far, oldest first
    pub fn edges(&self) -> &[PinState] {
        &self.edges
    }

    fn drive(&mut self, state: PinState) -> Result<(), FakePinError> {
        if self.fail {
            return Err(FakePinError);
        }
        let _ = self.edges.push(state);
        Ok(())
    }
}

impl ErrorType for FakeTrigger {
    type Error = FakePinError;
}

impl OutputPin for FakeTrigger {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.drive(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.drive(PinState::High)
    }
}

/// Echo input replaying scripted durations
///
/// Each measurement pops the next duration; an exhausted script behaves like
/// a sensor that never answers (returns 0).
#[derive(Debug, Default)]
pub struct FakeEcho {
    script: Deque<u32, MAX_RECORDED>,
    last_request: Option<(PinState, u32)>,
    fail: bool,
}

impl FakeEcho {
    /// Echo that never answers
    pub fn new() -> Self {
        Self::default()
    }

    /// Echo answering with `durations` in order
    pub fn with_durations(durations: &[u32]) -> Self {
        let mut echo = Self::new();
        for &d in durations {
            echo.push_duration(d);
        }
        echo
    }

    /// Echo whose every measurement fails
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    /// Queue one more duration (µs)
    pub fn push_duration(&mut self, duration_us: u32) {
        let _ = self.script.push_back(duration_us);
    }

    /// Level and timeout of the most recent measurement
    pub fn last_request(&self) -> Option<(PinState, u32)> {
        self.last_request
    }

    /// Durations not consumed yet
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl EchoInput for FakeEcho {
    type Error = FakePinError;

    fn measure_pulse_us(&mut self, level: PinState, timeout_us: u32) -> Result<u32, Self::Error> {
        self.last_request = Some((level, timeout_us));
        if self.fail {
            return Err(FakePinError);
        }
        Ok(self.script.pop_front().unwrap_or(0))
    }
}

/// Delay provider that only records
#[derive(Debug, Default)]
pub struct FakeDelay {
    us_calls: Vec<u32, MAX_RECORDED>,
    ms_calls: Vec<u32, MAX_RECORDED>,
    total_ns: u64,
}

impl FakeDelay {
    /// Empty recording
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments of every `delay_us` call
    pub fn us_calls(&self) -> &[u32] {
        &self.us_calls
    }

    /// Arguments of every `delay_ms` call
    pub fn ms_calls(&self) -> &[u32] {
        &self.ms_calls
    }

    /// Sum of all requested delays (ns)
    pub fn total_ns(&self) -> u64 {
        self.total_ns
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        let _ = self.us_calls.push(us);
        self.total_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        let _ = self.ms_calls.push(ms);
        self.total_ns += u64::from(ms) * 1_000_000;
    }
}

/// Microsecond clock over a shared simulated time base
///
/// Every read advances time by `tick_us`, standing in for the cost of one
/// polling iteration.
pub struct SimClock<'a> {
    now_us: &'a Cell<u32>,
    tick_us: u32,
}

impl<'a> SimClock<'a> {
    /// Clock reading `now_us` and advancing it `tick_us` per read
    pub fn new(now_us: &'a Cell<u32>, tick_us: u32) -> Self {
        Self { now_us, tick_us }
    }
}

impl MicrosClock for SimClock<'_> {
    fn now_us(&mut self) -> u32 {
        let now = self.now_us.get();
        self.now_us.set(now.wrapping_add(self.tick_us));
        now
    }
}

/// Echo line that is high during `[rise_us, fall_us)` of simulated time
pub struct SimEchoLine<'a> {
    now_us: &'a Cell<u32>,
    pulse: Option<(u32, u32)>,
}

impl<'a> SimEchoLine<'a> {
    /// Line carrying one pulse from `rise_us` until `fall_us`
    pub fn pulse(now_us: &'a Cell<u32>, rise_us: u32, fall_us: u32) -> Self {
        Self { now_us, pulse: Some((rise_us, fall_us)) }
    }

    /// Line that stays low
    pub fn silent(now_us: &'a Cell<u32>) -> Self {
        Self { now_us, pulse: None }
    }

    fn high(&self) -> bool {
        let now = self.now_us.get();
        self.pulse.is_some_and(|(rise, fall)| now.wrapping_sub(rise) < fall.wrapping_sub(rise))
    }
}

impl ErrorType for SimEchoLine<'_> {
    type Error = FakePinError;
}

impl InputPin for SimEchoLine<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.high())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.high())
    }
}

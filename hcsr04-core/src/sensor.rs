//! The sensor instance
//!
//! `Hcsr04` owns the trigger pin, the echo input and a delay provider, so
//! nothing else can toggle the trigger between a pulse and its echo. Every
//! measuring method takes `&mut self`; to share one sensor between tasks,
//! wrap it in the platform's mutex.
//!
//! The measurement methods are split across modules by stage:
//! - [`pulse`](crate::pulse): `measure_echo_duration`
//! - [`median`](crate::median): `get_median_filter_distance`
//! - this module: construction, `init`, `get_distance`, `set_temperature`

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::{
    calibration::{Calibration, EchoWindow},
    config::SensorConfig,
    distance::duration_to_distance,
    errors::{SensorError, SensorResult},
    reading::Reading,
    traits::EchoInput,
};

/// HC-SR04 class ultrasonic ranging sensor
pub struct Hcsr04<TRIG, ECHO, D> {
    pub(crate) trigger: TRIG,
    pub(crate) echo: ECHO,
    pub(crate) delay: D,
    pub(crate) config: SensorConfig,
    /// Replaced on every temperature update
    pub(crate) calibration: Calibration,
    /// Fixed at construction, independent of later temperature updates
    pub(crate) window: EchoWindow,
    pub(crate) initialized: bool,
}

impl<TRIG, ECHO, D, E> Hcsr04<TRIG, ECHO, D>
where
    TRIG: OutputPin<Error = E>,
    ECHO: EchoInput<Error = E>,
    D: DelayNs,
{
    /// Create a sensor and derive its calibration
    ///
    /// Pins are not touched until [`init`](Self::init).
    pub fn new(trigger: TRIG, echo: ECHO, delay: D, config: SensorConfig) -> SensorResult<Self, E> {
        let calibration = Calibration::from_temperature(config.temperature_c)?;
        let window = calibration.echo_window(config.max_distance_cm);

        log_debug!(
            "HC-SR04 at {}°C: {} cm/s, echo window {}..{} µs",
            config.temperature_c,
            calibration.sound_speed_cm_per_s(),
            window.timeout_min_us,
            window.timeout_max_us
        );

        Ok(Self {
            trigger,
            echo,
            delay,
            config,
            calibration,
            window,
            initialized: false,
        })
    }

    /// Create a sensor for 20°C and a 300 cm working distance
    pub fn with_defaults(trigger: TRIG, echo: ECHO, delay: D) -> SensorResult<Self, E> {
        Self::new(trigger, echo, delay, SensorConfig::default())
    }

    /// Drive the trigger low so the module sees a clean rising edge later
    ///
    /// Must be called once before measuring.
    pub fn init(&mut self) -> SensorResult<(), E> {
        self.trigger.set_low().map_err(SensorError::Pin)?;
        self.initialized = true;
        Ok(())
    }

    /// Single-shot distance (cm)
    pub fn get_distance(&mut self) -> SensorResult<Reading<f32>, E> {
        let duration = self.measure_echo_duration()?;
        Ok(duration_to_distance(duration, &self.calibration))
    }

    /// Compensate for a new ambient temperature (°C)
    ///
    /// Only the conversion constant changes: the echo window keeps the
    /// values derived at construction. A rejected temperature leaves the
    /// previous calibration in place.
    pub fn set_temperature(&mut self, temp_c: i16) -> SensorResult<(), E> {
        self.calibration = Calibration::from_temperature(temp_c)?;
        Ok(())
    }
}

impl<TRIG, ECHO, D> Hcsr04<TRIG, ECHO, D> {
    /// Current conversion constants
    pub fn calibration(&self) -> &Calibration {
        &self.calibration
    }

    /// Accepted echo durations
    pub fn echo_window(&self) -> EchoWindow {
        self.window
    }

    /// Settings the sensor was built with
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// `true` once [`init`](Hcsr04::init) has succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Give the pins and the delay provider back
    pub fn release(self) -> (TRIG, ECHO, D) {
        (self.trigger, self.echo, self.delay)
    }
}

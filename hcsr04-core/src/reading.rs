//! Measurement outcome with an explicit out-of-range state
//!
//! The sensor has exactly one "failure" mode that is part of normal use: no
//! valid echo. Instead of a magic number that could be mistaken for a very
//! long distance, every distance-producing operation returns a `Reading`.

/// Result of one measurement step
///
/// Ordering puts every `Valid` value below `OutOfRange`, the way a lost echo
/// shows up as the longest pulse on the wire.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Reading<T> {
    /// A plausible measurement
    Valid(T),
    /// No echo inside the accepted window
    OutOfRange,
}

impl<T> Reading<T> {
    /// `true` when there is no usable value
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange)
    }

    /// The value, if any
    pub fn value(self) -> Option<T> {
        match self {
            Self::Valid(v) => Some(v),
            Self::OutOfRange => None,
        }
    }

    /// Transform a valid value, passing `OutOfRange` through unchanged
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reading<U> {
        match self {
            Self::Valid(v) => Reading::Valid(f(v)),
            Self::OutOfRange => Reading::OutOfRange,
        }
    }
}

impl<T> From<Option<T>> for Reading<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::OutOfRange, Self::Valid)
    }
}

#[cfg(feature = "defmt")]
impl<T: defmt::Format> defmt::Format for Reading<T> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::Valid(v) => defmt::write!(fmt, "{}", v),
            Self::OutOfRange => defmt::write!(fmt, "out of range"),
        }
    }
}

//! Pre-built ranging scenarios
//!
//! Each scenario is three raw echo durations as the fake echo line would
//! deliver them, plus the outcome the median filter must produce.

use super::echo_for_distance;

/// Expected outcome of a scenario
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expected {
    /// Distance within sensor resolution (cm)
    Distance(f32),
    /// No usable echo
    OutOfRange,
}

/// Complete scenario with data and expectation
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub temperature_c: i16,
    pub durations: [u32; 3],
    pub expected: Expected,
}

/// Scenario catalogue
pub struct Scenarios;

impl Scenarios {
    /// Flat wall one metre away, stable readings
    pub fn wall_at_one_metre() -> Scenario {
        let d = echo_for_distance(100.0, 20);
        Scenario {
            name: "wall_at_one_metre",
            temperature_c: 20,
            durations: [d, d + 3, d - 2],
            expected: Expected::Distance(100.0),
        }
    }

    /// Nothing in front: the module holds echo high for its full 38 ms
    pub fn open_space() -> Scenario {
        Scenario {
            name: "open_space",
            temperature_c: 20,
            durations: [38_000, 0, 38_000],
            expected: Expected::OutOfRange,
        }
    }

    /// Target closer than the 4 cm floor
    pub fn too_close() -> Scenario {
        let d = echo_for_distance(2.5, 20);
        Scenario {
            name: "too_close",
            temperature_c: 20,
            durations: [d, d, d],
            expected: Expected::OutOfRange,
        }
    }

    /// Echo from the previous burst arrives as a short ghost reading
    pub fn ghost_echo() -> Scenario {
        let d = echo_for_distance(180.0, 20);
        Scenario {
            name: "ghost_echo",
            temperature_c: 20,
            durations: [d, echo_for_distance(12.0, 20), d + 5],
            expected: Expected::Distance(180.0),
        }
    }

    /// Soft target absorbs one burst
    pub fn one_lost_echo() -> Scenario {
        let d = echo_for_distance(60.0, 20);
        Scenario {
            name: "one_lost_echo",
            temperature_c: 20,
            durations: [0, d, d + 1],
            expected: Expected::Distance(60.0),
        }
    }

    /// Cold warehouse: same echo times, correct distance only if compensated
    pub fn freezer_aisle() -> Scenario {
        let d = echo_for_distance(150.0, -20);
        Scenario {
            name: "freezer_aisle",
            temperature_c: -20,
            durations: [d, d, d],
            expected: Expected::Distance(150.0),
        }
    }

    /// All scenarios
    pub fn all() -> [Scenario; 6] {
        [
            Self::wall_at_one_metre(),
            Self::open_space(),
            Self::too_close(),
            Self::ghost_echo(),
            Self::one_lost_echo(),
            Self::freezer_aisle(),
        ]
    }
}

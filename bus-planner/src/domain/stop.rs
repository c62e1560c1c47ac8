//! Stop code and stop types.

use std::fmt;

use serde::Serialize;

use super::LineCode;

/// Error returned when constructing an invalid stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A strictly positive numeric stop code.
///
/// Stop codes identify physical boarding points and are unique across the
/// network. This type guarantees the code is positive by construction.
///
/// # Examples
///
/// ```
/// use bus_planner::domain::StopCode;
///
/// let code = StopCode::new(44).unwrap();
/// assert_eq!(code.get(), 44);
///
/// // Zero is rejected
/// assert!(StopCode::new(0).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StopCode(u32);

impl StopCode {
    /// Construct a stop code from a positive integer.
    pub fn new(code: u32) -> Result<Self, InvalidStopCode> {
        if code == 0 {
            return Err(InvalidStopCode {
                reason: "must be strictly positive",
            });
        }
        Ok(StopCode(code))
    }

    /// Returns the numeric code.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.0)
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A physical boarding/alighting point.
///
/// Besides its own attributes a stop carries the identifier-indexed edges of
/// the network graph: the codes of the lines serving it and of the stops
/// reachable on foot. Both lists keep insertion order and ignore duplicates;
/// they are resolved through the shared network maps, so stops never own
/// other stops or lines.
///
/// Stops are built once by the loading collaborator and are read-only for
/// the lifetime of any search.
#[derive(Debug, Clone, Serialize)]
pub struct Stop {
    code: StopCode,
    address: String,
    latitude: f64,
    longitude: f64,
    lines: Vec<LineCode>,
    walk_neighbours: Vec<StopCode>,
}

impl Stop {
    /// Create a stop with no line membership or walking neighbours yet.
    pub fn new(code: StopCode, address: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            code,
            address: address.into(),
            latitude,
            longitude,
            lines: Vec::new(),
            walk_neighbours: Vec::new(),
        }
    }

    /// Returns the stop code.
    pub fn code(&self) -> StopCode {
        self.code
    }

    /// Returns the address / display name.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the latitude.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Record that a line serves this stop. Duplicates are ignored.
    pub fn add_line(&mut self, line: LineCode) {
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
    }

    /// Codes of the lines serving this stop, in insertion order.
    pub fn lines(&self) -> &[LineCode] {
        &self.lines
    }

    /// Returns true if the given line serves this stop.
    pub fn is_served_by(&self, line: &LineCode) -> bool {
        self.lines.contains(line)
    }

    /// Record a stop reachable on foot. Duplicates are ignored.
    pub fn add_walk_neighbour(&mut self, stop: StopCode) {
        if !self.walk_neighbours.contains(&stop) {
            self.walk_neighbours.push(stop);
        }
    }

    /// Codes of the stops reachable on foot, in insertion order.
    pub fn walk_neighbours(&self) -> &[StopCode] {
        &self.walk_neighbours
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any positive integer is a valid stop code and round-trips.
        #[test]
        fn positive_roundtrip(n in 1u32..) {
            let code = StopCode::new(n).unwrap();
            prop_assert_eq!(code.get(), n);
            prop_assert_eq!(code.to_string(), n.to_string());
        }

        /// Adding the same line repeatedly never grows the membership list.
        #[test]
        fn membership_is_a_set(repeats in 1usize..20) {
            let mut stop = Stop::new(StopCode::new(1).unwrap(), "x", 0.0, 0.0);
            let line = LineCode::parse("L1").unwrap();
            for _ in 0..repeats {
                stop.add_line(line.clone());
            }
            prop_assert_eq!(stop.lines().len(), 1);
        }
    }
}

//! Line code, timetable, and line types.

use std::fmt;

use chrono::NaiveTime;
use serde::Serialize;

use super::{StopCode, Weekday};

/// Error returned when parsing an invalid line code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid line code: {reason}")]
pub struct InvalidLineCode {
    reason: &'static str,
}

/// A line identifier, e.g. `"L1I"`.
///
/// Line codes are free-form but never empty.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LineCode(String);

impl LineCode {
    /// Parse a line code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidLineCode> {
        if s.is_empty() {
            return Err(InvalidLineCode {
                reason: "must not be empty",
            });
        }
        Ok(LineCode(s.to_string()))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineCode({})", self.0)
    }
}

impl fmt::Display for LineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-weekday departure times, measured at a line's head stop.
///
/// Each weekday holds an independently sorted list; `add` keeps the order
/// regardless of insertion sequence, so loaders don't have to pre-sort.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    departures: [Vec<NaiveTime>; 7],
}

impl Timetable {
    /// Create an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a head-stop departure for the given weekday, keeping the
    /// list sorted.
    pub fn add(&mut self, weekday: Weekday, time: NaiveTime) {
        let list = &mut self.departures[weekday.index()];
        let pos = list.partition_point(|t| *t <= time);
        list.insert(pos, time);
    }

    /// The sorted departures for a weekday.
    pub fn departures(&self, weekday: Weekday) -> &[NaiveTime] {
        &self.departures[weekday.index()]
    }

    /// Returns true if no weekday has any departure.
    pub fn is_empty(&self) -> bool {
        self.departures.iter().all(Vec::is_empty)
    }
}

/// An ordered bus route with per-weekday departure times at its head stop.
///
/// The stop sequence is deduplicated at construction (first occurrence
/// wins), so circular routes list each stop exactly once. The first stop is
/// the head of the line, the reference point for every departure time.
#[derive(Debug, Clone)]
pub struct Line {
    code: LineCode,
    name: String,
    stops: Vec<StopCode>,
    timetable: Timetable,
}

impl Line {
    /// Create a line with the given route and an empty timetable.
    pub fn new(code: LineCode, name: impl Into<String>, stops: Vec<StopCode>) -> Self {
        let mut deduped = Vec::with_capacity(stops.len());
        for stop in stops {
            if !deduped.contains(&stop) {
                deduped.push(stop);
            }
        }
        Self {
            code,
            name: name.into(),
            stops: deduped,
            timetable: Timetable::new(),
        }
    }

    /// Returns the line code.
    pub fn code(&self) -> &LineCode {
        &self.code
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered, duplicate-free stop sequence.
    pub fn stops(&self) -> &[StopCode] {
        &self.stops
    }

    /// The head stop, if the route is non-empty.
    pub fn head(&self) -> Option<StopCode> {
        self.stops.first().copied()
    }

    /// Position of a stop on the route.
    pub fn position_of(&self, stop: StopCode) -> Option<usize> {
        self.stops.iter().position(|s| *s == stop)
    }

    /// Returns true if the route includes the given stop.
    pub fn serves(&self, stop: StopCode) -> bool {
        self.stops.contains(&stop)
    }

    /// Add a head-stop departure for the given weekday.
    pub fn add_departure(&mut self, weekday: Weekday, time: NaiveTime) {
        self.timetable.add(weekday, time);
    }

    /// The sorted head-stop departures for a weekday.
    pub fn departures(&self, weekday: Weekday) -> &[NaiveTime] {
        self.timetable.departures(weekday)
    }

    /// Returns the full timetable.
    pub fn timetable(&self) -> &Timetable {
        &self.timetable
    }
}

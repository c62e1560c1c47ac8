//! Itinerary leg type.
//!
//! A `Leg` is one portion of an itinerary: either a scheduled ride on a
//! line or a walk between two nearby stops. Legs are built by the search
//! strategies without a departure time; the schedule resolver fills it in
//! during its single assignment pass, after which legs are never mutated.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::{DomainError, LineCode, StopCode};

/// One scheduled ride or walk portion of an itinerary.
///
/// A leg with a line code is a bus ride along that line; a leg without one
/// is a walk. The stop list always contains at least the origin and the
/// destination.
///
/// # Invariants
///
/// - At least two stops
/// - Duration is non-negative (enforced by the `u32` representation)
/// - The departure time, once assigned, is never changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Leg {
    line: Option<LineCode>,
    stops: Vec<StopCode>,
    departure: Option<NaiveTime>,
    duration_secs: u32,
}

impl Leg {
    /// Create an unresolved bus leg along a line.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fewer than two stops are given.
    pub fn bus(
        line: LineCode,
        stops: Vec<StopCode>,
        duration_secs: u32,
    ) -> Result<Self, DomainError> {
        Self::build(Some(line), stops, duration_secs)
    }

    /// Create an unresolved walking leg.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fewer than two stops are given.
    pub fn walk(stops: Vec<StopCode>, duration_secs: u32) -> Result<Self, DomainError> {
        Self::build(None, stops, duration_secs)
    }

    fn build(
        line: Option<LineCode>,
        stops: Vec<StopCode>,
        duration_secs: u32,
    ) -> Result<Self, DomainError> {
        if stops.len() < 2 {
            return Err(DomainError::TooFewStops);
        }
        Ok(Self {
            line,
            stops,
            departure: None,
            duration_secs,
        })
    }

    /// The line this leg rides, or `None` for a walking leg.
    pub fn line(&self) -> Option<&LineCode> {
        self.line.as_ref()
    }

    /// Returns true for a walking leg.
    pub fn is_walk(&self) -> bool {
        self.line.is_none()
    }

    /// The ordered stops this leg traverses.
    pub fn stops(&self) -> &[StopCode] {
        &self.stops
    }

    /// The first stop of the leg.
    pub fn origin(&self) -> StopCode {
        self.stops[0]
    }

    /// The last stop of the leg.
    pub fn destination(&self) -> StopCode {
        *self.stops.last().unwrap_or(&self.stops[0])
    }

    /// The assigned local departure time, if resolved.
    pub fn departure(&self) -> Option<NaiveTime> {
        self.departure
    }

    /// The duration in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// The duration as a `chrono::Duration`.
    pub fn duration(&self) -> Duration {
        Duration::seconds(i64::from(self.duration_secs))
    }

    /// The local arrival time (departure plus duration, wrapping at
    /// midnight), if the departure is resolved.
    pub fn arrival(&self) -> Option<NaiveTime> {
        self.departure.map(|d| d + self.duration())
    }

    /// One-time departure assignment, used only by the schedule resolver
    /// and the walk strategy.
    pub(crate) fn set_departure(&mut self, at: NaiveTime) {
        self.departure = Some(at);
    }
}

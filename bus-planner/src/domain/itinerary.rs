//! Itinerary type.
//!
//! An `Itinerary` is a complete trip from origin to destination: one or
//! more legs whose stops connect and whose times are consistent.

use chrono::{Duration, NaiveTime};
use serde::Serialize;

use super::{DomainError, Leg, StopCode};

/// An ordered, non-empty sequence of legs from origin to destination.
///
/// # Invariants
///
/// - At least one leg, every leg with a resolved departure time
/// - Consecutive legs connect (last stop of one == first stop of the next)
/// - Timing is monotone: each leg departs at or after the previous leg's
///   arrival (wall-clock comparison on the 24h dial)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Construct an itinerary from resolved legs, validating the invariants
    /// above.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the leg list is empty, any leg is unresolved,
    /// consecutive legs don't share a stop, or a leg departs before the
    /// previous leg arrives.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        for leg in &legs {
            if leg.departure().is_none() {
                return Err(DomainError::UnresolvedDeparture);
            }
        }
        for window in legs.windows(2) {
            let prev_end = window[0].destination();
            let next_start = window[1].origin();
            if prev_end != next_start {
                return Err(DomainError::LegsNotConnected(prev_end, next_start));
            }

            // Both resolved, checked above
            let previous_arrival = window[0].arrival().ok_or(DomainError::UnresolvedDeparture)?;
            let departure = window[1].departure().ok_or(DomainError::UnresolvedDeparture)?;
            if departure < previous_arrival {
                return Err(DomainError::DepartsBeforePreviousArrival {
                    departure,
                    previous_arrival,
                });
            }
        }
        Ok(Self { legs })
    }

    /// The legs in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// The number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// The departure time of the first leg.
    pub fn departure_time(&self) -> NaiveTime {
        // Resolved at construction
        self.legs[0].departure().unwrap_or(NaiveTime::MIN)
    }

    /// The arrival time of the last leg.
    pub fn arrival_time(&self) -> NaiveTime {
        self.legs
            .last()
            .and_then(Leg::arrival)
            .unwrap_or(NaiveTime::MIN)
    }

    /// Origin stop of the whole trip.
    pub fn origin(&self) -> StopCode {
        self.legs[0].origin()
    }

    /// Destination stop of the whole trip.
    pub fn destination(&self) -> StopCode {
        self.legs[self.legs.len() - 1].destination()
    }

    /// Total elapsed time from first departure to last arrival, including
    /// waits between legs. Reads the 24h dial forward, so an overnight trip
    /// still yields a positive duration.
    pub fn total_duration(&self) -> Duration {
        let elapsed = self.arrival_time() - self.departure_time();
        if elapsed < Duration::zero() {
            elapsed + Duration::days(1)
        } else {
            elapsed
        }
    }

    /// Number of bus-to-bus transfers (walks don't count).
    pub fn transfer_count(&self) -> usize {
        let rides = self.legs.iter().filter(|l| !l.is_walk()).count();
        rides.saturating_sub(1)
    }

    /// Returns true if any leg is a walk.
    pub fn has_walk(&self) -> bool {
        self.legs.iter().any(Leg::is_walk)
    }

    /// The full stop sequence of the trip, with the shared stop at each leg
    /// junction listed once.
    pub fn stop_sequence(&self) -> Vec<StopCode> {
        let mut sequence = Vec::new();
        for leg in &self.legs {
            for &stop in leg.stops() {
                if sequence.last() != Some(&stop) {
                    sequence.push(stop);
                }
            }
        }
        sequence
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LineCode;

    fn code(n: u32) -> StopCode {
        StopCode::new(n).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn bus_leg(line: &str, stops: &[u32], departure: &str, duration_secs: u32) -> Leg {
        let mut leg = Leg::bus(
            LineCode::parse(line).unwrap(),
            stops.iter().map(|n| code(*n)).collect(),
            duration_secs,
        )
        .unwrap();
        leg.set_departure(time(departure));
        leg
    }

    fn walk_leg(stops: &[u32], departure: &str, duration_secs: u32) -> Leg {
        let mut leg = Leg::walk(stops.iter().map(|n| code(*n)).collect(), duration_secs).unwrap();
        leg.set_departure(time(departure));
        leg
    }

    #[test]
    fn single_leg_itinerary() {
        let itinerary =
            Itinerary::new(vec![bus_leg("L1I", &[44, 43, 47], "10:50", 180)]).unwrap();

        assert_eq!(itinerary.leg_count(), 1);
        assert_eq!(itinerary.origin(), code(44));
        assert_eq!(itinerary.destination(), code(47));
        assert_eq!(itinerary.departure_time(), time("10:50"));
        assert_eq!(itinerary.arrival_time(), time("10:53"));
        assert_eq!(itinerary.total_duration(), Duration::seconds(180));
        assert_eq!(itinerary.transfer_count(), 0);
        assert!(!itinerary.has_walk());
    }

    #[test]
    fn two_leg_itinerary_with_wait() {
        let itinerary = Itinerary::new(vec![
            bus_leg("A", &[10, 20], "09:00", 600),
            bus_leg("B", &[20, 30], "09:35", 300),
        ])
        .unwrap();

        assert_eq!(itinerary.transfer_count(), 1);
        assert_eq!(itinerary.departure_time(), time("09:00"));
        assert_eq!(itinerary.arrival_time(), time("09:40"));
        // 09:00 to 09:40 including the wait at stop 20
        assert_eq!(itinerary.total_duration(), Duration::minutes(40));
    }

    #[test]
    fn walk_between_rides() {
        let itinerary = Itinerary::new(vec![
            bus_leg("X", &[1, 2], "09:00", 300),
            walk_leg(&[2, 3], "09:05", 120),
            bus_leg("Y", &[3, 4], "09:10", 300),
        ])
        .unwrap();

        assert!(itinerary.has_walk());
        // Only the two rides count towards transfers
        assert_eq!(itinerary.transfer_count(), 1);
        assert_eq!(itinerary.stop_sequence(), vec![code(1), code(2), code(3), code(4)]);
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(
            Itinerary::new(vec![]),
            Err(DomainError::EmptyItinerary)
        ));
    }

    #[test]
    fn unresolved_leg_rejected() {
        let unresolved = Leg::bus(
            LineCode::parse("L1").unwrap(),
            vec![code(1), code(2)],
            60,
        )
        .unwrap();
        assert!(matches!(
            Itinerary::new(vec![unresolved]),
            Err(DomainError::UnresolvedDeparture)
        ));
    }

    #[test]
    fn disconnected_legs_rejected() {
        let result = Itinerary::new(vec![
            bus_leg("A", &[10, 20], "09:00", 600),
            bus_leg("B", &[25, 30], "09:35", 300),
        ]);
        assert!(matches!(result, Err(DomainError::LegsNotConnected(a, b))
            if a == code(20) && b == code(25)));
    }

    #[test]
    fn departing_before_previous_arrival_rejected() {
        let result = Itinerary::new(vec![
            bus_leg("A", &[10, 20], "09:00", 600), // arrives 09:10
            bus_leg("B", &[20, 30], "09:05", 300), // departs 09:05
        ]);
        assert!(matches!(
            result,
            Err(DomainError::DepartsBeforePreviousArrival { .. })
        ));
    }

    #[test]
    fn zero_wait_connection_accepted() {
        let itinerary = Itinerary::new(vec![
            bus_leg("A", &[10, 20], "09:00", 600), // arrives 09:10
            bus_leg("B", &[20, 30], "09:10", 300), // departs exactly then
        ]);
        assert!(itinerary.is_ok());
    }

    #[test]
    fn overnight_total_duration_is_positive() {
        let itinerary =
            Itinerary::new(vec![bus_leg("N1", &[1, 2], "23:50", 1200)]).unwrap();
        assert_eq!(itinerary.arrival_time(), time("00:10"));
        assert_eq!(itinerary.total_duration(), Duration::minutes(20));
    }

    #[test]
    fn serialized_shape() {
        let itinerary =
            Itinerary::new(vec![bus_leg("L1I", &[44, 43], "10:50", 120)]).unwrap();
        let value = serde_json::to_value(&itinerary).unwrap();

        assert_eq!(value["legs"][0]["line"], "L1I");
        assert_eq!(value["legs"][0]["stops"], serde_json::json!([44, 43]));
        assert_eq!(value["legs"][0]["duration_secs"], 120);
        assert!(
            value["legs"][0]["departure"]
                .as_str()
                .unwrap()
                .starts_with("10:50")
        );

        let walk = Itinerary::new(vec![walk_leg(&[50, 51], "10:00", 300)]).unwrap();
        let value = serde_json::to_value(&walk).unwrap();
        assert!(value["legs"][0]["line"].is_null());
    }
}

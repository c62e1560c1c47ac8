//! Schedule resolution.
//!
//! Pure functions that turn unresolved leg chains into timed ones: summing
//! segment durations along a stop path, finding the next feasible line
//! departure for a required arrival time (wrapping to the following weekday
//! when today's list is exhausted), and assigning consistent departures
//! across a chain of legs in a single pass.
//!
//! All times are wall-clock `NaiveTime`s; arithmetic wraps at midnight,
//! matching how the timetables are published.

use chrono::{Duration, NaiveTime};
use tracing::warn;

use crate::domain::{Leg, Line, StopCode, Weekday};
use crate::network::NetworkModel;

use super::index::ConnectionIndex;

/// Sum of segment durations along a consecutive stop path, in seconds.
///
/// For each consecutive pair the first indexed segment between the two
/// stops contributes its duration. A missing segment is a soft data gap:
/// it contributes zero and is logged, never an error.
pub fn path_duration(stops: &[StopCode], index: &ConnectionIndex) -> u32 {
    let mut total = 0u32;
    for pair in stops.windows(2) {
        match index.between(pair[0], pair[1]) {
            Some(segment) => total = total.saturating_add(segment.duration_secs()),
            None => {
                warn!(from = %pair[0], to = %pair[1], "no segment between consecutive stops, counting zero");
            }
        }
    }
    total
}

/// The arrival time at a rider's stop of the next feasible departure of
/// `line`, or `None` if the line has no departure at all.
///
/// `head_travel_secs` is the riding time from the line's head stop to the
/// rider's stop. A head departure qualifies if it is at or after
/// `arrival_at_stop - head_travel` on the requested weekday. When no entry
/// of that day qualifies, the first entry of the following weekday is
/// accepted unconditionally (the rider waits across midnight).
pub fn next_departure(
    line: &Line,
    weekday: Weekday,
    arrival_at_stop: NaiveTime,
    head_travel_secs: u32,
) -> Option<NaiveTime> {
    let head_travel = Duration::seconds(i64::from(head_travel_secs));
    let min_head_departure = arrival_at_stop - head_travel;

    if let Some(departure) = line
        .departures(weekday)
        .iter()
        .copied()
        .find(|t| *t >= min_head_departure)
    {
        return Some(departure + head_travel);
    }

    line.departures(weekday.next())
        .first()
        .map(|t| *t + head_travel)
}

/// Assign departure times across a chain of legs in one pass.
///
/// Walks the chain with a running required-arrival time, starting at
/// `initial_arrival`. A bus leg gets the arrival time resolved by
/// [`next_departure`], using [`path_duration`] over the line's stop prefix
/// for the head travel; a walking leg departs at the running time directly,
/// with no schedule and no wait. After each leg the running time advances
/// to departure plus leg duration.
///
/// Returns `false` (leaving the chain partially assigned) when any bus leg
/// has no feasible departure or references data missing from the network;
/// callers discard the whole chain in that case.
pub fn assign_departures(
    legs: &mut [Leg],
    network: &NetworkModel,
    weekday: Weekday,
    initial_arrival: NaiveTime,
    index: &ConnectionIndex,
) -> bool {
    let mut current = initial_arrival;

    for leg in legs.iter_mut() {
        let departure = match leg.line() {
            Some(line_code) => {
                let Some(line) = network.line(line_code) else {
                    warn!(line = %line_code, "leg references a line missing from the network");
                    return false;
                };
                let Some(boarding_pos) = line.position_of(leg.origin()) else {
                    warn!(line = %line_code, stop = %leg.origin(), "leg boards at a stop the line does not serve");
                    return false;
                };
                let head_travel = path_duration(&line.stops()[..=boarding_pos], index);
                match next_departure(line, weekday, current, head_travel) {
                    Some(at) => at,
                    None => return false,
                }
            }
            None => current,
        };

        leg.set_departure(departure);
        current = departure + leg.duration();
    }

    true
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Line, LineCode};
    use proptest::prelude::*;

    fn any_time() -> impl Strategy<Value = NaiveTime> {
        (0u32..24, 0u32..60)
            .prop_map(|(h, m)| NaiveTime::from_hms_opt(h, m, 0).unwrap())
    }

    proptest! {
        /// Whatever `next_departure` returns maps back (minus head travel)
        /// to an entry of the requested weekday's list or the next day's,
        /// and a same-day match never precedes the minimum head departure.
        #[test]
        fn result_comes_from_a_departure_list(
            today in proptest::collection::vec(any_time(), 0..15),
            tomorrow in proptest::collection::vec(any_time(), 0..15),
            arrival in any_time(),
            head_travel_secs in 0u32..7200,
        ) {
            let mut line = Line::new(
                LineCode::parse("P").unwrap(),
                "prop",
                vec![StopCode::new(1).unwrap()],
            );
            let monday = Weekday::new(1).unwrap();
            for t in &today {
                line.add_departure(monday, *t);
            }
            for t in &tomorrow {
                line.add_departure(monday.next(), *t);
            }

            let head_travel = Duration::seconds(i64::from(head_travel_secs));
            match next_departure(&line, monday, arrival, head_travel_secs) {
                None => prop_assert!(today.is_empty() && tomorrow.is_empty()),
                Some(at) => {
                    let head_departure = at - head_travel;
                    let min_head = arrival - head_travel;
                    if line.departures(monday).contains(&head_departure)
                        && head_departure >= min_head
                    {
                        // Same-day match, at or after the minimum
                    } else {
                        // Wrapped to the next day's earliest entry
                        prop_assert_eq!(
                            line.departures(monday.next()).first(),
                            Some(&head_departure)
                        );
                    }
                }
            }
        }
    }
}

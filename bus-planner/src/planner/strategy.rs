//! The strategy seam.
//!
//! The three search strategies form a closed set behind one trait, iterated
//! in fixed priority by the orchestrator. No open registration: the set is
//! closed by design.

use chrono::NaiveTime;

use crate::domain::{DomainError, Itinerary, SegmentMap, Stop, Weekday};
use crate::network::NetworkModel;

use super::index::ConnectionIndex;

/// Everything a strategy needs for one search: the shared network, the
/// caller's segment collection and its derived index, and the request
/// parameters. Cheap to copy, so sub-searches can rebind the endpoints.
#[derive(Clone, Copy)]
pub(crate) struct SearchContext<'a> {
    pub network: &'a NetworkModel,
    pub segments: &'a SegmentMap,
    pub index: &'a ConnectionIndex,
    pub origin: &'a Stop,
    pub destination: &'a Stop,
    pub weekday: Weekday,
    pub arrival_time: NaiveTime,
}

/// One way of producing candidate itineraries.
///
/// Returning an empty vec means "nothing found here"; an `Err` is an
/// unexpected fault that the orchestrator logs at the tier boundary and
/// treats the same way.
pub(crate) trait SearchStrategy {
    fn name(&self) -> &'static str;

    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<Itinerary>, DomainError>;
}

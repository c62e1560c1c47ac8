//! Search orchestrator.
//!
//! One `plan` call is a stateless, single-pass pipeline: validate the
//! request, build the connection index, then try the strategies in fixed
//! priority — direct ride, single transfer, walking-augmented ride. The
//! first tier to produce anything wins outright; no merging or cross-tier
//! ranking ever occurs. "No route" is an empty list, never an error.

use chrono::NaiveTime;
use tracing::{debug, trace, warn};

use crate::domain::{Itinerary, SegmentMap, StopCode, Weekday};
use crate::network::NetworkModel;

use super::direct::DirectStrategy;
use super::index::ConnectionIndex;
use super::strategy::{SearchContext, SearchStrategy};
use super::transfer::TransferStrategy;
use super::walk::WalkStrategy;

/// Error from a malformed plan request.
///
/// Contract violations only: an unroutable trip is an empty result, not an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// A stop code not present in the network model
    #[error("unknown stop code: {0}")]
    UnknownStop(StopCode),
}

/// The itinerary planner.
///
/// Borrows an immutable network model; safely re-entrant across concurrent
/// `plan` calls as long as nothing mutates the model underneath. Holds no
/// state between calls — in particular the connection index is rebuilt on
/// every call, so callers issuing many searches against the same model may
/// want to amortise that themselves.
pub struct Planner<'a> {
    network: &'a NetworkModel,
}

impl<'a> Planner<'a> {
    /// Create a planner over a network model.
    pub fn new(network: &'a NetworkModel) -> Self {
        Self { network }
    }

    /// Plan itineraries from `origin` to `destination`, reaching the
    /// origin stop no earlier than `arrival_time` on `weekday`.
    ///
    /// Strategies run in fixed priority (direct, transfer, walk) and the
    /// first non-empty tier's results are returned as-is. A tier that
    /// fails unexpectedly is logged and treated as empty so the pipeline
    /// can continue.
    ///
    /// # Errors
    ///
    /// Returns `Err` only when a stop code is missing from the network
    /// model.
    pub fn plan(
        &self,
        origin: StopCode,
        destination: StopCode,
        weekday: Weekday,
        arrival_time: NaiveTime,
        segments: &SegmentMap,
    ) -> Result<Vec<Itinerary>, PlanError> {
        let origin = self
            .network
            .stop(origin)
            .ok_or(PlanError::UnknownStop(origin))?;
        let destination = self
            .network
            .stop(destination)
            .ok_or(PlanError::UnknownStop(destination))?;

        let index = ConnectionIndex::build(segments);
        let ctx = SearchContext {
            network: self.network,
            segments,
            index: &index,
            origin,
            destination,
            weekday,
            arrival_time,
        };

        let strategies: [&dyn SearchStrategy; 3] =
            [&DirectStrategy, &TransferStrategy, &WalkStrategy];

        for strategy in strategies {
            match strategy.search(&ctx) {
                Ok(itineraries) if !itineraries.is_empty() => {
                    debug!(
                        strategy = strategy.name(),
                        count = itineraries.len(),
                        "tier produced itineraries"
                    );
                    return Ok(itineraries);
                }
                Ok(_) => {
                    trace!(strategy = strategy.name(), "tier produced nothing");
                }
                Err(error) => {
                    warn!(
                        strategy = strategy.name(),
                        %error,
                        "strategy failed, treating tier as empty"
                    );
                }
            }
        }

        Ok(Vec::new())
    }
}

//! Domain error types.
//!
//! These errors represent validation failures in the domain layer:
//! malformed legs and itineraries that the search strategies must discard.

use super::StopCode;

/// Domain-level errors for leg and itinerary validation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// A leg needs at least an origin and a destination stop
    #[error("a leg needs at least two stops")]
    TooFewStops,

    /// An itinerary must contain at least one leg
    #[error("itinerary must have at least one leg")]
    EmptyItinerary,

    /// A leg was used before its departure time was assigned
    #[error("leg has no resolved departure time")]
    UnresolvedDeparture,

    /// Consecutive legs don't share a stop
    #[error("legs do not connect: previous ends at {0}, next starts at {1}")]
    LegsNotConnected(StopCode, StopCode),

    /// A leg departs before the previous leg arrives
    #[error("leg departs at {departure} before the previous leg arrives at {previous_arrival}")]
    DepartsBeforePreviousArrival {
        departure: chrono::NaiveTime,
        previous_arrival: chrono::NaiveTime,
    },
}

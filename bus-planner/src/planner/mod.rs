//! The route-search engine.
//!
//! This module answers: "leaving this stop no earlier than this time on
//! this weekday, how do I reach that stop?" Three strategies are tried in
//! fixed priority — a direct ride, a single transfer, then a walk bridging
//! two direct rides — and the first tier with results wins.

mod direct;
mod index;
mod schedule;
mod search;
mod strategy;
mod transfer;
mod walk;

pub use index::ConnectionIndex;
pub use schedule::{assign_departures, next_departure, path_duration};
pub use search::{PlanError, Planner};

//! Direct-ride strategy.

use tracing::{debug, warn};

use crate::domain::{DomainError, Itinerary, Leg};

use super::schedule::{assign_departures, path_duration};
use super::strategy::{SearchContext, SearchStrategy};

/// Finds single-leg itineraries: one ride on a line that serves both the
/// origin and, further along its route, the destination.
///
/// Lines are tried in the origin stop's membership order and every
/// qualifying line contributes one itinerary; no ranking or deduplication
/// is applied across lines.
pub(crate) struct DirectStrategy;

impl SearchStrategy for DirectStrategy {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<Itinerary>, DomainError> {
        let mut found = Vec::new();

        for line_code in ctx.origin.lines() {
            let Some(line) = ctx.network.line(line_code) else {
                warn!(line = %line_code, "stop references a line missing from the network");
                continue;
            };
            let Some(origin_pos) = line.position_of(ctx.origin.code()) else {
                continue;
            };
            let Some(destination_pos) = line.position_of(ctx.destination.code()) else {
                continue;
            };
            // The ride must travel forward along the route
            if destination_pos <= origin_pos {
                continue;
            }

            let stops = line.stops()[origin_pos..=destination_pos].to_vec();
            let duration = path_duration(&stops, ctx.index);
            let mut legs = vec![Leg::bus(line.code().clone(), stops, duration)?];

            if !assign_departures(
                &mut legs,
                ctx.network,
                ctx.weekday,
                ctx.arrival_time,
                ctx.index,
            ) {
                // No feasible departure on this line; not an error
                continue;
            }

            match Itinerary::new(legs) {
                Ok(itinerary) => found.push(itinerary),
                Err(error) => {
                    debug!(%error, "discarding direct candidate");
                }
            }
        }

        Ok(found)
    }
}

//! Walking-augmented strategy.

use tracing::{debug, warn};

use crate::domain::{DomainError, Itinerary, Leg};

use super::direct::DirectStrategy;
use super::strategy::{SearchContext, SearchStrategy};

/// Finds itineraries that bridge two direct rides with one walk.
///
/// For every walk segment in the caller's collection, runs the direct
/// strategy from the origin to the walk's start and from the walk's end to
/// the destination. Both sub-searches use the caller's original arrival
/// time, not each other's results. Every pairing of the two result sets is
/// stitched together around a synthesized walking leg that departs when the
/// chosen initial ride arrives; pairings whose onward ride leaves before
/// the walk completes fail itinerary validation and are dropped.
///
/// Only direct sub-searches are attempted on either side of the walk;
/// walking is never combined with a transfer.
pub(crate) struct WalkStrategy;

impl SearchStrategy for WalkStrategy {
    fn name(&self) -> &'static str {
        "walk"
    }

    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<Itinerary>, DomainError> {
        let mut found = Vec::new();

        for segment in ctx.segments.values().filter(|s| s.is_walk()) {
            let Some(walk_start) = ctx.network.stop(segment.origin()) else {
                warn!(stop = %segment.origin(), "walk segment references a stop missing from the network");
                continue;
            };
            let Some(walk_end) = ctx.network.stop(segment.destination()) else {
                warn!(stop = %segment.destination(), "walk segment references a stop missing from the network");
                continue;
            };

            let to_walk = DirectStrategy.search(&SearchContext {
                destination: walk_start,
                ..*ctx
            })?;
            if to_walk.is_empty() {
                continue;
            }
            let onward = DirectStrategy.search(&SearchContext {
                origin: walk_end,
                ..*ctx
            })?;
            if onward.is_empty() {
                continue;
            }

            for initial in &to_walk {
                for remainder in &onward {
                    let mut walk_leg = Leg::walk(
                        vec![segment.origin(), segment.destination()],
                        segment.duration_secs(),
                    )?;
                    walk_leg.set_departure(initial.arrival_time());

                    let mut legs = initial.legs().to_vec();
                    legs.push(walk_leg);
                    legs.extend_from_slice(remainder.legs());

                    match Itinerary::new(legs) {
                        Ok(itinerary) => found.push(itinerary),
                        Err(error) => {
                            debug!(%error, "discarding walk pairing");
                        }
                    }
                }
            }
        }

        Ok(found)
    }
}

//! Single-transfer strategy.

use tracing::{debug, warn};

use crate::domain::{DomainError, Itinerary, Leg};

use super::schedule::{assign_departures, path_duration};
use super::strategy::{SearchContext, SearchStrategy};

/// Finds two-leg itineraries: ride a line serving the origin to a transfer
/// stop, change there to a line serving the destination.
///
/// For each (line serving origin, line serving destination) pair the
/// transfer stop is the **first** stop strictly after the origin on the
/// first line that the second line also serves and that isn't the final
/// destination itself; there is no search for a globally better transfer
/// point. The transfer must precede the destination on the second line's
/// route. Exactly one transfer is supported.
pub(crate) struct TransferStrategy;

impl SearchStrategy for TransferStrategy {
    fn name(&self) -> &'static str {
        "transfer"
    }

    fn search(&self, ctx: &SearchContext<'_>) -> Result<Vec<Itinerary>, DomainError> {
        let mut found = Vec::new();

        for first_code in ctx.origin.lines() {
            let Some(first_line) = ctx.network.line(first_code) else {
                warn!(line = %first_code, "stop references a line missing from the network");
                continue;
            };
            let Some(origin_pos) = first_line.position_of(ctx.origin.code()) else {
                continue;
            };

            for second_code in ctx.destination.lines() {
                let Some(second_line) = ctx.network.line(second_code) else {
                    warn!(line = %second_code, "stop references a line missing from the network");
                    continue;
                };
                let Some(destination_pos) = second_line.position_of(ctx.destination.code())
                else {
                    continue;
                };

                // First shared stop after the origin wins, destination excluded
                let transfer = first_line.stops()[origin_pos + 1..]
                    .iter()
                    .enumerate()
                    .find(|(_, stop)| {
                        **stop != ctx.destination.code() && second_line.serves(**stop)
                    })
                    .map(|(offset, stop)| (origin_pos + 1 + offset, *stop));
                let Some((transfer_pos_first, transfer_stop)) = transfer else {
                    continue;
                };

                let Some(transfer_pos_second) = second_line.position_of(transfer_stop) else {
                    continue;
                };
                // The connecting ride must still travel forward
                if transfer_pos_second >= destination_pos {
                    continue;
                }

                let first_stops =
                    first_line.stops()[origin_pos..=transfer_pos_first].to_vec();
                let second_stops =
                    second_line.stops()[transfer_pos_second..=destination_pos].to_vec();
                let first_duration = path_duration(&first_stops, ctx.index);
                let second_duration = path_duration(&second_stops, ctx.index);

                let mut legs = vec![
                    Leg::bus(first_line.code().clone(), first_stops, first_duration)?,
                    Leg::bus(second_line.code().clone(), second_stops, second_duration)?,
                ];

                if !assign_departures(
                    &mut legs,
                    ctx.network,
                    ctx.weekday,
                    ctx.arrival_time,
                    ctx.index,
                ) {
                    continue;
                }

                // A next-day wrapped connection can resolve behind the
                // first leg's arrival; that kills this pairing only.
                match Itinerary::new(legs) {
                    Ok(itinerary) => found.push(itinerary),
                    Err(error) => {
                        debug!(%error, "discarding transfer pairing");
                    }
                }
            }
        }

        Ok(found)
    }
}

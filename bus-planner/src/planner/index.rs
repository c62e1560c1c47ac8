//! Per-call connection index.
//!
//! Maps each stop to its outgoing segments for cheap "segment from X to Y"
//! lookups during a search. The index is derived from the caller's segment
//! map at the start of every plan call and discarded afterwards; callers
//! issuing many searches against the same immutable network can build and
//! reuse one themselves if the amortised cost matters.

use std::collections::HashMap;

use crate::domain::{Segment, SegmentMap, StopCode};

/// Stop-to-outgoing-segments index.
///
/// Each bucket preserves the segment map's iteration order (lexicographic
/// by composite key), which is what makes "first matching segment wins"
/// lookups deterministic.
#[derive(Debug, Clone)]
pub struct ConnectionIndex {
    outgoing: HashMap<StopCode, Vec<Segment>>,
}

impl ConnectionIndex {
    /// Build the index from a segment collection.
    pub fn build(segments: &SegmentMap) -> Self {
        let mut outgoing: HashMap<StopCode, Vec<Segment>> = HashMap::new();
        for segment in segments.values() {
            outgoing.entry(segment.origin()).or_default().push(*segment);
        }
        Self { outgoing }
    }

    /// All segments leaving a stop, in insertion order.
    pub fn outgoing(&self, from: StopCode) -> &[Segment] {
        self.outgoing.get(&from).map_or(&[], Vec::as_slice)
    }

    /// The first segment from `from` whose destination is `to`, if any.
    pub fn between(&self, from: StopCode, to: StopCode) -> Option<&Segment> {
        self.outgoing(from).iter().find(|s| s.destination() == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SegmentKind;

    fn code(n: u32) -> StopCode {
        StopCode::new(n).unwrap()
    }

    fn map(segments: impl IntoIterator<Item = Segment>) -> SegmentMap {
        segments.into_iter().map(|s| (s.key(), s)).collect()
    }

    #[test]
    fn groups_segments_by_origin() {
        let segments = map([
            Segment::bus(code(1), code(2), 60),
            Segment::bus(code(1), code(3), 90),
            Segment::bus(code(2), code(3), 30),
        ]);
        let index = ConnectionIndex::build(&segments);

        assert_eq!(index.outgoing(code(1)).len(), 2);
        assert_eq!(index.outgoing(code(2)).len(), 1);
        assert!(index.outgoing(code(9)).is_empty());
    }

    #[test]
    fn between_finds_matching_destination() {
        let segments = map([
            Segment::bus(code(1), code(2), 60),
            Segment::bus(code(2), code(3), 30),
        ]);
        let index = ConnectionIndex::build(&segments);

        assert_eq!(index.between(code(1), code(2)).unwrap().duration_secs(), 60);
        assert!(index.between(code(2), code(1)).is_none());
        assert!(index.between(code(9), code(1)).is_none());
    }

    #[test]
    fn between_first_match_follows_key_order() {
        // Both a bus and a walk segment join the same pair of stops. Their
        // keys "1-2-1" and "1-2-2" sort bus-first, so the bus one wins.
        let segments = map([
            Segment::walk(code(1), code(2), 600),
            Segment::bus(code(1), code(2), 120),
        ]);
        let index = ConnectionIndex::build(&segments);

        let first = index.between(code(1), code(2)).unwrap();
        assert_eq!(first.kind(), SegmentKind::Bus);
        assert_eq!(first.duration_secs(), 120);
    }

    #[test]
    fn empty_input_builds_empty_index() {
        let index = ConnectionIndex::build(&SegmentMap::new());
        assert!(index.outgoing(code(1)).is_empty());
    }
}

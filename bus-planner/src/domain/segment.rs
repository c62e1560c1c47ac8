//! Timed directed edges between stops.

use std::collections::BTreeMap;

use chrono::Duration;
use serde::Serialize;

use super::StopCode;

/// The kind of a segment: a scheduled bus hop or a pedestrian link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SegmentKind {
    Bus,
    Walk,
}

impl SegmentKind {
    /// The numeric code used in composite segment keys (1 = bus, 2 = walk).
    pub fn wire_code(self) -> u8 {
        match self {
            SegmentKind::Bus => 1,
            SegmentKind::Walk => 2,
        }
    }
}

/// A directed, timed edge between two stops.
///
/// Bus segments are unidirectional. Walk segments always come in reciprocal
/// pairs (A→B and B→A with equal duration), so walking is effectively
/// undirected; [`Segment::walk_pair`] builds both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    origin: StopCode,
    destination: StopCode,
    duration_secs: u32,
    kind: SegmentKind,
}

impl Segment {
    /// Create a bus segment.
    pub fn bus(origin: StopCode, destination: StopCode, duration_secs: u32) -> Self {
        Self {
            origin,
            destination,
            duration_secs,
            kind: SegmentKind::Bus,
        }
    }

    /// Create a single walk segment. Prefer [`Segment::walk_pair`], which
    /// keeps the reciprocal-pair invariant.
    pub fn walk(origin: StopCode, destination: StopCode, duration_secs: u32) -> Self {
        Self {
            origin,
            destination,
            duration_secs,
            kind: SegmentKind::Walk,
        }
    }

    /// The reciprocal pair of walk segments between two stops.
    pub fn walk_pair(a: StopCode, b: StopCode, duration_secs: u32) -> [Self; 2] {
        [Self::walk(a, b, duration_secs), Self::walk(b, a, duration_secs)]
    }

    /// Returns the origin stop code.
    pub fn origin(&self) -> StopCode {
        self.origin
    }

    /// Returns the destination stop code.
    pub fn destination(&self) -> StopCode {
        self.destination
    }

    /// Returns the duration in seconds.
    pub fn duration_secs(&self) -> u32 {
        self.duration_secs
    }

    /// Returns the duration as a `chrono::Duration`.
    pub fn duration(&self) -> Duration {
        Duration::seconds(i64::from(self.duration_secs))
    }

    /// Returns the segment kind.
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Returns true for a walk segment.
    pub fn is_walk(&self) -> bool {
        self.kind == SegmentKind::Walk
    }

    /// Returns true for a bus segment.
    pub fn is_bus(&self) -> bool {
        self.kind == SegmentKind::Bus
    }

    /// The composite `"origin-destination-kind"` key this segment is stored
    /// under, e.g. `"44-43-1"`.
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.origin, self.destination, self.kind.wire_code())
    }
}

/// The segment collection handed to the planner, keyed by [`Segment::key`].
///
/// A `BTreeMap` so iteration follows lexicographic key order; the planner's
/// order-dependent behaviours (first-segment-wins lookup, walk-segment
/// enumeration) are pinned to that order.
pub type SegmentMap = BTreeMap<String, Segment>;

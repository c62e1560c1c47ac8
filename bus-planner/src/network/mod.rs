//! The static network model.
//!
//! A `NetworkModel` is the immutable value set the planner searches over:
//! stops, lines, and segments, each keyed by its identifier. It is built
//! once by the loading collaborator (or by [`NetworkModelBuilder`] in tests
//! and demos) and shared read-only across any number of concurrent plan
//! calls. The planner never re-validates structural consistency; the
//! builder maintains the cross-references (stop-to-line membership, walk
//! neighbours, reciprocal walk pairs) as entities are added.

use std::collections::HashMap;

use crate::domain::{Line, LineCode, Segment, SegmentMap, Stop, StopCode};

/// The immutable set of stops, lines, and segments the planner searches.
#[derive(Debug, Clone, Default)]
pub struct NetworkModel {
    stops: HashMap<StopCode, Stop>,
    lines: HashMap<LineCode, Line>,
    segments: SegmentMap,
}

impl NetworkModel {
    /// Start building a network model.
    pub fn builder() -> NetworkModelBuilder {
        NetworkModelBuilder::default()
    }

    /// Look up a stop by code.
    pub fn stop(&self, code: StopCode) -> Option<&Stop> {
        self.stops.get(&code)
    }

    /// Look up a line by code.
    pub fn line(&self, code: &LineCode) -> Option<&Line> {
        self.lines.get(code)
    }

    /// All stops, keyed by code.
    pub fn stops(&self) -> &HashMap<StopCode, Stop> {
        &self.stops
    }

    /// All lines, keyed by code.
    pub fn lines(&self) -> &HashMap<LineCode, Line> {
        &self.lines
    }

    /// The segment collection, keyed by composite segment key.
    pub fn segments(&self) -> &SegmentMap {
        &self.segments
    }
}

/// Builder with the loader-facing mutators.
///
/// Add stops before the lines and segments that reference them, so the
/// cross-reference edges land on the right stops.
#[derive(Debug, Default)]
pub struct NetworkModelBuilder {
    model: NetworkModel,
}

impl NetworkModelBuilder {
    /// Add a stop.
    pub fn stop(mut self, stop: Stop) -> Self {
        self.model.stops.insert(stop.code(), stop);
        self
    }

    /// Add a line, registering its membership on every stop it serves.
    pub fn line(mut self, line: Line) -> Self {
        for stop_code in line.stops() {
            if let Some(stop) = self.model.stops.get_mut(stop_code) {
                stop.add_line(line.code().clone());
            }
        }
        self.model.lines.insert(line.code().clone(), line);
        self
    }

    /// Add a unidirectional bus segment.
    pub fn bus_segment(mut self, origin: StopCode, destination: StopCode, secs: u32) -> Self {
        let segment = Segment::bus(origin, destination, secs);
        self.model.segments.insert(segment.key(), segment);
        self
    }

    /// Add a walkable connection: both walk segments plus the neighbour
    /// edges on the two stops.
    pub fn walk_segments(mut self, a: StopCode, b: StopCode, secs: u32) -> Self {
        for segment in Segment::walk_pair(a, b, secs) {
            self.model.segments.insert(segment.key(), segment);
        }
        if let Some(stop) = self.model.stops.get_mut(&a) {
            stop.add_walk_neighbour(b);
        }
        if let Some(stop) = self.model.stops.get_mut(&b) {
            stop.add_walk_neighbour(a);
        }
        self
    }

    /// Finish building.
    pub fn build(self) -> NetworkModel {
        self.model
    }
}

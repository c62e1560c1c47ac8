//! Domain types for the bus itinerary planner.
//!
//! This module contains the core model types that represent validated
//! network data. All types enforce their invariants at construction time,
//! so code that receives these types can trust their validity.

mod error;
mod itinerary;
mod leg;
mod line;
mod segment;
mod stop;
mod weekday;

pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use line::{InvalidLineCode, Line, LineCode, Timetable};
pub use segment::{Segment, SegmentKind, SegmentMap};
pub use stop::{InvalidStopCode, Stop, StopCode};
pub use weekday::{InvalidWeekday, Weekday};

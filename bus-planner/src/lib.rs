//! Scheduled bus itinerary planner.
//!
//! Given an origin stop, a destination stop, a weekday, and a desired
//! arrival time at the origin, computes feasible itineraries composed of
//! scheduled bus rides and, optionally, a single walk between nearby stops.
//!
//! The network model (stops, lines, timed segments) is supplied fully
//! built and in memory; loading it is the host application's job.
//!
//! ```
//! use bus_planner::domain::{Line, LineCode, Stop, StopCode, Weekday};
//! use bus_planner::network::NetworkModel;
//! use bus_planner::planner::Planner;
//! use chrono::NaiveTime;
//!
//! let stop = |n| StopCode::new(n).unwrap();
//! let monday = Weekday::new(1).unwrap();
//!
//! let mut line = Line::new(
//!     LineCode::parse("L1I").unwrap(),
//!     "Centro",
//!     vec![stop(44), stop(43), stop(47)],
//! );
//! line.add_departure(monday, NaiveTime::from_hms_opt(10, 50, 0).unwrap());
//!
//! let network = NetworkModel::builder()
//!     .stop(Stop::new(stop(44), "Main St", 0.0, 0.0))
//!     .stop(Stop::new(stop(43), "Oak Ave", 0.0, 0.0))
//!     .stop(Stop::new(stop(47), "Market Sq", 0.0, 0.0))
//!     .line(line)
//!     .bus_segment(stop(44), stop(43), 120)
//!     .bus_segment(stop(43), stop(47), 60)
//!     .build();
//!
//! let planner = Planner::new(&network);
//! let itineraries = planner
//!     .plan(
//!         stop(44),
//!         stop(47),
//!         monday,
//!         NaiveTime::from_hms_opt(10, 35, 0).unwrap(),
//!         network.segments(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(itineraries.len(), 1);
//! assert_eq!(
//!     itineraries[0].departure_time(),
//!     NaiveTime::from_hms_opt(10, 50, 0).unwrap(),
//! );
//! ```

pub mod domain;
pub mod network;
pub mod planner;

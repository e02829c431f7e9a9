//! metroreach library entry points.
//!
//! This crate models a transit network as an immutable graph of stations,
//! lines and stops, and answers "which stations can I reach from here?" under
//! a transfer, hop or travel-time budget. Network construction happens through
//! [`TransitGraphBuilder`]; consumers should only depend on the functions
//! exported here instead of reimplementing traversal.
//!

pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod reach;
pub mod search;

pub use config::{ReachConfig, DEFAULT_DWELL_MINUTES};
pub use error::{Error, Result};
pub use geo::{
    travel_minutes, travel_minutes_at, Coordinate, DEFAULT_AVERAGE_SPEED_KMH, EARTH_RADIUS_KM,
};
pub use graph::{Line, LineId, Station, StationId, Stop, TransitGraph, TransitGraphBuilder};
pub use reach::{
    explore_costs, plan_reach, reachable, reachable_with_config, ReachCost, ReachPolicy,
    ReachRequest, ReachabilityReport, ReachedStation,
};

//! Bounded reachability over a [`TransitGraph`].
//!
//! This module provides:
//! - [`ReachPolicy`] - The budget being spent (transfers, hops or minutes)
//! - [`reachable`] - Set of stations reachable from a source within a limit
//! - [`explore_costs`] - The same search, keeping each station's minimum cost
//! - [`ReachRequest`] / [`plan_reach`] - Name-based entry point returning a
//!   serializable [`ReachabilityReport`]
//!
//! # Strategies
//!
//! Every policy maps to one variant of [`Strategy`], chosen by
//! [`select_strategy`]. All arguments are validated before any search state is
//! allocated, so a failed call never yields a partial result.
//!
//! # Example
//!
//! ```
//! use metroreach_lib::{reachable, Coordinate, ReachPolicy, TransitGraph};
//!
//! let mut builder = TransitGraph::builder();
//! builder.add_station(1, "A", Coordinate::new(47.4891, 19.0614))?;
//! builder.add_station(2, "B", Coordinate::new(47.4892, 19.0714))?;
//! builder.add_line(1, "M1", "#009EE3", false, &[1, 2])?;
//! let graph = builder.build();
//!
//! let stations = reachable(&graph, 1, ReachPolicy::StopLimit, 1)?;
//! assert!(stations.contains(&2));
//! # Ok::<(), metroreach_lib::Error>(())
//! ```

mod strategy;

pub use strategy::{select_strategy, Strategy};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ReachConfig;
use crate::error::{Error, Result};
use crate::graph::{StationId, StationIx, TransitGraph};

/// Budget applied while exploring the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReachPolicy {
    /// Maximum number of changes between lines.
    TransferLimit,
    /// Maximum number of stop-to-stop hops.
    StopLimit,
    /// Maximum cumulative travel time in minutes, including dwell.
    TimeLimit,
}

impl fmt::Display for ReachPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            ReachPolicy::TransferLimit => "transfer_limit",
            ReachPolicy::StopLimit => "stop_limit",
            ReachPolicy::TimeLimit => "time_limit",
        };
        f.write_str(value)
    }
}

impl FromStr for ReachPolicy {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "transfer_limit" | "transfers" | "transfer" => Ok(ReachPolicy::TransferLimit),
            "stop_limit" | "stops" | "hops" => Ok(ReachPolicy::StopLimit),
            "time_limit" | "time" | "minutes" => Ok(ReachPolicy::TimeLimit),
            _ => Err(Error::UnknownPolicy {
                name: value.to_string(),
            }),
        }
    }
}

/// Minimum cost at which a station was reached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReachCost {
    Transfers(u64),
    Hops(u64),
    Minutes(f64),
}

/// Name-based reachability request.
#[derive(Debug, Clone)]
pub struct ReachRequest {
    /// Display name of the source station.
    pub source: String,
    pub policy: ReachPolicy,
    pub limit: i64,
    pub config: ReachConfig,
}

impl ReachRequest {
    pub fn new(source: impl Into<String>, policy: ReachPolicy, limit: i64) -> Self {
        Self {
            source: source.into(),
            policy,
            limit,
            config: ReachConfig::default(),
        }
    }

    /// Convenience constructor for transfer-bounded requests.
    pub fn transfers(source: impl Into<String>, limit: i64) -> Self {
        Self::new(source, ReachPolicy::TransferLimit, limit)
    }

    /// Convenience constructor for hop-bounded requests.
    pub fn stops(source: impl Into<String>, limit: i64) -> Self {
        Self::new(source, ReachPolicy::StopLimit, limit)
    }

    /// Convenience constructor for time-bounded requests.
    pub fn minutes(source: impl Into<String>, limit: i64) -> Self {
        Self::new(source, ReachPolicy::TimeLimit, limit)
    }

    pub fn with_config(mut self, config: ReachConfig) -> Self {
        self.config = config;
        self
    }
}

/// One station in a [`ReachabilityReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReachedStation {
    pub id: StationId,
    pub name: String,
    pub cost: ReachCost,
}

/// Reachability result with stations ordered by cost, then id.
#[derive(Debug, Clone, Serialize)]
pub struct ReachabilityReport {
    pub policy: ReachPolicy,
    pub limit: u64,
    pub source: StationId,
    pub stations: Vec<ReachedStation>,
}

impl ReachabilityReport {
    /// Number of reachable stations, the source included.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn contains(&self, id: StationId) -> bool {
        self.stations.iter().any(|station| station.id == id)
    }

    pub fn station_ids(&self) -> Vec<StationId> {
        self.stations.iter().map(|station| station.id).collect()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Reject negative budgets.
fn validate_limit(limit: i64) -> Result<u64> {
    u64::try_from(limit).map_err(|_| Error::InvalidLimit { limit })
}

/// Resolve a station identifier to its arena index.
fn resolve_source(graph: &TransitGraph, source: StationId) -> Result<StationIx> {
    graph
        .station_index(source)
        .ok_or(Error::UnknownStationId { id: source })
}

/// Resolve a station name, suggesting close matches when it is unknown.
fn resolve_station_name(graph: &TransitGraph, name: &str) -> Result<StationId> {
    graph.station_id_by_name(name).ok_or_else(|| {
        let suggestions = graph.fuzzy_station_matches(name, 3);
        Error::UnknownStation {
            name: name.to_string(),
            suggestions,
        }
    })
}

fn explore_validated(
    graph: &TransitGraph,
    source: StationId,
    policy: ReachPolicy,
    limit: i64,
    config: &ReachConfig,
) -> Result<HashMap<StationIx, ReachCost>> {
    let limit = validate_limit(limit)?;
    if policy == ReachPolicy::TimeLimit {
        config.validate()?;
    }
    let source_ix = resolve_source(graph, source)?;

    tracing::debug!(
        "exploring from station {} with {} = {}",
        source,
        policy,
        limit
    );
    let strategy = select_strategy(policy, config);
    let costs = strategy.explore(graph, source_ix, limit);
    tracing::debug!("{} stations reachable from {}", costs.len(), source);

    Ok(costs)
}

// =============================================================================
// Main Entry Points
// =============================================================================

/// Stations reachable from `source` under `policy` with budget `limit`.
///
/// Uses the default [`ReachConfig`] for time-bounded searches. The result
/// always contains `source` and carries no ordering.
pub fn reachable(
    graph: &TransitGraph,
    source: StationId,
    policy: ReachPolicy,
    limit: i64,
) -> Result<HashSet<StationId>> {
    reachable_with_config(graph, source, policy, limit, &ReachConfig::default())
}

/// [`reachable`] with explicit dwell time and average speed.
pub fn reachable_with_config(
    graph: &TransitGraph,
    source: StationId,
    policy: ReachPolicy,
    limit: i64,
    config: &ReachConfig,
) -> Result<HashSet<StationId>> {
    let costs = explore_validated(graph, source, policy, limit, config)?;
    Ok(costs
        .into_keys()
        .map(|station| graph.station_at(station).id)
        .collect())
}

/// Minimum cost of every station reachable from `source`.
pub fn explore_costs(
    graph: &TransitGraph,
    source: StationId,
    policy: ReachPolicy,
    limit: i64,
    config: &ReachConfig,
) -> Result<HashMap<StationId, ReachCost>> {
    let costs = explore_validated(graph, source, policy, limit, config)?;
    Ok(costs
        .into_iter()
        .map(|(station, cost)| (graph.station_at(station).id, cost))
        .collect())
}

/// Resolve the request's source by name and build a report of reachable stations.
pub fn plan_reach(graph: &TransitGraph, request: &ReachRequest) -> Result<ReachabilityReport> {
    let limit = validate_limit(request.limit)?;
    let source = resolve_station_name(graph, &request.source)?;
    let costs = explore_validated(graph, source, request.policy, request.limit, &request.config)?;

    let mut stations: Vec<ReachedStation> = costs
        .into_iter()
        .map(|(ix, cost)| {
            let station = graph.station_at(ix);
            ReachedStation {
                id: station.id,
                name: station.name.clone(),
                cost,
            }
        })
        .collect();
    stations.sort_by(|a, b| compare_cost(&a.cost, &b.cost).then_with(|| a.id.cmp(&b.id)));

    Ok(ReachabilityReport {
        policy: request.policy,
        limit,
        source,
        stations,
    })
}

fn compare_cost(a: &ReachCost, b: &ReachCost) -> std::cmp::Ordering {
    match (a, b) {
        (ReachCost::Transfers(x), ReachCost::Transfers(y))
        | (ReachCost::Hops(x), ReachCost::Hops(y)) => x.cmp(y),
        (ReachCost::Minutes(x), ReachCost::Minutes(y)) => x.total_cmp(y),
        _ => std::cmp::Ordering::Equal,
    }
}

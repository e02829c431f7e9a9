//! Exploration strategies, one per reachability policy.
//!
//! Each variant answers the same question ("which stations can be settled
//! within `limit`, and at what cost?") over a different adjacency:
//!
//! - [`Strategy::Transfers`] rides whole lines for free and pays one unit per
//!   change of line, so it runs [`relax`] over `(station, line)` states.
//! - [`Strategy::Hops`] pays one unit per stop-to-stop hop and runs a FIFO
//!   [`breadth_first`] over stations.
//! - [`Strategy::Time`] pays estimated minutes per hop plus dwell and runs
//!   [`relax`] over stations with [`Minutes`] costs.

use std::collections::{HashMap, HashSet};

use crate::config::ReachConfig;
use crate::geo::travel_minutes_at;
use crate::graph::{LineIx, StationIx, TransitGraph};
use crate::search::{breadth_first, relax, Minutes};

use super::{ReachCost, ReachPolicy};

/// Search strategy selected from a [`ReachPolicy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    Transfers,
    Hops,
    Time(ReachConfig),
}

impl Strategy {
    /// The policy this strategy implements.
    pub fn policy(&self) -> ReachPolicy {
        match self {
            Strategy::Transfers => ReachPolicy::TransferLimit,
            Strategy::Hops => ReachPolicy::StopLimit,
            Strategy::Time(_) => ReachPolicy::TimeLimit,
        }
    }

    /// Minimum cost of every station reachable from `source` within `limit`.
    ///
    /// The source is always present in the result.
    pub fn explore(
        &self,
        graph: &TransitGraph,
        source: StationIx,
        limit: u64,
    ) -> HashMap<StationIx, ReachCost> {
        match self {
            Strategy::Transfers => explore_transfers(graph, source, limit),
            Strategy::Hops => explore_hops(graph, source, limit),
            Strategy::Time(config) => explore_time(graph, source, limit, config),
        }
    }
}

/// Select the strategy for a policy.
pub fn select_strategy(policy: ReachPolicy, config: &ReachConfig) -> Strategy {
    match policy {
        ReachPolicy::TransferLimit => Strategy::Transfers,
        ReachPolicy::StopLimit => Strategy::Hops,
        ReachPolicy::TimeLimit => Strategy::Time(*config),
    }
}

fn explore_transfers(
    graph: &TransitGraph,
    source: StationIx,
    limit: u64,
) -> HashMap<StationIx, ReachCost> {
    let seeds: Vec<((StationIx, LineIx), u64)> = graph
        .stops_at(source)
        .map(|stop| ((source, stop.line), 0))
        .collect();

    // A line is first ridden at the lowest transfer count any of its states
    // will ever settle at, so later states on it only contribute transfers.
    let mut ridden: HashSet<LineIx> = HashSet::new();
    let settled = relax(seeds, limit, |(station, line), _, out| {
        if ridden.insert(line) {
            out.extend(
                graph
                    .line_stations(line)
                    .filter(|&other| other != station)
                    .map(|other| ((other, line), 0)),
            );
        }
        out.extend(
            graph
                .stops_at(station)
                .filter(|stop| stop.line != line)
                .map(|stop| ((station, stop.line), 1)),
        );
    });

    let mut best: HashMap<StationIx, u64> = HashMap::with_capacity(settled.len() + 1);
    best.insert(source, 0);
    for ((station, _), transfers) in settled {
        best.entry(station)
            .and_modify(|known| *known = (*known).min(transfers))
            .or_insert(transfers);
    }

    best.into_iter()
        .map(|(station, transfers)| (station, ReachCost::Transfers(transfers)))
        .collect()
}

fn explore_hops(
    graph: &TransitGraph,
    source: StationIx,
    limit: u64,
) -> HashMap<StationIx, ReachCost> {
    breadth_first(source, limit, |station| graph.neighbours(station))
        .into_iter()
        .map(|(station, hops)| (station, ReachCost::Hops(hops)))
        .collect()
}

fn explore_time(
    graph: &TransitGraph,
    source: StationIx,
    limit: u64,
    config: &ReachConfig,
) -> HashMap<StationIx, ReachCost> {
    let dwell = config.dwell_minutes;
    let speed = config.average_speed_kmh;

    let settled = relax(
        [(source, Minutes(dwell))],
        Minutes(limit as f64),
        |station, _, out| {
            let from = graph.station_at(station).coordinate;
            for next in graph.neighbours(station) {
                let to = graph.station_at(next).coordinate;
                let minutes = travel_minutes_at(&from, &to, speed) + dwell;
                if minutes.is_nan() {
                    tracing::warn!(
                        "discarding hop {} -> {}: travel time is not a number",
                        graph.station_at(station).id,
                        graph.station_at(next).id
                    );
                    continue;
                }
                out.push((next, Minutes(minutes)));
            }
        },
    );

    settled
        .into_iter()
        .map(|(station, minutes)| (station, ReachCost::Minutes(minutes.0)))
        .collect()
}

//! Read-only transit graph over stations, lines and stops.
//!
//! Stations and lines live in arenas and refer to a shared stop table by
//! index. A [`Stop`] records its position within the line's route when the
//! graph is assembled, so "ride one stop along the line" is an O(1) lookup.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;

/// Minimum Jaro-Winkler similarity for a station name to be suggested.
const FUZZY_MATCH_THRESHOLD: f64 = 0.75;

/// Caller-chosen identifier for a station.
pub type StationId = i64;

/// Caller-chosen identifier for a line.
pub type LineId = i64;

/// Arena index of a station inside one [`TransitGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIx(usize);

/// Arena index of a line inside one [`TransitGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineIx(usize);

/// Arena index of a stop inside one [`TransitGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopIx(usize);

/// A station (graph vertex) and the stops of every line serving it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub coordinate: Coordinate,
    #[serde(skip)]
    stops: Vec<StopIx>,
}

impl Station {
    /// Stops through this station, one per serving line.
    pub fn stops(&self) -> &[StopIx] {
        &self.stops
    }
}

/// A line and its ordered route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub id: LineId,
    pub name: String,
    pub color: String,
    /// Carried for presentation layers; traversal never reads it.
    pub circular: bool,
    #[serde(skip)]
    stops: Vec<StopIx>,
}

impl Line {
    /// Ordered stops along the route.
    pub fn stops(&self) -> &[StopIx] {
        &self.stops
    }
}

/// "This line calls at this station", with the call's place in the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stop {
    pub station: StationIx,
    pub line: LineIx,
    pub position: usize,
}

/// Immutable snapshot of a transit network.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    stations: Vec<Station>,
    lines: Vec<Line>,
    stops: Vec<Stop>,
    station_index: HashMap<StationId, StationIx>,
    line_index: HashMap<LineId, LineIx>,
    name_to_id: HashMap<String, StationId>,
}

impl TransitGraph {
    pub fn builder() -> TransitGraphBuilder {
        TransitGraphBuilder::default()
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    pub fn contains_station(&self, id: StationId) -> bool {
        self.station_index.contains_key(&id)
    }

    /// Lookup a station by identifier.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.station_index.get(&id).map(|&ix| self.station_at(ix))
    }

    /// Lookup a line by identifier.
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.line_index.get(&id).map(|&ix| self.line_at(ix))
    }

    pub fn station_index(&self, id: StationId) -> Option<StationIx> {
        self.station_index.get(&id).copied()
    }

    pub fn station_at(&self, ix: StationIx) -> &Station {
        &self.stations[ix.0]
    }

    pub fn line_at(&self, ix: LineIx) -> &Line {
        &self.lines[ix.0]
    }

    pub fn stop(&self, ix: StopIx) -> &Stop {
        &self.stops[ix.0]
    }

    /// Lookup a station identifier by its case-sensitive name.
    pub fn station_id_by_name(&self, name: &str) -> Option<StationId> {
        self.name_to_id.get(name).copied()
    }

    /// Station names similar to `name`, best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .name_to_id
            .keys()
            .map(|candidate| {
                let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
                (score, candidate.as_str())
            })
            .filter(|(score, _)| *score >= FUZZY_MATCH_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, candidate)| candidate.to_string())
            .collect()
    }

    /// Stops incident to a station, one per serving line.
    pub fn stops_at(&self, station: StationIx) -> impl Iterator<Item = &Stop> + '_ {
        self.station_at(station)
            .stops
            .iter()
            .map(move |&ix| self.stop(ix))
    }

    /// The ordered stop sequence of the line a stop belongs to.
    pub fn route(&self, stop: &Stop) -> &[StopIx] {
        &self.line_at(stop.line).stops
    }

    /// Stops immediately before and after `stop` on its line.
    pub fn adjacent_stops(&self, stop: &Stop) -> (Option<&Stop>, Option<&Stop>) {
        let route = self.route(stop);
        let previous = stop
            .position
            .checked_sub(1)
            .map(|position| self.stop(route[position]));
        let next = route.get(stop.position + 1).map(|&ix| self.stop(ix));
        (previous, next)
    }

    /// Stations one hop away from `station` along any line serving it.
    ///
    /// A station shared by two lines may be yielded more than once.
    pub fn neighbours(&self, station: StationIx) -> impl Iterator<Item = StationIx> + '_ {
        self.stops_at(station).flat_map(move |stop| {
            let (previous, next) = self.adjacent_stops(stop);
            previous.into_iter().chain(next).map(|s| s.station)
        })
    }

    /// Every station served by a line, in route order.
    pub fn line_stations(&self, line: LineIx) -> impl Iterator<Item = StationIx> + '_ {
        self.line_at(line)
            .stops
            .iter()
            .map(move |&ix| self.stop(ix).station)
    }
}

/// Incrementally assembles a [`TransitGraph`], rejecting inconsistent input.
#[derive(Debug, Default)]
pub struct TransitGraphBuilder {
    graph: TransitGraph,
}

impl TransitGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with no stops yet.
    pub fn add_station(
        &mut self,
        id: StationId,
        name: impl Into<String>,
        coordinate: Coordinate,
    ) -> Result<StationIx> {
        if self.graph.station_index.contains_key(&id) {
            return Err(Error::DuplicateStation { id });
        }

        let name = name.into();
        let ix = StationIx(self.graph.stations.len());
        self.graph.name_to_id.entry(name.clone()).or_insert(id);
        self.graph.station_index.insert(id, ix);
        self.graph.stations.push(Station {
            id,
            name,
            coordinate,
            stops: Vec::new(),
        });
        Ok(ix)
    }

    /// Register a line calling at `route` in order.
    ///
    /// Every station must already be registered and may appear only once.
    /// Nothing is recorded when validation fails.
    pub fn add_line(
        &mut self,
        id: LineId,
        name: impl Into<String>,
        color: impl Into<String>,
        circular: bool,
        route: &[StationId],
    ) -> Result<LineIx> {
        if self.graph.line_index.contains_key(&id) {
            return Err(Error::DuplicateLine { id });
        }

        let mut seen = HashSet::with_capacity(route.len());
        let mut stations = Vec::with_capacity(route.len());
        for &station in route {
            let ix = self
                .graph
                .station_index(station)
                .ok_or(Error::UnknownStationId { id: station })?;
            if !seen.insert(station) {
                return Err(Error::DuplicateStop { line: id, station });
            }
            stations.push(ix);
        }

        let line_ix = LineIx(self.graph.lines.len());
        let mut line_stops = Vec::with_capacity(stations.len());
        for (position, station) in stations.into_iter().enumerate() {
            let stop_ix = StopIx(self.graph.stops.len());
            self.graph.stops.push(Stop {
                station,
                line: line_ix,
                position,
            });
            self.graph.stations[station.0].stops.push(stop_ix);
            line_stops.push(stop_ix);
        }

        self.graph.line_index.insert(id, line_ix);
        self.graph.lines.push(Line {
            id,
            name: name.into(),
            color: color.into(),
            circular,
            stops: line_stops,
        });
        Ok(line_ix)
    }

    /// Freeze the network into an immutable graph.
    pub fn build(self) -> TransitGraph {
        tracing::debug!(
            "built transit graph with {} stations, {} lines, {} stops",
            self.graph.stations.len(),
            self.graph.lines.len(),
            self.graph.stops.len()
        );
        self.graph
    }
}

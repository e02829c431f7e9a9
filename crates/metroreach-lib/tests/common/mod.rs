//! Common test utilities and fixture networks.
//!
//! Fixtures use single-letter station names; ids are assigned in letter
//! order starting from 0 so tests can refer to stations by name through
//! [`Fixture::id`].

#![allow(dead_code)]

use std::collections::HashSet;

use metroreach_lib::{Coordinate, StationId, TransitGraph};

/// A built graph plus name lookup for assertions.
pub struct Fixture {
    pub graph: TransitGraph,
}

impl Fixture {
    /// Identifier of the station with the given display name.
    pub fn id(&self, name: &str) -> StationId {
        self.graph
            .station_id_by_name(name)
            .unwrap_or_else(|| panic!("fixture has no station named {name}"))
    }

    /// Identifiers for a run of single-letter names, e.g. `"ABC"`.
    pub fn ids(&self, names: &str) -> HashSet<StationId> {
        names
            .chars()
            .map(|name| self.id(&name.to_string()))
            .collect()
    }
}

/// Install a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn build(stations: &[(&str, f64, f64)], lines: &[(&str, &str)]) -> Fixture {
    let mut builder = TransitGraph::builder();
    for (id, &(name, lat, lon)) in stations.iter().enumerate() {
        builder
            .add_station(id as StationId, name, Coordinate::new(lat, lon))
            .expect("fixture station");
    }

    let lookup = |name: char| -> StationId {
        stations
            .iter()
            .position(|(candidate, _, _)| candidate.starts_with(name))
            .expect("fixture route references known station") as StationId
    };
    for (line_id, &(line_name, route)) in lines.iter().enumerate() {
        let route: Vec<StationId> = route.chars().map(lookup).collect();
        builder
            .add_line(line_id as i64 + 1, line_name, "#000000", false, &route)
            .expect("fixture line");
    }

    Fixture {
        graph: builder.build(),
    }
}

/// Three metro lines around a city centre.
///
/// ```text
///   M1  A----B----C----D----E----F----G----H
///        \                                /
///     M2  I-------------J-------------K  M3
/// ```
///
/// M1 runs A..H, M2 runs A-I-J and M3 runs J-K-H.
pub fn metro_map() -> Fixture {
    build(
        &[
            ("A", 47.4891, 19.0614),
            ("B", 47.4892, 19.0714),
            ("C", 47.4893, 19.0814),
            ("D", 47.4894, 19.0914),
            ("E", 47.4895, 19.1014),
            ("F", 47.4896, 19.1114),
            ("G", 47.4897, 19.1214),
            ("H", 47.4898, 19.1314),
            ("I", 47.4900, 19.0714),
            ("J", 47.4910, 19.0814),
            ("K", 47.4920, 19.0914),
        ],
        &[("M1", "ABCDEFGH"), ("M2", "AIJ"), ("M3", "JKH")],
    )
}

/// Line 1 runs A-B-C-D, line 2 runs B-C-D, closely spaced.
pub fn parallel_lines() -> Fixture {
    build(
        &[
            ("A", 47.491, 19.061),
            ("B", 47.492, 19.062),
            ("C", 47.493, 19.063),
            ("D", 47.494, 19.064),
        ],
        &[("1", "ABCD"), ("2", "BCD")],
    )
}

/// A single line A-B-C on the equator, 0.01 degrees apart.
pub fn straight_line() -> Fixture {
    build(
        &[("A", 0.0, 0.00), ("B", 0.0, 0.01), ("C", 0.0, 0.02)],
        &[("L", "ABC")],
    )
}

/// Five stations on the equator, 0.01 degrees apart, on one line.
pub fn long_line() -> Fixture {
    build(
        &[
            ("A", 0.0, 0.00),
            ("B", 0.0, 0.01),
            ("C", 0.0, 0.02),
            ("D", 0.0, 0.03),
            ("E", 0.0, 0.04),
        ],
        &[("L", "ABCDE")],
    )
}

/// Line 1 runs A-B-C, line 2 runs D-B-E; they share only B.
pub fn crossing_lines() -> Fixture {
    build(
        &[
            ("A", 47.50, 19.00),
            ("B", 47.50, 19.01),
            ("C", 47.50, 19.02),
            ("D", 47.49, 19.01),
            ("E", 47.51, 19.01),
        ],
        &[("1", "ABC"), ("2", "DBE")],
    )
}

/// Lines 1 (A-B), 2 (B-C) and 3 (C-D) chained end to end.
pub fn line_chain() -> Fixture {
    build(
        &[
            ("A", 47.50, 19.00),
            ("B", 47.50, 19.01),
            ("C", 47.50, 19.02),
            ("D", 47.50, 19.03),
        ],
        &[("1", "AB"), ("2", "BC"), ("3", "CD")],
    )
}

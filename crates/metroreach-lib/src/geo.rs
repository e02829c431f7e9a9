//! Geographic helpers used to estimate travel time between stations.
//!
//! Travel time is a static estimate derived from the great-circle distance
//! between two coordinates at a fixed average speed. Invalid coordinates
//! (NaN components) are not rejected; they propagate as NaN minutes and the
//! caller owns coordinate validity.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Average network speed used when no other speed is configured.
pub const DEFAULT_AVERAGE_SPEED_KMH: f64 = 40.0;

/// Latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to another coordinate in kilometres.
    pub fn haversine_km(&self, other: &Self) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }
}

/// Estimated travel time in minutes between two coordinates at the default
/// average speed.
pub fn travel_minutes(from: &Coordinate, to: &Coordinate) -> f64 {
    travel_minutes_at(from, to, DEFAULT_AVERAGE_SPEED_KMH)
}

/// Estimated travel time in minutes at the given average speed.
pub fn travel_minutes_at(from: &Coordinate, to: &Coordinate, speed_kmh: f64) -> f64 {
    (from.haversine_km(to) / speed_kmh) * 60.0
}

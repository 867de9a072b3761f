//! Geographic point and waypoint models

use serde::{Deserialize, Serialize};

/// A geographic coordinate pair in decimal degrees.
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180]; values
/// outside those ranges are not rejected but produce meaningless geometry.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Format as a coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A named geographic point to be visited along a route.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NamedWaypoint {
    /// Display name (city, attraction, etc.)
    pub name: String,
    /// Coordinates of the waypoint
    pub location: GeoPoint,
}

impl NamedWaypoint {
    /// Create a new waypoint
    #[must_use]
    pub fn new<S: Into<String>>(name: S, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            location: GeoPoint::new(latitude, longitude),
        }
    }
}

//! Route result models and transport modes

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// Supported modes of transport with their assumed average speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Driving,
    Cycling,
    Walking,
}

impl TransportMode {
    /// Assumed average travel speed in km/h
    #[must_use]
    pub fn speed_kmh(self) -> f64 {
        match self {
            TransportMode::Driving => 40.0,
            TransportMode::Cycling => 15.0,
            TransportMode::Walking => 5.0,
        }
    }

    /// Parse a mode string, accepting routing-profile style names such as
    /// "driving-car" or "foot-walking". Unknown strings fall back to driving.
    #[must_use]
    pub fn from_profile(profile: &str) -> Self {
        let profile = profile.to_ascii_lowercase();
        if profile.starts_with("cycling") || profile.starts_with("bike") {
            TransportMode::Cycling
        } else if profile.starts_with("walking") || profile.starts_with("foot") {
            TransportMode::Walking
        } else {
            TransportMode::Driving
        }
    }
}

/// One leg of a simulated route, between two consecutive waypoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStep {
    /// Human-readable instruction, e.g. "Head to Interlaken"
    pub instruction: String,
    /// Leg distance in meters, rounded to the nearest meter
    pub distance_m: u64,
    /// Leg duration in minutes, rounded to the nearest minute
    pub duration_min: u64,
    /// Coordinates of the leg start
    pub start: GeoPoint,
    /// Coordinates of the leg end
    pub end: GeoPoint,
    /// Name of the origin waypoint
    pub from_name: String,
    /// Name of the destination waypoint
    pub to_name: String,
}

/// Aggregate result of a route simulation.
///
/// Built once per simulation call and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Total distance in kilometers, rounded to one decimal place
    pub distance_km: f64,
    /// Total duration in minutes, rounded to the nearest minute
    pub duration_min: u64,
    /// One step per consecutive waypoint pair
    pub steps: Vec<RouteStep>,
    /// Interpolated coordinates approximating the full path
    pub path: Vec<GeoPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TransportMode::Driving, 40.0)]
    #[case(TransportMode::Cycling, 15.0)]
    #[case(TransportMode::Walking, 5.0)]
    fn test_mode_speeds(#[case] mode: TransportMode, #[case] expected: f64) {
        assert_eq!(mode.speed_kmh(), expected);
    }

    #[rstest]
    #[case("driving", TransportMode::Driving)]
    #[case("driving-car", TransportMode::Driving)]
    #[case("cycling", TransportMode::Cycling)]
    #[case("cycling-regular", TransportMode::Cycling)]
    #[case("walking", TransportMode::Walking)]
    #[case("foot-walking", TransportMode::Walking)]
    #[case("hoverboard", TransportMode::Driving)]
    #[case("", TransportMode::Driving)]
    fn test_mode_parsing(#[case] profile: &str, #[case] expected: TransportMode) {
        assert_eq!(TransportMode::from_profile(profile), expected);
    }
}

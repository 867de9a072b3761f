//! Synthetic route construction from an ordered waypoint sequence
//!
//! This is a local simulation, not a road-network router: each leg is a
//! straight geodesic-approximated line between two waypoints, subdivided into
//! sampled points, with duration derived from a fixed per-mode average speed.

use tracing::debug;

use crate::Result;
use crate::error::TripPlanError;
use crate::geo::{distance_km, interpolate};
use crate::models::{NamedWaypoint, Route, RouteStep, TransportMode};

/// Target spacing between sampled path points, in kilometers.
const SAMPLE_SPACING_KM: f64 = 0.5;

/// Minimum number of segments a leg is subdivided into, so short legs still
/// produce a visible polyline.
const MIN_SEGMENTS: usize = 5;

/// Simulate a route along `points` in the given order.
///
/// Fails with a validation error when fewer than two points are supplied.
/// Totals are rounded for display: distance to one decimal kilometer,
/// duration to the nearest minute.
pub fn simulate_route(points: &[NamedWaypoint], mode: TransportMode) -> Result<Route> {
    if points.len() < 2 {
        return Err(TripPlanError::validation("at least two points required"));
    }

    let speed_kmh = mode.speed_kmh();
    let mut total_km = 0.0;
    let mut total_min = 0.0;
    let mut steps = Vec::with_capacity(points.len() - 1);
    let mut path = Vec::new();

    for (leg_index, pair) in points.windows(2).enumerate() {
        let (from, to) = (&pair[0], &pair[1]);

        let leg_km = distance_km(&from.location, &to.location);
        let leg_min = leg_km / speed_kmh * 60.0;
        total_km += leg_km;
        total_min += leg_min;

        let segments = MIN_SEGMENTS.max((leg_km / SAMPLE_SPACING_KM) as usize);
        let leg_points = interpolate(&from.location, &to.location, segments);

        // The first sampled point of every leg after the first duplicates the
        // previous leg's last point.
        let skip = usize::from(leg_index > 0);
        path.extend(leg_points.into_iter().skip(skip));

        debug!(
            from = %from.name,
            to = %to.name,
            leg_km,
            leg_min,
            segments,
            "simulated leg"
        );

        steps.push(RouteStep {
            instruction: format!("Head to {}", to.name),
            distance_m: (leg_km * 1000.0).round() as u64,
            duration_min: leg_min.round() as u64,
            start: from.location,
            end: to.location,
            from_name: from.name.clone(),
            to_name: to.name.clone(),
        });
    }

    Ok(Route {
        distance_km: (total_km * 10.0).round() / 10.0,
        duration_min: total_min.round() as u64,
        steps,
        path,
    })
}

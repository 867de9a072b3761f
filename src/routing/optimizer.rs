//! Waypoint ordering via a nearest-neighbor heuristic

use tracing::debug;

use crate::geo::distance_km;
use crate::models::{GeoPoint, NamedWaypoint};

/// Order waypoints by repeatedly visiting the closest unvisited one, starting
/// from `start`. Returns a permutation of the input.
///
/// This is a greedy tour-construction heuristic, not a TSP solver; the result
/// carries no optimality guarantee. O(n²) in the number of waypoints, which is
/// fine for the handful of stops a trip plan contains. Exact distance ties go
/// to the earliest remaining waypoint.
#[must_use]
pub fn nearest_neighbor_order(start: &GeoPoint, waypoints: &[NamedWaypoint]) -> Vec<NamedWaypoint> {
    if waypoints.len() <= 1 {
        return waypoints.to_vec();
    }

    let mut remaining = waypoints.to_vec();
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut position = *start;

    while !remaining.is_empty() {
        let mut nearest_index = 0;
        let mut nearest_distance = distance_km(&position, &remaining[0].location);

        for (index, waypoint) in remaining.iter().enumerate().skip(1) {
            let candidate = distance_km(&position, &waypoint.location);
            if candidate < nearest_distance {
                nearest_index = index;
                nearest_distance = candidate;
            }
        }

        // Order-preserving removal keeps the first-occurrence tie-break stable
        // across iterations.
        let next = remaining.remove(nearest_index);
        debug!(waypoint = %next.name, distance_km = nearest_distance, "selected next waypoint");
        position = next.location;
        ordered.push(next);
    }

    ordered
}

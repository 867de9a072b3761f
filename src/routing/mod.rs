//! Route planning module
//!
//! This module provides the local route-planning functionality:
//! - Nearest-neighbor waypoint ordering
//! - Synthetic route simulation (legs, interpolated path, totals)
//! - Display formatting for distances and durations

pub mod format;
pub mod optimizer;
pub mod simulator;

pub use format::{format_distance, format_duration};
pub use optimizer::nearest_neighbor_order;
pub use simulator::simulate_route;

use tracing::info;

use crate::Result;
use crate::error::TripPlanError;
use crate::models::{NamedWaypoint, Route, TransportMode};

/// Calculate a route along `points` in order, with the transport mode given
/// as a profile string ("driving", "cycling-regular", "foot-walking", ...).
/// Unknown profiles fall back to driving.
pub fn calculate_route(points: &[NamedWaypoint], transport_mode: &str) -> Result<Route> {
    if points.len() < 2 {
        return Err(TripPlanError::validation("at least two points required"));
    }

    let mode = TransportMode::from_profile(transport_mode);
    info!(
        waypoints = points.len(),
        ?mode,
        "calculating simulated route"
    );
    simulate_route(points, mode)
}

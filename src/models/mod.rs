//! Core data models for trip planning

pub mod location;
pub mod route;

pub use location::{GeoPoint, NamedWaypoint};
pub use route::{Route, RouteStep, TransportMode};

//! `TripPlan` - AI-assisted travel itinerary and route planning utilities
//!
//! This library provides the client-side core for a travel-planning
//! application: generative itinerary text and place recommendations, plus
//! local route simulation (greedy waypoint ordering, great-circle legs,
//! step-by-step directions).

pub mod ai;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod routing;

// Re-export core types for public API
pub use ai::{AiRecommendation, GeminiClient, ItineraryProvider, ItineraryRequest};
pub use config::TripPlanConfig;
pub use error::TripPlanError;
pub use models::{GeoPoint, NamedWaypoint, Route, RouteStep, TransportMode};
pub use routing::{calculate_route, format_distance, format_duration, nearest_neighbor_order};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TripPlanError>;

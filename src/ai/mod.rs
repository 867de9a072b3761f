//! Generative-language glue for itineraries and place recommendations
//!
//! This module talks to a hosted text-generation model. Itinerary requests
//! surface upstream failures to the caller; recommendation requests degrade
//! to an empty list instead, since a missing suggestion list should never
//! break a trip plan.

pub mod gemini;
pub mod parse;

pub use gemini::GeminiClient;
pub use parse::extract_recommendations;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::models::NamedWaypoint;

/// A place recommendation parsed from generated text.
///
/// The model is asked for these fields but nothing guarantees it supplies
/// them, so every field tolerates being absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiRecommendation {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "estimatedDistance")]
    pub estimated_distance: Option<String>,
}

/// Parameters for an itinerary generation request.
#[derive(Debug, Clone)]
pub struct ItineraryRequest {
    /// Destination city or region
    pub destination: String,
    /// Trip length in days
    pub days: u32,
    /// Traveler interests woven into the prompt
    pub interests: Vec<String>,
}

/// Interface over the generative endpoint, so callers can substitute a stub
/// in tests.
pub trait ItineraryProvider {
    /// Generate free-form itinerary text. Upstream failures propagate.
    async fn generate_itinerary(&self, request: &ItineraryRequest) -> Result<String>;

    /// Suggest places near a waypoint. Failures degrade to an empty list.
    async fn recommend_places(&self, near: &NamedWaypoint, category: &str)
    -> Vec<AiRecommendation>;
}

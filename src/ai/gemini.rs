//! Client for a Gemini-style `generateContent` endpoint

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

use super::parse::extract_recommendations;
use super::{AiRecommendation, ItineraryProvider, ItineraryRequest};
use crate::Result;
use crate::config::AiConfig;
use crate::error::TripPlanError;
use crate::models::NamedWaypoint;

/// Generative-language API client.
///
/// The endpoint, model and credential are injected through [`AiConfig`];
/// a single non-retried POST is issued per request.
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GeminiClient {
    /// Create a new client from configuration. Fails when no API key is
    /// configured.
    pub fn new(config: &AiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| TripPlanError::config("AI API key is not configured"))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent("TripPlan/0.1.0")
            .build()
            .map_err(|e| TripPlanError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Send a prompt to the `generateContent` endpoint and return the first
    /// candidate's text verbatim.
    async fn generate_content(&self, prompt: String) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| TripPlanError::api(format!("Request to generative endpoint failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(TripPlanError::api(format!(
                "Generative endpoint returned {status}: {error_text}"
            )));
        }

        let envelope: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| TripPlanError::api(format!("Malformed generateContent response: {e}")))?;

        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| TripPlanError::api("No candidates in generateContent response"))
    }
}

impl ItineraryProvider for GeminiClient {
    async fn generate_itinerary(&self, request: &ItineraryRequest) -> Result<String> {
        info!(
            destination = %request.destination,
            days = request.days,
            "requesting itinerary"
        );

        let interests = if request.interests.is_empty() {
            "general sightseeing".to_string()
        } else {
            request.interests.join(", ")
        };

        let prompt = format!(
            "Create a {}-day travel itinerary for {}. The traveler is interested in: {}. \
             Provide a day-by-day plan with specific places to visit and practical tips.",
            request.days, request.destination, interests
        );

        self.generate_content(prompt).await.inspect_err(|err| {
            error!(error = %err, "itinerary generation failed");
        })
    }

    async fn recommend_places(
        &self,
        near: &NamedWaypoint,
        category: &str,
    ) -> Vec<AiRecommendation> {
        let prompt = format!(
            "List up to 5 {} recommendations near {} (coordinates {}). \
             Answer with only a JSON array of objects with the fields \
             \"name\", \"description\", \"category\" and \"estimated_distance\".",
            category,
            near.name,
            near.location.format_coordinates()
        );

        match self.generate_content(prompt).await {
            Ok(text) => {
                let recommendations = extract_recommendations(&text);
                info!(
                    count = recommendations.len(),
                    near = %near.name,
                    "parsed place recommendations"
                );
                recommendations
            }
            Err(err) => {
                warn!(error = %err, near = %near.name, "recommendation request failed, returning no suggestions");
                Vec::new()
            }
        }
    }
}

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use tripplan::ai::{GeminiClient, ItineraryProvider, ItineraryRequest};
use tripplan::config::TripPlanConfig;
use tripplan::models::NamedWaypoint;
use tripplan::routing::{
    calculate_route, format_distance, format_duration, nearest_neighbor_order,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = TripPlanConfig::load()?;

    // A small Bernese Oberland day trip as a demonstration
    let start = NamedWaypoint::new("Bern", 46.9480, 7.4474);
    let stops = vec![
        NamedWaypoint::new("Grindelwald", 46.6244, 8.0411),
        NamedWaypoint::new("Thun", 46.7580, 7.6280),
        NamedWaypoint::new("Interlaken", 46.6863, 7.8632),
    ];

    let mut ordered = nearest_neighbor_order(&start.location, &stops);
    ordered.insert(0, start);

    let route = calculate_route(&ordered, &config.defaults.transport_mode)?;

    println!(
        "Route over {} stops: {} in {}",
        ordered.len(),
        format_distance(route.distance_km * 1000.0),
        format_duration(route.duration_min as f64)
    );
    for step in &route.steps {
        println!(
            "  {} ({}, {})",
            step.instruction,
            format_distance(step.distance_m as f64),
            format_duration(step.duration_min as f64)
        );
    }

    // Itinerary text needs a configured API key; skip it quietly otherwise
    if config.ai.api_key.is_some() {
        let client = GeminiClient::new(&config.ai)?;
        let request = ItineraryRequest {
            destination: "Bernese Oberland".to_string(),
            days: 2,
            interests: vec!["hiking".to_string(), "local food".to_string()],
        };
        match client.generate_itinerary(&request).await {
            Ok(itinerary) => println!("\n{itinerary}"),
            Err(err) => eprintln!("{}", err.user_message()),
        }
    } else {
        println!("\nSet TRIPPLAN_AI__API_KEY to also generate an itinerary.");
    }

    Ok(())
}

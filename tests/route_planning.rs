//! End-to-end library tests for route planning

use tripplan::ai::extract_recommendations;
use tripplan::error::TripPlanError;
use tripplan::models::{GeoPoint, NamedWaypoint, TransportMode};
use tripplan::routing::{
    calculate_route, format_distance, format_duration, nearest_neighbor_order, simulate_route,
};

/// The worked example from the project requirements: one degree of
/// equatorial longitude driven at 40 km/h.
#[test]
fn test_equatorial_degree_drive() {
    let points = vec![
        NamedWaypoint::new("A", 0.0, 0.0),
        NamedWaypoint::new("B", 0.0, 1.0),
    ];

    let route = calculate_route(&points, "driving-car").expect("route should simulate");

    assert_eq!(route.steps.len(), 1);
    assert_eq!(route.steps[0].instruction, "Head to B");
    assert!((route.distance_km - 111.2).abs() < 0.1);
    assert_eq!(route.duration_min, 167);
}

#[test]
fn test_optimize_then_simulate_round_trip() {
    let start = NamedWaypoint::new("Bern", 46.9480, 7.4474);
    let stops = vec![
        NamedWaypoint::new("Grindelwald", 46.6244, 8.0411),
        NamedWaypoint::new("Thun", 46.7580, 7.6280),
        NamedWaypoint::new("Interlaken", 46.6863, 7.8632),
    ];

    let mut ordered = nearest_neighbor_order(&start.location, &stops);
    ordered.insert(0, start.clone());

    // Thun is nearest to Bern, then Interlaken, then Grindelwald
    let names: Vec<&str> = ordered.iter().map(|w| w.name.as_str()).collect();
    assert_eq!(names, vec!["Bern", "Thun", "Interlaken", "Grindelwald"]);

    let route = simulate_route(&ordered, TransportMode::Driving).expect("route should simulate");
    assert_eq!(route.steps.len(), 3);
    assert_eq!(route.path.first().copied(), Some(start.location));
    assert_eq!(
        route.path.last().copied(),
        Some(GeoPoint::new(46.6244, 8.0411))
    );
    assert!(route.distance_km > 0.0);
    assert!(route.duration_min > 0);

    // Display helpers accept the simulated totals directly
    let distance_text = format_distance(route.distance_km * 1000.0);
    assert!(distance_text.ends_with(" km"));
    let duration_text = format_duration(route.duration_min as f64);
    assert!(duration_text.ends_with(" min"));
}

#[test]
fn test_single_point_is_rejected() {
    let points = vec![NamedWaypoint::new("Alone", 47.0, 8.0)];
    let err = calculate_route(&points, "driving").unwrap_err();
    assert!(matches!(err, TripPlanError::Validation { .. }));
    assert!(err.to_string().contains("at least two points required"));
}

#[test]
fn test_recommendation_parsing_never_errors_on_prose() {
    // The degrade-to-empty contract holds for arbitrary model chatter
    let replies = [
        "I'm sorry, I can't provide recommendations right now.",
        "Here is a list: 1. The Old Mill 2. Tower Bridge",
        "{\"name\": \"not an array\"}",
        "",
    ];
    for reply in replies {
        assert!(extract_recommendations(reply).is_empty());
    }
}

#[test]
fn test_recommendation_parsing_extracts_embedded_array() {
    let reply = concat!(
        "Of course! Based on your location, try these:\n",
        "[\n",
        "  {\"name\": \"Lakeside Cafe\", \"description\": \"Coffee with a view\", ",
        "\"category\": \"food\", \"estimated_distance\": \"300 m\"},\n",
        "  {\"name\": \"Castle Hill\", \"description\": \"Short scenic climb\", ",
        "\"category\": \"sightseeing\", \"estimated_distance\": \"1.1 km\"}\n",
        "]\n",
        "Have a great day!"
    );

    let recommendations = extract_recommendations(reply);
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].name, "Lakeside Cafe");
    assert_eq!(recommendations[1].category, "sightseeing");
}

//! Great-circle geometry helpers

use haversine::{Location as HaversineLocation, Units, distance};

use crate::models::GeoPoint;

/// Great-circle distance between two points in kilometers (haversine formula,
/// Earth radius 6371 km). Symmetric; zero iff the points are identical.
#[must_use]
pub fn distance_km(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let from_haversine = HaversineLocation {
        latitude: from.latitude,
        longitude: from.longitude,
    };
    let to_haversine = HaversineLocation {
        latitude: to.latitude,
        longitude: to.longitude,
    };
    distance(from_haversine, to_haversine, Units::Kilometers)
}

/// Sample `segments + 1` evenly spaced points from `from` to `to` inclusive,
/// interpolating linearly in latitude/longitude. `segments` must be >= 1.
#[must_use]
pub fn interpolate(from: &GeoPoint, to: &GeoPoint, segments: usize) -> Vec<GeoPoint> {
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..segments {
        let t = i as f64 / segments as f64;
        points.push(GeoPoint::new(
            from.latitude + (to.latitude - from.latitude) * t,
            from.longitude + (to.longitude - from.longitude) * t,
        ));
    }
    // Push the endpoint itself so the path ends exactly on the waypoint
    points.push(*to);
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_identical_points_is_zero() {
        let point = GeoPoint::new(46.8182, 8.2275);
        assert_eq!(distance_km(&point, &point), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(46.8182, 8.2275);
        let b = GeoPoint::new(47.3769, 8.5417);
        assert!((distance_km(&a, &b) - distance_km(&b, &a)).abs() < 1e-9);
    }

    #[test]
    fn test_distance_one_degree_of_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        // One degree of arc on a 6371 km sphere
        assert!((distance_km(&a, &b) - 111.19).abs() < 0.1);
    }

    #[test]
    fn test_interpolate_includes_both_endpoints() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(1.0, 2.0);
        let points = interpolate(&a, &b, 4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], a);
        assert_eq!(points[4], b);
        assert!((points[2].latitude - 0.5).abs() < 1e-9);
        assert!((points[2].longitude - 1.0).abs() < 1e-9);
    }
}

//! Spatial query utilities for distance calculations.
//!
//! Uses the Haversine formula for accurate distances on Earth's surface.

use std::sync::Arc;

use geo::{HaversineDistance, Point};

use crate::models::types::{Bike, BikeError, LatLng, Result};

/// Reorder a position into the `[lng, lat]` convention of mapping libraries.
pub fn to_lng_lat(pos: LatLng) -> [f64; 2] {
    [pos.lng, pos.lat]
}

fn to_point(pos: LatLng) -> Point {
    Point::new(pos.lng, pos.lat)
}

/// Calculate Haversine distance between two positions in kilometres.
///
/// Zero for identical positions, symmetric, non-negative for all inputs.
pub fn haversine_distance_km(a: LatLng, b: LatLng) -> f64 {
    to_point(a).haversine_distance(&to_point(b)) / 1000.0
}

/// The bike closest to `reference`.
///
/// Ties break towards the earlier bike: only a strictly smaller distance
/// replaces the current best. Fails with [`BikeError::NoBikes`] when `bikes`
/// is empty so the caller cannot mistake it for "no bike nearby".
pub fn nearest_bike(bikes: &[Arc<Bike>], reference: LatLng) -> Result<Arc<Bike>> {
    let mut candidates = bikes.iter();
    let Some(first) = candidates.next() else {
        return Err(BikeError::NoBikes);
    };

    let mut best = first;
    let mut best_distance = haversine_distance_km(best.pos, reference);
    for bike in candidates {
        let distance = haversine_distance_km(bike.pos, reference);
        if distance < best_distance {
            best = bike;
            best_distance = distance;
        }
    }

    Ok(best.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::BikeProvider;
    use approx::assert_abs_diff_eq;

    fn bike(id: &str, lat: f64, lng: f64) -> Arc<Bike> {
        Arc::new(Bike {
            id: id.into(),
            provider: BikeProvider::Byke,
            pos: LatLng::new(lat, lng),
        })
    }

    #[test]
    fn test_distance_identical_points_is_zero() {
        let a = LatLng::new(52.516293, 13.379651);
        assert_abs_diff_eq!(haversine_distance_km(a, a), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_symmetry() {
        let a = LatLng::new(52.516332, 13.378367);
        let b = LatLng::new(48.137154, 11.576124);

        let there = haversine_distance_km(a, b);
        let back = haversine_distance_km(b, a);
        assert!(there > 0.0);
        assert_abs_diff_eq!(there, back, epsilon = 1e-9);
    }

    #[test]
    fn test_distance_known_magnitude() {
        // Distance from NYC to LA is approximately 3,936 km
        let nyc = LatLng::new(40.7128, -74.0060);
        let la = LatLng::new(34.0522, -118.2437);

        let dist = haversine_distance_km(nyc, la);
        assert!((dist - 3_936.0).abs() < 50.0); // Within 50km
    }

    #[test]
    fn test_distance_antipodal_points() {
        let a = LatLng::new(0.0, 0.0);
        let b = LatLng::new(0.0, 180.0);

        let dist = haversine_distance_km(a, b);
        assert!(dist.is_finite());
        assert!(dist > 19_000.0); // Half the Earth's circumference
    }

    #[test]
    fn test_to_lng_lat_reorders() {
        assert_eq!(to_lng_lat(LatLng::new(52.5, 13.4)), [13.4, 52.5]);
    }

    #[test]
    fn test_nearest_picks_minimum() {
        let bikes = vec![
            bike("far", 52.53, 13.41),
            bike("near", 52.5164, 13.3795),
            bike("mid", 52.52, 13.39),
        ];
        let reference = LatLng::new(52.516332, 13.378367);

        let closest = nearest_bike(&bikes, reference).unwrap();
        assert_eq!(closest.id.as_str(), "near");

        // No element is strictly closer than the winner
        let winner_distance = haversine_distance_km(closest.pos, reference);
        for candidate in &bikes {
            assert!(haversine_distance_km(candidate.pos, reference) >= winner_distance);
        }
    }

    #[test]
    fn test_nearest_single_element() {
        let bikes = vec![bike("only", 52.5, 13.4)];

        // Reference point does not matter for a single candidate
        let closest = nearest_bike(&bikes, LatLng::new(-33.9, 151.2)).unwrap();
        assert_eq!(closest.id.as_str(), "only");
    }

    #[test]
    fn test_nearest_tie_first_wins() {
        // Same latitude, mirrored longitudes: identical distances
        let bikes = vec![bike("west", 52.5, 13.39), bike("east", 52.5, 13.41)];

        let closest = nearest_bike(&bikes, LatLng::new(52.5, 13.4)).unwrap();
        assert_eq!(closest.id.as_str(), "west");
    }

    #[test]
    fn test_nearest_empty_input_errors() {
        let result = nearest_bike(&[], LatLng::new(52.5, 13.4));
        assert!(matches!(result, Err(BikeError::NoBikes)));
    }
}

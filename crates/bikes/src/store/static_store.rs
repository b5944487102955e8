//! In-memory bicycle store backed by the bundled seed collection.
//!
//! This is the core implementation that holds all bicycle records in memory
//! and answers radius queries with a linear scan. The seed set is small and
//! bounded, so no spatial index is kept; scanning keeps results in seed order.

use std::collections::HashMap;
use std::sync::Arc;

use crate::identifiers::BikeIdentifier;
use crate::models::traits::BikeStore;
use crate::models::types::{Bike, BikeError, LatLng, Result};
use crate::seed;
use crate::spatial::queries::haversine_distance_km;

/// In-memory bike store.
///
/// This type is cheap to clone since all records are stored in `Arc`s.
#[derive(Clone)]
pub struct StaticBikeStore {
    // Records in seed order; queries preserve this order
    bikes: Vec<Arc<Bike>>,

    // Lookup map
    bike_map: HashMap<BikeIdentifier, Arc<Bike>>,
}

impl StaticBikeStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            bikes: Vec::new(),
            bike_map: HashMap::new(),
        }
    }

    /// Build a store from raw records.
    ///
    /// The seed collection is injected rather than read from a module-level
    /// singleton so tests can run against synthetic sets.
    pub fn from_data(bikes: Vec<Bike>) -> Self {
        let bikes: Vec<Arc<Bike>> = bikes.into_iter().map(Arc::new).collect();

        let bike_map: HashMap<_, _> = bikes
            .iter()
            .map(|b| (b.id.clone(), b.clone()))
            .collect();

        Self { bikes, bike_map }
    }

    /// Build a store from the bundled seed collection.
    pub fn bundled() -> Result<Self> {
        let bikes = seed::load()?;
        tracing::debug!(count = bikes.len(), "loaded bundled bike seed");
        Ok(Self::from_data(bikes))
    }
}

impl Default for StaticBikeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BikeStore for StaticBikeStore {
    fn get_bike(&self, id: &BikeIdentifier) -> Option<Arc<Bike>> {
        self.bike_map.get(id).cloned()
    }

    fn all_bikes(&self) -> Vec<Arc<Bike>> {
        self.bikes.clone()
    }

    fn bikes_within_radius(&self, center: LatLng, radius_km: f64) -> Result<Vec<Arc<Bike>>> {
        if radius_km < 0.0 || !radius_km.is_finite() {
            return Err(BikeError::InvalidRadius(radius_km));
        }

        let hits: Vec<Arc<Bike>> = self
            .bikes
            .iter()
            .filter(|bike| haversine_distance_km(center, bike.pos) < radius_km)
            .cloned()
            .collect();

        tracing::debug!(hits = hits.len(), radius_km, "radius query");
        Ok(hits)
    }
}

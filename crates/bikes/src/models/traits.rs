//! Core trait for bicycle data access.
//!
//! The trait defines the read-only interface the presentation layer consumes.
//! Implementations can be in-memory, database-backed, or remote.

use std::sync::Arc;

use crate::identifiers::BikeIdentifier;
use crate::models::types::{Bike, LatLng, Result};

/// Read-only source of shared bicycles.
pub trait BikeStore: Send + Sync {
    /// Look up a single bike by identifier.
    fn get_bike(&self, id: &BikeIdentifier) -> Option<Arc<Bike>>;

    /// Every bike in the seed collection, in seed order.
    fn all_bikes(&self) -> Vec<Arc<Bike>>;

    /// All bikes strictly closer than `radius_km` to `center`, in seed order.
    ///
    /// Fails with [`BikeError::InvalidRadius`](crate::models::types::BikeError)
    /// if the radius is negative or not finite.
    fn bikes_within_radius(&self, center: LatLng, radius_km: f64) -> Result<Vec<Arc<Bike>>>;
}

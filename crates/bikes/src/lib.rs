//! # nearby-bikes
//!
//! Shared-bicycle lookup for a map application.
//!
//! ## Features
//!
//! - **Static seed data**: All bicycle records live in an in-memory store
//! - **Radius queries**: Find every bike within a distance of a location
//! - **Nearest bike**: Pick the closest bike to a reference point
//! - **Map features**: Convert query results into drawable GeoJSON markers
//!
//! ## Example
//!
//! ```
//! use nearby_bikes::prelude::*;
//!
//! // Create a store with test data
//! let bike = Bike {
//!     id: "b-1".into(),
//!     provider: BikeProvider::Byke,
//!     pos: LatLng::new(52.516293, 13.379651),
//! };
//!
//! let store = StaticBikeStore::from_data(vec![bike]);
//!
//! // Query bikes around a location
//! let here = LatLng::new(52.516332, 13.378367);
//! let nearby = store.bikes_within_radius(here, 1.0).unwrap(); // 1km radius
//! assert_eq!(nearby.len(), 1);
//!
//! // The closest one is the origin for the directions request
//! let closest = nearest_bike(&nearby, here).unwrap();
//! assert_eq!(closest.id.as_str(), "b-1");
//! ```

pub mod features;
pub mod identifiers;
pub mod models;
pub mod seed;
pub mod spatial;
pub mod store;

// Re-exports for convenience
pub mod prelude {
    pub use crate::features::{to_point_features, PointFeature};
    pub use crate::identifiers::BikeIdentifier;
    pub use crate::models::{traits::*, types::*};
    pub use crate::seed::DEFAULT_SEARCH_RADIUS_KM;
    pub use crate::spatial::queries::{haversine_distance_km, nearest_bike, to_lng_lat};
    pub use crate::store::static_store::StaticBikeStore;
}

pub use prelude::*;

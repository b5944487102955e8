//! Bicycle data models, types, and traits.

pub mod traits;
pub mod types;

// Re-exports for convenience
pub use traits::BikeStore;
pub use types::{Bike, BikeError, BikeProvider, LatLng, Result};

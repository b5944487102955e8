//! Geometric primitives shared by the store and the presentation layer.

pub mod queries;

pub use queries::{haversine_distance_km, nearest_bike, to_lng_lat};

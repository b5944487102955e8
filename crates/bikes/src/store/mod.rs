//! Bicycle stores.

pub mod static_store;

pub use static_store::StaticBikeStore;

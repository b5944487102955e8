//! The bundled seed collection.
//!
//! A fixed set of bicycle records shipped with the application; read-only for
//! the lifetime of a session. There is no external source and no write path.

use crate::models::types::{Bike, Result};

/// Radius in kilometres the application searches around a location.
pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 1.0;

static SEED_JSON: &str = include_str!("../data/bikes.json");

/// Parse the bundled seed document.
pub fn load() -> Result<Vec<Bike>> {
    let bikes: Vec<Bike> = serde_json::from_str(SEED_JSON)?;
    Ok(bikes)
}

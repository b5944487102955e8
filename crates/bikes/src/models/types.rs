//! Core data types and enums for bicycle data.

use serde::{Deserialize, Serialize};

use crate::identifiers::BikeIdentifier;

// ============================================================================
// Enums
// ============================================================================

/// Bike-share operators with bundled marker icons.
///
/// Providers are plain data: rendering looks up the marker icon by name,
/// nothing dispatches on them.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BikeProvider {
    Byke,
    Mobike,
    Donkey,
    Nextbike,
}

impl BikeProvider {
    /// Key of the marker icon the map loads for this provider.
    pub fn icon_key(&self) -> String {
        format!("{self}Icon")
    }
}

// ============================================================================
// Data Structures
// ============================================================================

/// A geographic position as latitude/longitude degrees.
///
/// Valid latitudes are [-90, 90] and longitudes [-180, 180]. Constructors do
/// not validate; callers own the ranges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A single shared bicycle from the seed collection.
///
/// Records are created at load time and never mutated. The serde shape
/// matches the seed schema: `{"id": ..., "provider": ..., "pos": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bike {
    pub id: BikeIdentifier,
    pub provider: BikeProvider,
    pub pos: LatLng,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum BikeError {
    #[error("Invalid search radius: {0} km")]
    InvalidRadius(f64),

    #[error("No bikes to pick the nearest from")]
    NoBikes,

    #[error("Invalid seed data: {0}")]
    InvalidSeed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BikeError>;

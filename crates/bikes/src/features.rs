//! Map-drawable point features derived from bicycle records.
//!
//! The rendering layer draws one marker per feature and expects exactly four
//! properties: `name`, `provider`, `icon`, and `description`. Features are
//! derived on demand and never stored.

use std::sync::Arc;

use geojson::{Feature, Geometry, JsonObject, Value};
use serde::{Deserialize, Serialize};

use crate::models::types::{Bike, BikeProvider};
use crate::spatial::queries::to_lng_lat;

/// A single map marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointFeature {
    /// Position as `[lng, lat]`, the convention of mapping libraries.
    pub position: [f64; 2],
    /// Bike identifier, shown in the marker popup.
    pub name: String,
    pub provider: BikeProvider,
    /// Icon key the renderer resolves, e.g. `"bykeIcon"`.
    pub icon: String,
    /// Human-readable label, e.g. `"byke: B1"`.
    pub description: String,
}

impl From<&Bike> for PointFeature {
    fn from(bike: &Bike) -> Self {
        Self {
            position: to_lng_lat(bike.pos),
            name: bike.id.as_str().to_owned(),
            provider: bike.provider,
            icon: bike.provider.icon_key(),
            description: format!("{}: {}", bike.provider, bike.id),
        }
    }
}

impl PointFeature {
    /// Render the feature as GeoJSON for the map source.
    pub fn to_geojson(&self) -> Feature {
        let mut properties = JsonObject::new();
        properties.insert("name".into(), self.name.clone().into());
        properties.insert("provider".into(), self.provider.to_string().into());
        properties.insert("icon".into(), self.icon.clone().into());
        properties.insert("description".into(), self.description.clone().into());

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Point(self.position.to_vec()))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// Convert bikes into markers, preserving input order.
pub fn to_point_features(bikes: &[Arc<Bike>]) -> Vec<PointFeature> {
    bikes
        .iter()
        .map(|bike| PointFeature::from(bike.as_ref()))
        .collect()
}

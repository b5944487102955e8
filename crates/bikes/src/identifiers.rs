//! Type-safe, efficient identifiers for bicycle records.
//!
//! Identifiers use Arc<str> for cheap cloning and minimal memory overhead.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Unique identifier of a single shared bicycle.
#[derive(Clone, Debug)]
pub struct BikeIdentifier(Arc<str>);

impl BikeIdentifier {
    pub fn new(s: impl AsRef<str>) -> Self {
        Self(s.as_ref().into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for BikeIdentifier {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for BikeIdentifier {}

impl Hash for BikeIdentifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl fmt::Display for BikeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BikeIdentifier {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BikeIdentifier {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Serialized as a plain string so the seed schema stays flat.
impl Serialize for BikeIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BikeIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::new)
    }
}

use serde::{Deserialize, Serialize};

/// identifies a zone of a zone collection, taken from a configurable
/// property of the zone's GeoJSON feature.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ZoneId(pub String);

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

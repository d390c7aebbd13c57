use geo::MultiPolygon;

use super::ZoneId;

/// feature properties of a zone.
pub type ZoneAttributes = serde_json::Map<String, serde_json::Value>;

#[derive(Clone, Debug)]
pub struct Zone {
    pub id: ZoneId,
    pub geometry: MultiPolygon<f64>,
    pub attributes: ZoneAttributes,
}

impl Zone {
    pub fn new(id: ZoneId, geometry: MultiPolygon<f64>, attributes: ZoneAttributes) -> Self {
        Self {
            id,
            geometry,
            attributes,
        }
    }

    /// reads an attribute as a string. numbers and booleans are rendered
    /// with their JSON representation, null and missing attributes are None.
    pub fn attribute_as_string(&self, name: &str) -> Option<String> {
        match self.attributes.get(name)? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

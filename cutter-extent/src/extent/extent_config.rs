use serde::{Deserialize, Serialize};

use super::{AllInExtent, ConditionalShapeExtent, CutExtent, RadialExtent, ShapeExtent};
use crate::zone::{default_zone_id_column, Zone, ZoneIndex};
use crate::ExtentError;

/// user-facing description of an extent, typically a table in a TOML file:
///
/// ```toml
/// [extent]
/// type = "radial"
/// x = 2683000.0
/// y = 1247000.0
/// radius = 15000.0
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExtentConfig {
    AllIn,
    Radial {
        x: f64,
        y: f64,
        radius: f64,
    },
    Shape {
        /// GeoJSON FeatureCollection of polygonal zones
        zone_file: String,
        #[serde(default = "default_zone_id_column")]
        zone_id_column: String,
    },
    /// zones whose `attribute` is one of `values`
    ConditionalShape {
        zone_file: String,
        #[serde(default = "default_zone_id_column")]
        zone_id_column: String,
        attribute: String,
        values: Vec<String>,
    },
}

impl ExtentConfig {
    pub fn build(&self) -> Result<Box<dyn CutExtent>, ExtentError> {
        match self {
            ExtentConfig::AllIn => Ok(Box::new(AllInExtent)),
            ExtentConfig::Radial { x, y, radius } => {
                if !radius.is_finite() || *radius < 0.0 {
                    return Err(ExtentError::InvalidConfig(format!(
                        "radius must be a non-negative number, found {radius}"
                    )));
                }
                Ok(Box::new(RadialExtent::new(*x, *y, *radius)))
            }
            ExtentConfig::Shape {
                zone_file,
                zone_id_column,
            } => {
                let zones = ZoneIndex::from_geojson_file(zone_file, zone_id_column)?;
                Ok(Box::new(ShapeExtent::new(zones)))
            }
            ExtentConfig::ConditionalShape {
                zone_file,
                zone_id_column,
                attribute,
                values,
            } => {
                if values.is_empty() {
                    return Err(ExtentError::InvalidConfig(format!(
                        "conditional shape extent on '{attribute}' has no accepted values"
                    )));
                }
                let zones = ZoneIndex::from_geojson_file(zone_file, zone_id_column)?;
                let attribute = attribute.clone();
                let values = values.clone();
                let predicate = move |zone: &Zone| {
                    zone.attribute_as_string(&attribute)
                        .map(|v| values.contains(&v))
                        .unwrap_or(false)
                };
                Ok(Box::new(ConditionalShapeExtent::new(zones, predicate)))
            }
        }
    }
}

use std::path::Path;

use geo::Geometry;

use super::{geometry_ops, Zone, ZoneId};
use crate::ExtentError;

/// column name used for zone ids when none is configured.
pub fn default_zone_id_column() -> String {
    "zone_id".to_string()
}

/// reads zonal geometries, ZoneIds and feature properties from a GeoJSON
/// FeatureCollection. zone ids may be stored as strings or numbers.
pub fn read_zones<P: AsRef<Path>>(
    geometry_input_file: P,
    zone_id_col: &str,
) -> Result<Vec<Zone>, ExtentError> {
    let geom_path = geometry_input_file.as_ref();
    let geojson_str = std::fs::read_to_string(geom_path).map_err(|e| ExtentError::Read {
        path: geom_path.to_path_buf(),
        source: e,
    })?;
    let geojson_value = geojson_str
        .parse::<geojson::GeoJson>()
        .map_err(|e| ExtentError::Parse {
            message: e.to_string(),
            path: geom_path.to_path_buf(),
        })?;

    let feature_collection = match geojson_value {
        geojson::GeoJson::FeatureCollection(fc) => fc,
        _ => {
            return Err(ExtentError::Parse {
                path: geom_path.to_path_buf(),
                message: "geojson in file must be a FeatureCollection".to_string(),
            })
        }
    };

    let mut zones = Vec::with_capacity(feature_collection.features.len());
    for (n, feature) in feature_collection.features.into_iter().enumerate() {
        let deserialize_error = |col: &str, message: String| ExtentError::Deserialize {
            col: col.to_string(),
            path: geom_path.to_path_buf(),
            message,
        };
        let zone_id = match feature.property(zone_id_col) {
            None => {
                return Err(deserialize_error(
                    zone_id_col,
                    format!("column missing in feature {n}"),
                ))
            }
            Some(serde_json::Value::String(s)) => ZoneId(s.clone()),
            Some(serde_json::Value::Number(num)) => ZoneId(num.to_string()),
            Some(other) => {
                return Err(deserialize_error(
                    zone_id_col,
                    format!("cannot read '{other}' as a zone id in feature {n}"),
                ))
            }
        };

        let geom_json = feature
            .geometry
            .ok_or_else(|| deserialize_error("geometry", format!("no geometry in feature {n}")))?;
        let geometry: Geometry<f64> = geom_json.try_into().map_err(|e| {
            deserialize_error(
                "geometry",
                format!("failure decoding GeoJson geometry to geo-types for ZoneId {zone_id}: {e}"),
            )
        })?;
        let multipolygon = geometry_ops::try_into_multipolygon(geometry)
            .map_err(|e| deserialize_error("geometry", format!("ZoneId {zone_id}: {e}")))?;

        let attributes = feature.properties.unwrap_or_default();
        zones.push(Zone::new(zone_id, multipolygon, attributes));
    }
    log::info!(
        "read {} zones from {}",
        zones.len(),
        geom_path.to_string_lossy()
    );
    Ok(zones)
}

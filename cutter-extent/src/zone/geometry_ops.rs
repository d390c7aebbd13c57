use geo::{BoundingRect, Geometry, MultiPolygon};
use rstar::AABB;

/// zones are areal. polygons are lifted into a single-member multipolygon,
/// every other geometry type is rejected.
pub fn try_into_multipolygon(geometry: Geometry<f64>) -> Result<MultiPolygon<f64>, String> {
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        Geometry::MultiPolygon(mp) => Ok(mp),
        Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
        Geometry::Triangle(t) => Ok(MultiPolygon::new(vec![t.to_polygon()])),
        other => Err(format!(
            "zone geometry must be POLYGON or MULTIPOLYGON, found {}",
            geometry_type_name(&other)
        )),
    }
}

/// creates a spatial index envelope from the bounding box of a zone geometry.
/// empty geometries have no bounding box, so the result may be None.
pub fn get_envelope(geometry: &MultiPolygon<f64>) -> Option<AABB<[f64; 2]>> {
    geometry
        .bounding_rect()
        .map(|rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]))
}

fn geometry_type_name(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) => "LINE",
        Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        Geometry::Rect(_) => "RECT",
        Geometry::Triangle(_) => "TRIANGLE",
    }
}

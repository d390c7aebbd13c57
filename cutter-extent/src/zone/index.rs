use std::path::Path;

use geo::{Contains, Point};
use rstar::{RTree, RTreeObject, AABB};

use super::{geometry_ops, read_zones, Zone};
use crate::ExtentError;

/// bounding box of one zone, pointing back into the zone list.
#[derive(Clone, Debug)]
struct ZoneEnvelope {
    index: usize,
    envelope: AABB<[f64; 2]>,
}

impl RTreeObject for ZoneEnvelope {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// spatial index over a zone collection. candidate zones are found by their
/// bounding boxes in an R-tree, then confirmed with an exact polygon test.
pub struct ZoneIndex {
    zones: Vec<Zone>,
    rtree: RTree<ZoneEnvelope>,
}

impl ZoneIndex {
    pub fn new(zones: Vec<Zone>) -> Result<Self, ExtentError> {
        let mut envelopes = Vec::with_capacity(zones.len());
        for (index, zone) in zones.iter().enumerate() {
            let envelope = geometry_ops::get_envelope(&zone.geometry).ok_or_else(|| {
                ExtentError::Build(format!("zone {} has an empty geometry", zone.id))
            })?;
            envelopes.push(ZoneEnvelope { index, envelope });
        }
        let rtree = RTree::bulk_load(envelopes);
        log::debug!("built zone index with {} zones", zones.len());
        Ok(Self { zones, rtree })
    }

    /// loads and indexes the zones of a GeoJSON FeatureCollection.
    pub fn from_geojson_file<P: AsRef<Path>>(
        path: P,
        zone_id_column: &str,
    ) -> Result<Self, ExtentError> {
        let zones = read_zones(path, zone_id_column)?;
        Self::new(zones)
    }

    /// finds a zone containing the point. if zones overlap, any one of the
    /// containing zones may be returned.
    pub fn find_zone(&self, x: f64, y: f64) -> Option<&Zone> {
        let point = Point::new(x, y);
        self.rtree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .map(|candidate| &self.zones[candidate.index])
            .find(|zone| zone.geometry.contains(&point))
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

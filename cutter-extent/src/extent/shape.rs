use super::CutExtent;
use crate::zone::ZoneIndex;

/// inside any zone of a zone collection.
pub struct ShapeExtent {
    zones: ZoneIndex,
}

impl ShapeExtent {
    pub fn new(zones: ZoneIndex) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &ZoneIndex {
        &self.zones
    }
}

impl CutExtent for ShapeExtent {
    fn is_inside(&self, x: f64, y: f64) -> bool {
        self.zones.find_zone(x, y).is_some()
    }
}

use super::CutExtent;
use crate::zone::{Zone, ZoneIndex};

/// inside a zone whose attributes satisfy a predicate. a point that falls in
/// no zone is outside. when zones overlap, only the zone returned by the
/// index is tested.
pub struct ConditionalShapeExtent<P>
where
    P: Fn(&Zone) -> bool,
{
    zones: ZoneIndex,
    predicate: P,
}

impl<P> ConditionalShapeExtent<P>
where
    P: Fn(&Zone) -> bool,
{
    pub fn new(zones: ZoneIndex, predicate: P) -> Self {
        Self { zones, predicate }
    }
}

impl<P> CutExtent for ConditionalShapeExtent<P>
where
    P: Fn(&Zone) -> bool,
{
    fn is_inside(&self, x: f64, y: f64) -> bool {
        self.zones
            .find_zone(x, y)
            .map(|zone| (self.predicate)(zone))
            .unwrap_or(false)
    }
}

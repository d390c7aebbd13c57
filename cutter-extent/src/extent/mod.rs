//! spatial predicates deciding whether a coordinate belongs to the region
//! a scenario is cut around.
mod all_in;
mod conditional_shape;
mod extent_config;
mod radial;
mod shape;

pub use all_in::AllInExtent;
pub use conditional_shape::ConditionalShapeExtent;
pub use extent_config::ExtentConfig;
pub use radial::RadialExtent;
pub use shape::ShapeExtent;

use geo::Coord;

/// a pure predicate over 2D coordinates. implementations hold no mutable
/// state and may be shared between the passes of a cut.
pub trait CutExtent {
    fn is_inside(&self, x: f64, y: f64) -> bool;

    fn is_inside_coord(&self, coord: &Coord<f64>) -> bool {
        self.is_inside(coord.x, coord.y)
    }
}

impl<T: CutExtent + ?Sized> CutExtent for Box<T> {
    fn is_inside(&self, x: f64, y: f64) -> bool {
        (**self).is_inside(x, y)
    }
}

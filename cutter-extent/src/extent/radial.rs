use geo::Coord;

use super::CutExtent;

/// a circle around a center point. points on the circle are inside.
#[derive(Clone, Copy, Debug)]
pub struct RadialExtent {
    center: Coord<f64>,
    radius_squared: f64,
}

impl RadialExtent {
    pub fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Coord { x, y },
            radius_squared: radius * radius,
        }
    }

    pub fn center(&self) -> Coord<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius_squared.sqrt()
    }
}

impl CutExtent for RadialExtent {
    fn is_inside(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center.x;
        let dy = y - self.center.y;
        dx * dx + dy * dy <= self.radius_squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radial_boundary_is_inside() {
        let extent = RadialExtent::new(0.0, 2500.0, 4000.0);
        assert!(extent.is_inside(0.0, 0.0));
        assert!(extent.is_inside(0.0, 6500.0));
        assert!(extent.is_inside_coord(&Coord { x: 0.0, y: 5000.0 }));
        assert!(!extent.is_inside(5000.0, 0.0));
        assert!(!extent.is_inside(0.0, 6500.1));
    }

    #[test]
    fn test_zero_radius() {
        let extent = RadialExtent::new(2500.0, 2500.0, 0.0);
        assert!(extent.is_inside(2500.0, 2500.0));
        assert!(!extent.is_inside(2500.0, 2500.001));
    }
}

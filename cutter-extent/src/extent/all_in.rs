use super::CutExtent;

/// keeps everything. cutting with this extent reproduces the scenario.
#[derive(Clone, Copy, Debug, Default)]
pub struct AllInExtent;

impl CutExtent for AllInExtent {
    fn is_inside(&self, _x: f64, _y: f64) -> bool {
        true
    }
}

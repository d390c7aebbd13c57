use geo::Coord;
use indexmap::IndexSet;

use cutter_core::model::{PersonId, Scenario};
use cutter_extent::extent::CutExtent;

use super::NodeInsideCache;

/// working state of a single cut. the source scenario is only read, the
/// destination scenario is built up by the cut passes.
pub struct CutSession<'a> {
    pub source: &'a Scenario,
    pub dest: Scenario,
    pub extent: &'a dyn CutExtent,
    /// extent used for transit stops. currently always the cut extent.
    pub extended_extent: &'a dyn CutExtent,
    /// persons to keep, in population order
    pub relevant: IndexSet<PersonId>,
    pub fully_inside: IndexSet<PersonId>,
    pub partially_inside: IndexSet<PersonId>,
    pub node_inside: NodeInsideCache,
    /// coordinates of every activity of every relevant person
    pub relevant_activity_locations: Vec<Coord<f64>>,
    /// links added to the destination network for kept transit routes
    pub patched_links: usize,
}

impl<'a> CutSession<'a> {
    pub fn new(source: &'a Scenario, extent: &'a dyn CutExtent) -> Self {
        Self {
            source,
            dest: Scenario::default(),
            extent,
            extended_extent: extent,
            relevant: IndexSet::new(),
            fully_inside: IndexSet::new(),
            partially_inside: IndexSet::new(),
            node_inside: NodeInsideCache::new(),
            relevant_activity_locations: Vec::new(),
            patched_links: 0,
        }
    }
}

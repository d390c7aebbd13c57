use std::collections::HashMap;

use cutter_core::model::{Network, Node, NodeId, ScenarioError};
use cutter_extent::extent::CutExtent;

/// remembers, per network node, whether the node lies inside the extent of
/// the current cut. nodes are shared by many links and routes, so each one is
/// tested against the extent at most once.
#[derive(Debug, Default)]
pub struct NodeInsideCache {
    inside: HashMap<NodeId, bool>,
}

impl NodeInsideCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_inside(&mut self, node: &Node, extent: &dyn CutExtent) -> bool {
        if let Some(inside) = self.inside.get(&node.id) {
            return *inside;
        }
        let inside = extent.is_inside_coord(&node.coord);
        self.inside.insert(node.id.clone(), inside);
        inside
    }

    /// looks up the node in the network before testing it.
    pub fn is_node_inside(
        &mut self,
        node_id: &NodeId,
        network: &Network,
        extent: &dyn CutExtent,
    ) -> Result<bool, ScenarioError> {
        if let Some(inside) = self.inside.get(node_id) {
            return Ok(*inside);
        }
        let node = network.get_node(node_id)?;
        Ok(self.is_inside(node, extent))
    }

    /// number of nodes tested so far.
    pub fn len(&self) -> usize {
        self.inside.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inside.is_empty()
    }
}

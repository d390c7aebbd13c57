use geo::{Coord, LineString};
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use super::{Attributes, LinkId, NodeId, ScenarioError};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub coord: Coord<f64>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl Node {
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self {
            id,
            coord: Coord { x, y },
            attributes: Attributes::new(),
        }
    }
}

/// a directed road or rail link between two nodes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Link {
    pub id: LinkId,
    pub from_node: NodeId,
    pub to_node: NodeId,
    pub allowed_modes: IndexSet<String>,
    /// flow capacity in vehicles per hour
    pub capacity: f64,
    /// free flow speed in meters per second
    pub freespeed: f64,
    /// length in meters
    pub length: f64,
    pub lanes: f64,
    /// rendering polyline, if the source network carries one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<LineString<f64>>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// road network graph. nodes and links are keyed by id and keep the order
/// in which they were inserted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Network {
    pub nodes: IndexMap<NodeId, Node>,
    pub links: IndexMap<LinkId, Link>,
}

impl Network {
    pub fn get_node(&self, node_id: &NodeId) -> Result<&Node, ScenarioError> {
        self.nodes
            .get(node_id)
            .ok_or_else(|| ScenarioError::MissingNode(node_id.clone()))
    }

    pub fn get_link(&self, link_id: &LinkId) -> Result<&Link, ScenarioError> {
        self.links
            .get(link_id)
            .ok_or_else(|| ScenarioError::MissingLink(link_id.clone()))
    }

    /// the from- and to-node of a link.
    pub fn link_nodes(&self, link: &Link) -> Result<(&Node, &Node), ScenarioError> {
        let from = self.get_node(&link.from_node)?;
        let to = self.get_node(&link.to_node)?;
        Ok((from, to))
    }

    pub fn contains_link(&self, link_id: &LinkId) -> bool {
        self.links.contains_key(link_id)
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id.clone(), node);
    }

    pub fn add_link(&mut self, link: Link) {
        self.links.insert(link.id.clone(), link);
    }
}

use cutter_core::model::{Attributes, Link, Network, Node, ScenarioError, Upsert};

use super::{CutError, CutSession};

/// keeps every link with at least one endpoint inside the extent.
pub fn cut_network(session: &mut CutSession) -> Result<(), CutError> {
    let source = &session.source.network;
    for link in source.links.values() {
        let (from, to) = source.link_nodes(link)?;
        let from_inside = session.node_inside.is_inside(from, session.extent);
        let to_inside = session.node_inside.is_inside(to, session.extent);
        if from_inside || to_inside {
            copy_link(link, source, &mut session.dest.network)?;
        }
    }
    log::info!(
        "kept {} of {} links and {} of {} nodes",
        session.dest.network.links.len(),
        source.links.len(),
        session.dest.network.nodes.len(),
        source.nodes.len()
    );
    Ok(())
}

/// copies a link and, on first reference, its endpoints into the destination
/// network. only the attributes that define the link for simulation are
/// copied: modes, capacity, freespeed, length and lanes. geometry and free-form
/// attributes are dropped.
pub fn copy_link(link: &Link, source: &Network, dest: &mut Network) -> Result<(), ScenarioError> {
    for node_id in [&link.from_node, &link.to_node] {
        dest.nodes.upsert_with(node_id, || {
            source
                .get_node(node_id)
                .map(|node| Node::new(node.id.clone(), node.coord.x, node.coord.y))
        })?;
    }
    dest.links.upsert_with(&link.id, || {
        Ok::<_, ScenarioError>(Link {
            id: link.id.clone(),
            from_node: link.from_node.clone(),
            to_node: link.to_node.clone(),
            allowed_modes: link.allowed_modes.clone(),
            capacity: link.capacity,
            freespeed: link.freespeed,
            length: link.length,
            lanes: link.lanes,
            geometry: None,
            attributes: Attributes::new(),
        })
    })?;
    Ok(())
}

use serde::{Deserialize, Serialize};

use super::LinkId;

/// a route over the network, recorded as its start link, the links driven in
/// between, and its end link.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NetworkRoute {
    pub start_link_id: LinkId,
    #[serde(default)]
    pub link_ids: Vec<LinkId>,
    pub end_link_id: LinkId,
}

impl NetworkRoute {
    pub fn new(start_link_id: LinkId, link_ids: Vec<LinkId>, end_link_id: LinkId) -> Self {
        Self {
            start_link_id,
            link_ids,
            end_link_id,
        }
    }

    /// iterates the full link sequence: start link, intermediate links, end link.
    /// a route that starts and ends on the same link yields that link twice.
    pub fn link_sequence(&self) -> impl Iterator<Item = &LinkId> + '_ {
        std::iter::once(&self.start_link_id)
            .chain(self.link_ids.iter())
            .chain(std::iter::once(&self.end_link_id))
    }
}

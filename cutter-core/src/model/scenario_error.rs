use super::{LineId, LinkId, NodeId, PersonId, RouteId, StopId, VehicleId, VehicleTypeId};

/// a scenario graph referenced an entity that does not exist. cuts treat
/// these as fatal: the source scenario is expected to be fully resolvable.
#[derive(thiserror::Error, Debug)]
pub enum ScenarioError {
    #[error("node '{0}' not found in network")]
    MissingNode(NodeId),
    #[error("link '{0}' not found in network")]
    MissingLink(LinkId),
    #[error("stop facility '{0}' not found in transit schedule")]
    MissingStop(StopId),
    #[error("transit line '{0}' not found in transit schedule")]
    MissingLine(LineId),
    #[error("transit route '{route_id}' not found on line '{line_id}'")]
    MissingRoute { line_id: LineId, route_id: RouteId },
    #[error("vehicle '{0}' not found in vehicle fleet")]
    MissingVehicle(VehicleId),
    #[error("vehicle type '{0}' not found in vehicle fleet")]
    MissingVehicleType(VehicleTypeId),
    #[error("person '{0}' has a selected plan index {1} but only {2} plans")]
    InvalidSelectedPlan(PersonId, usize, usize),
}

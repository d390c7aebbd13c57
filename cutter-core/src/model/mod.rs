mod attributes;
mod id;
mod network;
mod network_route;
mod population;
mod scenario;
mod scenario_error;
mod transit_schedule;
mod upsert_ops;
mod vehicles;

pub use attributes::{Attributes, SUBPOPULATION_ATTRIBUTE};
pub use id::{
    DepartureId, LineId, LinkId, NodeId, PersonId, RouteId, StopId, VehicleId, VehicleTypeId,
};
pub use network::{Link, Network, Node};
pub use network_route::NetworkRoute;
pub use population::{
    Activity, Leg, Person, Plan, PlanElement, Population, Route, TransitPassengerRoute,
};
pub use scenario::Scenario;
pub use scenario_error::ScenarioError;
pub use transit_schedule::{
    Departure, MinimalTransferTime, MinimalTransferTimes, TransitLine, TransitRoute,
    TransitRouteStop, TransitSchedule, TransitStopFacility,
};
pub use upsert_ops::Upsert;
pub use vehicles::{
    DoorOperationMode, EngineInformation, Vehicle, VehicleCapacity, VehicleType, Vehicles,
};

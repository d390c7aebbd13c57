//! a six node grid with two transit lines and a handful of persons, cut
//! around the western column of nodes.
//!
//! ```text
//!  1 ---- 3 ---- 5      y = 5000
//!  |      |      |
//!  0 ---- 2 ---- 4      y = 0
//! x=0   x=5000  x=10000
//! ```
//!
//! every edge is a pair of links. the extent is a circle of radius 4000 around
//! (0, 2500), so only nodes 0 and 1 are inside.
use cutter_core::model::{
    Activity, Departure, DepartureId, Leg, LineId, Link, LinkId, Network, NetworkRoute, Node,
    NodeId, Person, PersonId, Plan, PlanElement, Population, Route, RouteId, Scenario, StopId,
    TransitLine, TransitPassengerRoute, TransitRoute, TransitRouteStop, TransitSchedule,
    TransitStopFacility, Vehicle, VehicleCapacity, VehicleId, VehicleType, VehicleTypeId,
    Vehicles, SUBPOPULATION_ATTRIBUTE,
};
use cutter_extent::extent::RadialExtent;
use geo::Coord;
use indexmap::{IndexMap, IndexSet};

pub fn extent() -> RadialExtent {
    RadialExtent::new(0.0, 2500.0, 4000.0)
}

pub fn scenario() -> Scenario {
    Scenario::new(network(), transit_schedule(), transit_vehicles(), population())
}

pub fn network() -> Network {
    let mut network = Network::default();
    let coords = [
        (0.0, 0.0),
        (0.0, 5000.0),
        (5000.0, 0.0),
        (5000.0, 5000.0),
        (10000.0, 0.0),
        (10000.0, 5000.0),
    ];
    for (idx, (x, y)) in coords.into_iter().enumerate() {
        network.add_node(Node::new(NodeId::new(idx.to_string()), x, y));
    }
    let links = [
        (0, 1),
        (1, 0),
        (2, 3),
        (3, 2),
        (4, 5),
        (5, 4),
        (0, 2),
        (2, 0),
        (2, 4),
        (4, 2),
        (1, 3),
        (3, 1),
        (3, 5),
        (5, 3),
    ];
    for (idx, (from, to)) in links.into_iter().enumerate() {
        let mut link = Link {
            id: LinkId::new(idx.to_string()),
            from_node: NodeId::new(from.to_string()),
            to_node: NodeId::new(to.to_string()),
            allowed_modes: IndexSet::from(["car".to_string()]),
            capacity: 2000.0,
            freespeed: 44.44,
            length: 5000.0,
            lanes: 1.0,
            geometry: None,
            attributes: Default::default(),
        };
        if idx == 6 {
            link.allowed_modes.insert("bus".to_string());
            link.attributes
                .insert("osm:highway".to_string(), serde_json::json!("primary"));
        }
        network.add_link(link);
    }
    network
}

fn stop(id: &str, x: f64, y: f64) -> TransitStopFacility {
    TransitStopFacility {
        id: StopId::from(id),
        coord: Coord { x, y },
        name: Some(format!("stop {id}")),
        link_id: None,
        stop_area_id: None,
        attributes: Default::default(),
    }
}

fn route_stop(id: &str, offset: f64) -> TransitRouteStop {
    TransitRouteStop {
        stop_id: StopId::from(id),
        arrival_offset: Some(offset),
        departure_offset: Some(offset),
        await_departure: true,
    }
}

fn transit_route(
    id: &str,
    mode: &str,
    route: NetworkRoute,
    stops: Vec<TransitRouteStop>,
    vehicle_id: &str,
) -> TransitRoute {
    let departure = Departure {
        id: DepartureId::from("D1"),
        departure_time: 8.0 * 3600.0,
        vehicle_id: VehicleId::from(vehicle_id),
        attributes: Default::default(),
    };
    TransitRoute {
        id: RouteId::from(id),
        transport_mode: mode.to_string(),
        description: None,
        route,
        stops,
        departures: IndexMap::from([(departure.id.clone(), departure)]),
        attributes: Default::default(),
    }
}

/// line L1 runs 0 -> 2 -> 4 along the bottom and serves the extent at S0.
/// line L2 runs 4 -> 5 -> 3 and never touches the extent.
pub fn transit_schedule() -> TransitSchedule {
    let mut schedule = TransitSchedule::default();
    let mut s4 = stop("S4", 10000.0, 0.0);
    s4.link_id = Some(LinkId::from("8"));
    for facility in [
        stop("S0", 0.0, 0.0),
        stop("S2", 5000.0, 0.0),
        s4,
        stop("S5", 10000.0, 5000.0),
    ] {
        schedule.facilities.insert(facility.id.clone(), facility);
    }

    let r1 = transit_route(
        "R1",
        "bus",
        NetworkRoute::new(LinkId::from("6"), vec![LinkId::from("8")], LinkId::from("4")),
        vec![
            route_stop("S0", 0.0),
            route_stop("S2", 300.0),
            route_stop("S4", 600.0),
        ],
        "V1",
    );
    let r2 = transit_route(
        "R2",
        "tram",
        NetworkRoute::new(LinkId::from("4"), vec![], LinkId::from("13")),
        vec![route_stop("S4", 0.0), route_stop("S5", 400.0)],
        "V2",
    );
    for (line_id, route) in [("L1", r1), ("L2", r2)] {
        let line = TransitLine {
            id: LineId::from(line_id),
            name: Some(format!("line {line_id}")),
            routes: IndexMap::from([(route.id.clone(), route)]),
            attributes: Default::default(),
        };
        schedule.lines.insert(line.id.clone(), line);
    }

    let mtt = &mut schedule.minimal_transfer_times;
    mtt.set(StopId::from("S0"), StopId::from("S2"), 120.0);
    mtt.set(StopId::from("S2"), StopId::from("S4"), 60.0);
    mtt.set(StopId::from("S4"), StopId::from("S5"), 90.0);
    schedule
}

pub fn transit_vehicles() -> Vehicles {
    let mut vehicles = Vehicles::default();
    for (type_id, seats) in [("bus", 40), ("tram", 90)] {
        let vehicle_type = VehicleType {
            id: VehicleTypeId::from(type_id),
            description: Some(format!("a {type_id}")),
            capacity: VehicleCapacity {
                seats,
                standing_room: seats / 2,
                ..Default::default()
            },
            length: 18.0,
            width: 2.5,
            maximum_velocity: 22.2,
            pcu_equivalents: 2.5,
            flow_efficiency_factor: 1.0,
            door_operation_mode: Default::default(),
            access_time: 1.0,
            egress_time: 1.0,
            engine_information: None,
            attributes: Default::default(),
        };
        vehicles
            .vehicle_types
            .insert(vehicle_type.id.clone(), vehicle_type);
    }
    for (vehicle_id, type_id) in [("V1", "bus"), ("V2", "tram")] {
        let vehicle = Vehicle {
            id: VehicleId::from(vehicle_id),
            vehicle_type_id: VehicleTypeId::from(type_id),
            attributes: Default::default(),
        };
        vehicles.vehicles.insert(vehicle.id.clone(), vehicle);
    }
    vehicles
}

fn car_leg(start: &str, links: &[&str], end: &str) -> PlanElement {
    let route = NetworkRoute::new(
        LinkId::from(start),
        links.iter().map(|l| LinkId::from(*l)).collect(),
        LinkId::from(end),
    );
    PlanElement::Leg(Leg::new("car", Some(Route::Network(route))))
}

fn pt_leg(start_link: &str, end_link: &str, access: &str, egress: &str) -> PlanElement {
    let route = TransitPassengerRoute {
        start_link_id: LinkId::from(start_link),
        end_link_id: LinkId::from(end_link),
        access_stop_id: StopId::from(access),
        egress_stop_id: StopId::from(egress),
        line_id: LineId::from("L1"),
        route_id: RouteId::from("R1"),
    };
    PlanElement::Leg(Leg::new("pt", Some(Route::TransitPassenger(route))))
}

fn act(activity_type: &str, x: f64, y: f64) -> PlanElement {
    PlanElement::Activity(Activity::new(activity_type, x, y))
}

fn person(id: &str, elements: Vec<PlanElement>) -> Person {
    let plan = Plan {
        score: None,
        elements,
    };
    let mut person = Person::with_plan(PersonId::from(id), plan);
    person.attributes.insert(
        SUBPOPULATION_ATTRIBUTE.to_string(),
        serde_json::json!("regular"),
    );
    person
}

/// - agent_001 lives and works inside
/// - agent_002 commutes from inside to outside, seen from its activities
/// - agent_003 has outside activities but drives through node 0
/// - agent_004 stays on the east side
/// - agent_005 rides line L1 on its outside section
/// - agent_006 boards line L1 at S0 inside the extent
pub fn population() -> Population {
    let mut population = Population::default();
    population.add_person(person(
        "agent_001",
        vec![
            act("home", 0.0, 0.0),
            car_leg("0", &[], "1"),
            act("work", 0.0, 5000.0),
        ],
    ));
    population.add_person(person(
        "agent_002",
        vec![
            act("home", 0.0, 0.0),
            PlanElement::Leg(Leg::new("walk", None)),
            act("work", 5000.0, 0.0),
        ],
    ));
    population.add_person(person(
        "agent_003",
        vec![
            act("home", 5000.0, 0.0),
            car_leg("7", &["0"], "10"),
            act("work", 5000.0, 5000.0),
        ],
    ));
    population.add_person(person(
        "agent_004",
        vec![
            act("home", 10000.0, 0.0),
            car_leg("4", &[], "4"),
            act("work", 10000.0, 5000.0),
        ],
    ));
    population.add_person(person(
        "agent_005",
        vec![
            act("home", 5000.0, 0.0),
            pt_leg("8", "4", "S2", "S4"),
            act("work", 10000.0, 0.0),
        ],
    ));
    population.add_person(person(
        "agent_006",
        vec![
            act("home", 5000.0, 5000.0),
            pt_leg("6", "8", "S0", "S4"),
            act("work", 10000.0, 0.0),
        ],
    ));
    population
}

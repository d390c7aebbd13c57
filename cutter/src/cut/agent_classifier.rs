use kdam::tqdm;

use cutter_core::model::{
    NetworkRoute, Person, Plan, Route, Scenario, ScenarioError, TransitPassengerRoute,
};
use cutter_extent::extent::CutExtent;

use super::{CutError, CutSession, NodeInsideCache};

/// whether a plan has touched the inside and/or the outside of the extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AgentState {
    pub has_inside: bool,
    pub has_outside: bool,
}

/// classification of a person with respect to the extent of a cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentRelevance {
    /// never inside, not kept
    Irrelevant,
    FullyInside,
    PartiallyInside,
}

impl AgentState {
    fn record(&mut self, inside: bool) {
        if inside {
            self.has_inside = true;
        } else {
            self.has_outside = true;
        }
    }

    fn merge(&mut self, other: AgentState) {
        self.has_inside |= other.has_inside;
        self.has_outside |= other.has_outside;
    }

    /// both inside and outside have been seen, nothing can change the outcome.
    pub fn is_mixed(&self) -> bool {
        self.has_inside && self.has_outside
    }

    pub fn relevance(&self) -> AgentRelevance {
        match (self.has_inside, self.has_outside) {
            (false, _) => AgentRelevance::Irrelevant,
            (true, false) => AgentRelevance::FullyInside,
            (true, true) => AgentRelevance::PartiallyInside,
        }
    }
}

/// classifies a person by their selected plan. persons without a selected
/// plan are irrelevant.
pub fn classify_person(
    person: &Person,
    source: &Scenario,
    extent: &dyn CutExtent,
    node_inside: &mut NodeInsideCache,
) -> Result<AgentRelevance, ScenarioError> {
    match person.selected_plan()? {
        None => Ok(AgentRelevance::Irrelevant),
        Some(plan) => {
            let state = classify_plan(plan, source, extent, node_inside)?;
            Ok(state.relevance())
        }
    }
}

/// activity locations decide first. only if they do not already show both
/// an inside and an outside location are the routes of the plan walked.
pub fn classify_plan(
    plan: &Plan,
    source: &Scenario,
    extent: &dyn CutExtent,
    node_inside: &mut NodeInsideCache,
) -> Result<AgentState, ScenarioError> {
    let mut state = state_by_activities(plan, extent);
    if !state.is_mixed() {
        state_by_routes(plan, source, extent, node_inside, &mut state)?;
    }
    Ok(state)
}

fn state_by_activities(plan: &Plan, extent: &dyn CutExtent) -> AgentState {
    let mut state = AgentState::default();
    for activity in plan.activities() {
        state.record(extent.is_inside_coord(&activity.coord));
        if state.is_mixed() {
            break;
        }
    }
    state
}

fn state_by_routes(
    plan: &Plan,
    source: &Scenario,
    extent: &dyn CutExtent,
    node_inside: &mut NodeInsideCache,
    state: &mut AgentState,
) -> Result<(), ScenarioError> {
    for leg in plan.legs() {
        match &leg.route {
            Some(Route::Network(route)) => {
                walk_network_route(route, source, extent, node_inside, state)?
            }
            Some(Route::TransitPassenger(route)) => {
                let segment = walk_transit_route(route, source, extent, node_inside)?;
                state.merge(segment);
            }
            // only the endpoints of generic routes are known, and those are
            // covered by the activities
            Some(Route::Generic { .. }) | None => {}
        }
        if state.is_mixed() {
            break;
        }
    }
    Ok(())
}

/// start link's from- and to-node, then the to-node of every further link.
fn walk_network_route(
    route: &NetworkRoute,
    source: &Scenario,
    extent: &dyn CutExtent,
    node_inside: &mut NodeInsideCache,
    state: &mut AgentState,
) -> Result<(), ScenarioError> {
    let network = &source.network;
    let start_link = network.get_link(&route.start_link_id)?;
    state.record(node_inside.is_node_inside(&start_link.from_node, network, extent)?);
    for link_id in route.link_sequence() {
        let link = network.get_link(link_id)?;
        state.record(node_inside.is_node_inside(&link.to_node, network, extent)?);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BoardingState {
    NotBoarded,
    Boarded,
}

/// walks the vehicle's network route of the ride and classifies the nodes
/// passed between boarding and alighting. on looping routes the start link
/// may be passed more than once; every boarding restarts the ride.
fn walk_transit_route(
    ride: &TransitPassengerRoute,
    source: &Scenario,
    extent: &dyn CutExtent,
    node_inside: &mut NodeInsideCache,
) -> Result<AgentState, ScenarioError> {
    let network = &source.network;
    let transit_route = source
        .transit_schedule
        .get_route(&ride.line_id, &ride.route_id)?;
    let mut segment = AgentState::default();
    let mut boarding = BoardingState::NotBoarded;
    for link_id in transit_route.route.link_sequence() {
        if link_id == &ride.start_link_id {
            segment = AgentState::default();
            boarding = BoardingState::Boarded;
            let link = network.get_link(link_id)?;
            segment.record(node_inside.is_node_inside(&link.from_node, network, extent)?);
        }
        if boarding == BoardingState::Boarded {
            let link = network.get_link(link_id)?;
            segment.record(node_inside.is_node_inside(&link.to_node, network, extent)?);
            if link_id == &ride.end_link_id {
                break;
            }
        }
    }
    Ok(segment)
}

/// classifies every person of the source population and records the
/// result in the session.
pub fn classify_population(session: &mut CutSession) -> Result<(), CutError> {
    let source = session.source;
    let persons = &source.population.persons;
    let bar_iter = tqdm!(
        persons.values(),
        total = persons.len(),
        desc = "classify persons"
    );
    for person in bar_iter {
        let relevance =
            classify_person(person, source, session.extent, &mut session.node_inside)?;
        match relevance {
            AgentRelevance::Irrelevant => continue,
            AgentRelevance::FullyInside => {
                session.fully_inside.insert(person.id.clone());
            }
            AgentRelevance::PartiallyInside => {
                session.partially_inside.insert(person.id.clone());
            }
        }
        session.relevant.insert(person.id.clone());
        if let Some(plan) = person.selected_plan()? {
            session
                .relevant_activity_locations
                .extend(plan.activities().map(|a| a.coord));
        }
    }
    eprintln!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use cutter_core::model::{LineId, LinkId, PersonId, RouteId, StopId};
    use cutter_extent::extent::{AllInExtent, RadialExtent};

    use super::*;
    use crate::cut::fixture;

    fn relevance_of(person_id: &str, scenario: &Scenario, extent: &dyn CutExtent) -> AgentRelevance {
        let person = &scenario.population.persons[&PersonId::from(person_id)];
        let mut cache = NodeInsideCache::new();
        classify_person(person, scenario, extent, &mut cache)
            .expect("test invariant failed: classification failed")
    }

    #[test]
    fn test_activities_inside_is_fully_inside() {
        let scenario = fixture::scenario();
        let extent = fixture::extent();
        assert_eq!(
            relevance_of("agent_001", &scenario, &extent),
            AgentRelevance::FullyInside
        );
    }

    #[test]
    fn test_mixed_activities_are_partially_inside() {
        let scenario = fixture::scenario();
        let extent = fixture::extent();
        assert_eq!(
            relevance_of("agent_002", &scenario, &extent),
            AgentRelevance::PartiallyInside
        );
    }

    #[test]
    fn test_network_route_crossing_the_extent() {
        let scenario = fixture::scenario();
        let extent = fixture::extent();
        assert_eq!(
            relevance_of("agent_003", &scenario, &extent),
            AgentRelevance::PartiallyInside
        );
        assert_eq!(
            relevance_of("agent_004", &scenario, &extent),
            AgentRelevance::Irrelevant
        );
    }

    #[test]
    fn test_transit_ride_only_counts_while_boarded() {
        let scenario = fixture::scenario();
        let extent = fixture::extent();
        // rides the outside part of a route that also serves the extent
        assert_eq!(
            relevance_of("agent_005", &scenario, &extent),
            AgentRelevance::Irrelevant
        );
        // boards inside the extent
        assert_eq!(
            relevance_of("agent_006", &scenario, &extent),
            AgentRelevance::PartiallyInside
        );
    }

    /// replaces the links driven by line L1, keeping its stops and departures.
    fn reroute_line_1(scenario: &mut Scenario, start: &str, links: &[&str], end: &str) {
        let route = scenario
            .transit_schedule
            .lines
            .get_mut(&LineId::from("L1"))
            .and_then(|line| line.routes.get_mut(&RouteId::from("R1")))
            .expect("test invariant failed: no route L1/R1");
        route.route = NetworkRoute::new(
            LinkId::from(start),
            links.iter().map(|l| LinkId::from(*l)).collect(),
            LinkId::from(end),
        );
    }

    fn ride_on_line_1(start_link: &str, end_link: &str) -> TransitPassengerRoute {
        TransitPassengerRoute {
            start_link_id: LinkId::from(start_link),
            end_link_id: LinkId::from(end_link),
            access_stop_id: StopId::from("S2"),
            egress_stop_id: StopId::from("S4"),
            line_id: LineId::from("L1"),
            route_id: RouteId::from("R1"),
        }
    }

    #[test]
    fn test_looping_route_restarts_ride_at_second_boarding_link() {
        let mut scenario = fixture::scenario();
        // 2 -> 4 -> 2 -> 0 -> 2 -> 4 -> 5, passing inside node 0 between the
        // two passes over link 8
        reroute_line_1(&mut scenario, "8", &["9", "7", "6", "8"], "4");
        let extent = fixture::extent();

        let mut cache = NodeInsideCache::new();
        let segment =
            walk_transit_route(&ride_on_line_1("8", "4"), &scenario, &extent, &mut cache)
                .expect("test invariant failed: walk failed");
        assert!(segment.has_outside);
        assert!(!segment.has_inside);

        // agent_005 rides 8 -> 4 between outside activities
        assert_eq!(
            relevance_of("agent_005", &scenario, &extent),
            AgentRelevance::Irrelevant
        );
    }

    #[test]
    fn test_ride_ends_at_alighting_link() {
        let mut scenario = fixture::scenario();
        // 2 -> 4 -> 2 -> 0, only the last link enters the extent
        reroute_line_1(&mut scenario, "8", &["9"], "7");
        let extent = fixture::extent();

        let mut cache = NodeInsideCache::new();
        let alight_before_extent =
            walk_transit_route(&ride_on_line_1("8", "9"), &scenario, &extent, &mut cache)
                .expect("test invariant failed: walk failed");
        assert_eq!(alight_before_extent.relevance(), AgentRelevance::Irrelevant);
        assert!(!alight_before_extent.has_inside);

        let alight_inside =
            walk_transit_route(&ride_on_line_1("8", "7"), &scenario, &extent, &mut cache)
                .expect("test invariant failed: walk failed");
        assert_eq!(alight_inside.relevance(), AgentRelevance::PartiallyInside);
    }

    #[test]
    fn test_all_in_keeps_everyone_fully_inside() {
        let scenario = fixture::scenario();
        for person_id in scenario.population.persons.keys() {
            assert_eq!(
                relevance_of(person_id.as_str(), &scenario, &AllInExtent),
                AgentRelevance::FullyInside
            );
        }
    }

    #[test]
    fn test_person_without_selected_plan_is_irrelevant() {
        let scenario = fixture::scenario();
        let mut person = scenario.population.persons[&PersonId::from("agent_001")].clone();
        person.selected_plan = None;
        let mut cache = NodeInsideCache::new();
        let relevance = classify_person(&person, &scenario, &fixture::extent(), &mut cache)
            .expect("test invariant failed: classification failed");
        assert_eq!(relevance, AgentRelevance::Irrelevant);
    }

    #[test]
    fn test_unknown_transit_route_is_an_error() {
        let mut scenario = fixture::scenario();
        scenario
            .transit_schedule
            .lines
            .shift_remove(&cutter_core::model::LineId::from("L1"));
        let person = &scenario.population.persons[&PersonId::from("agent_006")];
        let mut cache = NodeInsideCache::new();
        let extent = RadialExtent::new(20000.0, 20000.0, 1.0);
        let result = classify_person(person, &scenario, &extent, &mut cache);
        assert!(matches!(result, Err(ScenarioError::MissingLine(_))));
    }

    #[test]
    fn test_state_relevance() {
        let mut state = AgentState::default();
        assert_eq!(state.relevance(), AgentRelevance::Irrelevant);
        state.record(false);
        assert_eq!(state.relevance(), AgentRelevance::Irrelevant);
        state.record(true);
        assert!(state.is_mixed());
        assert_eq!(state.relevance(), AgentRelevance::PartiallyInside);
    }
}

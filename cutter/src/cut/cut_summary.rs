use serde::{Deserialize, Serialize};

use cutter_core::model::Scenario;

use super::CutSession;

/// summarizes a cut: who was kept and how large the scenario was before and after.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CutSummary {
    /// date and time this cut was run
    pub created: String,
    /// share of outside traffic requested by the user. recorded only, the cut
    /// does not use it.
    pub outside_share: f64,
    pub persons: PersonStats,
    pub source: ScenarioStats,
    /// None for an analysis run, which builds no destination scenario
    pub destination: Option<ScenarioStats>,
    /// links added to the network because a kept transit route uses them
    pub patched_links: usize,
    pub relevant_activity_locations: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PersonStats {
    pub all: usize,
    pub relevant: usize,
    pub relevant_share: f64,
    pub fully_inside: usize,
    pub fully_inside_share: f64,
    pub partially_inside: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct ScenarioStats {
    pub nodes: usize,
    pub links: usize,
    pub stop_facilities: usize,
    pub transit_lines: usize,
    pub transit_routes: usize,
    pub departures: usize,
    pub minimal_transfer_times: usize,
    pub vehicle_types: usize,
    pub vehicles: usize,
    pub persons: usize,
}

impl CutSummary {
    pub fn new(session: &CutSession, outside_share: f64, with_destination: bool) -> Self {
        let destination = if with_destination {
            Some(ScenarioStats::from(&session.dest))
        } else {
            None
        };
        Self {
            created: chrono::Utc::now().to_rfc3339(),
            outside_share,
            persons: PersonStats::from(session),
            source: ScenarioStats::from(session.source),
            destination,
            patched_links: session.patched_links,
            relevant_activity_locations: session.relevant_activity_locations.len(),
        }
    }

    /// writes the classification statistics to the log.
    pub fn log_stats(&self) {
        let p = &self.persons;
        log::info!("all persons: {}", p.all);
        log::info!("relevant persons: {}", p.relevant);
        log::info!("relevant persons share: {:.2}%", p.relevant_share * 100.0);
        log::info!("fully inside persons: {}", p.fully_inside);
        log::info!(
            "fully inside persons share: {:.2}%",
            p.fully_inside_share * 100.0
        );
        log::info!("outside share: {}", self.outside_share);
        if let Some(dest) = &self.destination {
            log::info!(
                "cut scenario has {} nodes, {} links, {} stop facilities, {} transit routes, {} vehicles and {} persons",
                dest.nodes,
                dest.links,
                dest.stop_facilities,
                dest.transit_routes,
                dest.vehicles,
                dest.persons
            );
        }
    }
}

impl From<&CutSession<'_>> for PersonStats {
    fn from(session: &CutSession<'_>) -> Self {
        let all = session.source.population.persons.len();
        let share = |n: usize| if all == 0 { 0.0 } else { n as f64 / all as f64 };
        Self {
            all,
            relevant: session.relevant.len(),
            relevant_share: share(session.relevant.len()),
            fully_inside: session.fully_inside.len(),
            fully_inside_share: share(session.fully_inside.len()),
            partially_inside: session.partially_inside.len(),
        }
    }
}

impl From<&Scenario> for ScenarioStats {
    fn from(scenario: &Scenario) -> Self {
        let schedule = &scenario.transit_schedule;
        Self {
            nodes: scenario.network.nodes.len(),
            links: scenario.network.links.len(),
            stop_facilities: schedule.facilities.len(),
            transit_lines: schedule.lines.len(),
            transit_routes: schedule.route_count(),
            departures: schedule.routes().map(|r| r.departures.len()).sum(),
            minimal_transfer_times: schedule.minimal_transfer_times.len(),
            vehicle_types: scenario.transit_vehicles.vehicle_types.len(),
            vehicles: scenario.transit_vehicles.vehicles.len(),
            persons: scenario.population.persons.len(),
        }
    }
}

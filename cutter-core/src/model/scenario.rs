use serde::{Deserialize, Serialize};

use super::{Network, Population, TransitSchedule, Vehicles};

/// the four coupled graphs that make up one simulation input.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    pub network: Network,
    pub transit_schedule: TransitSchedule,
    pub transit_vehicles: Vehicles,
    pub population: Population,
}

impl Scenario {
    pub fn new(
        network: Network,
        transit_schedule: TransitSchedule,
        transit_vehicles: Vehicles,
        population: Population,
    ) -> Self {
        Self {
            network,
            transit_schedule,
            transit_vehicles,
            population,
        }
    }
}

use geo::Coord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    Attributes, DepartureId, LineId, LinkId, NetworkRoute, RouteId, ScenarioError, StopId,
    VehicleId,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitStopFacility {
    pub id: StopId,
    pub coord: Coord<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// network link the stop is served from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<LinkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_area_id: Option<String>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// a stop along a transit route. offsets are seconds relative to the
/// departure time at the first stop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitRouteStop {
    pub stop_id: StopId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrival_offset: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_offset: Option<f64>,
    #[serde(default)]
    pub await_departure: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Departure {
    pub id: DepartureId,
    /// seconds since midnight
    pub departure_time: f64,
    pub vehicle_id: VehicleId,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitRoute {
    pub id: RouteId,
    pub transport_mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// the vehicle's path over the network
    pub route: NetworkRoute,
    pub stops: Vec<TransitRouteStop>,
    #[serde(default)]
    pub departures: IndexMap<DepartureId, Departure>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitLine {
    pub id: LineId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub routes: IndexMap<RouteId, TransitRoute>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

impl TransitLine {
    /// an empty line carrying the id, name and attributes of `line`.
    pub fn shallow_copy(line: &TransitLine) -> TransitLine {
        TransitLine {
            id: line.id.clone(),
            name: line.name.clone(),
            routes: IndexMap::new(),
            attributes: line.attributes.clone(),
        }
    }
}

/// serialized row of the minimal transfer time table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MinimalTransferTime {
    pub from_stop_id: StopId,
    pub to_stop_id: StopId,
    pub seconds: f64,
}

/// minimal time required to transfer between two stops, keyed by the
/// ordered (from, to) stop pair.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(
    from = "Vec<MinimalTransferTime>",
    into = "Vec<MinimalTransferTime>"
)]
pub struct MinimalTransferTimes(IndexMap<(StopId, StopId), f64>);

impl MinimalTransferTimes {
    /// sets the transfer time between two stops, replacing an existing value.
    pub fn set(&mut self, from_stop_id: StopId, to_stop_id: StopId, seconds: f64) {
        self.0.insert((from_stop_id, to_stop_id), seconds);
    }

    pub fn get(&self, from_stop_id: &StopId, to_stop_id: &StopId) -> Option<f64> {
        self.0
            .get(&(from_stop_id.clone(), to_stop_id.clone()))
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StopId, &StopId, f64)> + '_ {
        self.0.iter().map(|((from, to), secs)| (from, to, *secs))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<MinimalTransferTime>> for MinimalTransferTimes {
    fn from(rows: Vec<MinimalTransferTime>) -> Self {
        let mut result = MinimalTransferTimes::default();
        for row in rows {
            result.set(row.from_stop_id, row.to_stop_id, row.seconds);
        }
        result
    }
}

impl From<MinimalTransferTimes> for Vec<MinimalTransferTime> {
    fn from(value: MinimalTransferTimes) -> Self {
        value
            .0
            .into_iter()
            .map(|((from_stop_id, to_stop_id), seconds)| MinimalTransferTime {
                from_stop_id,
                to_stop_id,
                seconds,
            })
            .collect()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TransitSchedule {
    #[serde(default)]
    pub facilities: IndexMap<StopId, TransitStopFacility>,
    #[serde(default)]
    pub lines: IndexMap<LineId, TransitLine>,
    #[serde(default)]
    pub minimal_transfer_times: MinimalTransferTimes,
}

impl TransitSchedule {
    pub fn get_stop(&self, stop_id: &StopId) -> Result<&TransitStopFacility, ScenarioError> {
        self.facilities
            .get(stop_id)
            .ok_or_else(|| ScenarioError::MissingStop(stop_id.clone()))
    }

    pub fn get_route(
        &self,
        line_id: &LineId,
        route_id: &RouteId,
    ) -> Result<&TransitRoute, ScenarioError> {
        let line = self
            .lines
            .get(line_id)
            .ok_or_else(|| ScenarioError::MissingLine(line_id.clone()))?;
        line.routes
            .get(route_id)
            .ok_or_else(|| ScenarioError::MissingRoute {
                line_id: line_id.clone(),
                route_id: route_id.clone(),
            })
    }

    /// all routes of all lines, in line order.
    pub fn routes(&self) -> impl Iterator<Item = &TransitRoute> + '_ {
        self.lines.values().flat_map(|line| line.routes.values())
    }

    pub fn route_count(&self) -> usize {
        self.lines.values().map(|line| line.routes.len()).sum()
    }
}

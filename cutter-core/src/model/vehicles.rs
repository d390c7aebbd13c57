use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Attributes, ScenarioError, VehicleId, VehicleTypeId};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct VehicleCapacity {
    pub seats: u32,
    #[serde(default)]
    pub standing_room: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_in_cubic_meters: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_in_tons: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct EngineInformation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_consumption: Option<f64>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// how passengers use the doors of a transit vehicle: one after the other
/// (boarding, then alighting) or at the same time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DoorOperationMode {
    #[default]
    Serial,
    Parallel,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub capacity: VehicleCapacity,
    /// meters
    pub length: f64,
    /// meters
    pub width: f64,
    /// meters per second
    pub maximum_velocity: f64,
    pub pcu_equivalents: f64,
    #[serde(default = "default_flow_efficiency_factor")]
    pub flow_efficiency_factor: f64,
    #[serde(default)]
    pub door_operation_mode: DoorOperationMode,
    /// seconds per boarding passenger
    #[serde(default)]
    pub access_time: f64,
    /// seconds per alighting passenger
    #[serde(default)]
    pub egress_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine_information: Option<EngineInformation>,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

fn default_flow_efficiency_factor() -> f64 {
    1.0
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub vehicle_type_id: VehicleTypeId,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
}

/// a vehicle fleet: vehicle types and the vehicles that instantiate them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Vehicles {
    #[serde(default)]
    pub vehicle_types: IndexMap<VehicleTypeId, VehicleType>,
    #[serde(default)]
    pub vehicles: IndexMap<VehicleId, Vehicle>,
}

impl Vehicles {
    pub fn get_vehicle(&self, vehicle_id: &VehicleId) -> Result<&Vehicle, ScenarioError> {
        self.vehicles
            .get(vehicle_id)
            .ok_or_else(|| ScenarioError::MissingVehicle(vehicle_id.clone()))
    }

    pub fn get_vehicle_type(
        &self,
        vehicle_type_id: &VehicleTypeId,
    ) -> Result<&VehicleType, ScenarioError> {
        self.vehicle_types
            .get(vehicle_type_id)
            .ok_or_else(|| ScenarioError::MissingVehicleType(vehicle_type_id.clone()))
    }
}

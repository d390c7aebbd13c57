use geo::Coord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Attributes, LineId, LinkId, NetworkRoute, PersonId, RouteId, ScenarioError, StopId};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Activity {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub coord: Coord<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_id: Option<LinkId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_duration: Option<f64>,
}

impl Activity {
    pub fn new(activity_type: &str, x: f64, y: f64) -> Self {
        Self {
            activity_type: activity_type.to_string(),
            coord: Coord { x, y },
            link_id: None,
            facility_id: None,
            start_time: None,
            end_time: None,
            max_duration: None,
        }
    }
}

/// a passenger's ride on a transit route. start and end link are the links
/// of the access and egress stops on the vehicle's network route.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TransitPassengerRoute {
    pub start_link_id: LinkId,
    pub end_link_id: LinkId,
    pub access_stop_id: StopId,
    pub egress_stop_id: StopId,
    pub line_id: LineId,
    pub route_id: RouteId,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Route {
    Network(NetworkRoute),
    TransitPassenger(TransitPassengerRoute),
    /// teleported or otherwise unrouted travel, only the endpoints are known
    Generic {
        start_link_id: Option<LinkId>,
        end_link_id: Option<LinkId>,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Leg {
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub departure_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<Route>,
}

impl Leg {
    pub fn new(mode: &str, route: Option<Route>) -> Self {
        Self {
            mode: mode.to_string(),
            departure_time: None,
            travel_time: None,
            route,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum PlanElement {
    Activity(Activity),
    Leg(Leg),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    pub elements: Vec<PlanElement>,
}

impl Plan {
    pub fn activities(&self) -> impl Iterator<Item = &Activity> + '_ {
        self.elements.iter().filter_map(|pe| match pe {
            PlanElement::Activity(activity) => Some(activity),
            PlanElement::Leg(_) => None,
        })
    }

    pub fn legs(&self) -> impl Iterator<Item = &Leg> + '_ {
        self.elements.iter().filter_map(|pe| match pe {
            PlanElement::Leg(leg) => Some(leg),
            PlanElement::Activity(_) => None,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Person {
    pub id: PersonId,
    #[serde(default, skip_serializing_if = "Attributes::is_empty")]
    pub attributes: Attributes,
    #[serde(default)]
    pub plans: Vec<Plan>,
    /// index into `plans` of the plan used for simulation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_plan: Option<usize>,
}

impl Person {
    /// a person with a single, selected plan.
    pub fn with_plan(id: PersonId, plan: Plan) -> Self {
        Self {
            id,
            attributes: Attributes::new(),
            plans: vec![plan],
            selected_plan: Some(0),
        }
    }

    pub fn selected_plan(&self) -> Result<Option<&Plan>, ScenarioError> {
        match self.selected_plan {
            None => Ok(None),
            Some(idx) => self.plans.get(idx).map(Some).ok_or_else(|| {
                ScenarioError::InvalidSelectedPlan(self.id.clone(), idx, self.plans.len())
            }),
        }
    }

    /// drops every plan except the selected one.
    pub fn retain_selected_plan(&mut self) -> Result<(), ScenarioError> {
        let plans = std::mem::take(&mut self.plans);
        match self.selected_plan {
            None => {}
            Some(idx) => {
                let n_plans = plans.len();
                let selected = plans.into_iter().nth(idx).ok_or_else(|| {
                    ScenarioError::InvalidSelectedPlan(self.id.clone(), idx, n_plans)
                })?;
                self.plans = vec![selected];
                self.selected_plan = Some(0);
            }
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Population {
    #[serde(default)]
    pub persons: IndexMap<PersonId, Person>,
}

impl Population {
    pub fn add_person(&mut self, person: Person) {
        self.persons.insert(person.id.clone(), person);
    }

    /// reduces every person to their selected plan, which is all a cut looks at.
    /// persons without a selected plan keep no plans.
    pub fn retain_selected_plans(&mut self) -> Result<(), ScenarioError> {
        let mut n_dropped = 0;
        for person in self.persons.values_mut() {
            let before = person.plans.len();
            person.retain_selected_plan()?;
            n_dropped += before - person.plans.len();
        }
        log::debug!("dropped {n_dropped} unselected plans");
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

/// declares a string identifier newtype. each scenario entity gets its own
/// id type so that, for example, a [`LinkId`] cannot be used to look up a node.
macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }
    };
}

string_id!(
    /// identifies a node of the road network.
    NodeId
);
string_id!(
    /// identifies a directed link of the road network.
    LinkId
);
string_id!(
    /// identifies a transit stop facility.
    StopId
);
string_id!(
    /// identifies a transit line, a group of routes.
    LineId
);
string_id!(
    /// identifies a route within its transit line.
    RouteId
);
string_id!(
    /// identifies a departure within its transit route.
    DepartureId
);
string_id!(VehicleId);
string_id!(VehicleTypeId);
string_id!(PersonId);

use indexmap::IndexMap;

/// free-form attributes attached to scenario entities. insertion order is
/// retained so that written scenarios keep the order they were read in.
pub type Attributes = IndexMap<String, serde_json::Value>;

/// person attribute holding the subpopulation a person is simulated with.
pub const SUBPOPULATION_ATTRIBUTE: &str = "subpopulation";

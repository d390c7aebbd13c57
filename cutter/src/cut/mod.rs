//! cutting a scenario down to an extent. a cut classifies the population,
//! keeps the network around the extent, keeps every transit route serving it
//! along with the vehicles and links those routes need, and finally keeps
//! the relevant persons.
mod agent_classifier;
mod cut_error;
mod cut_summary;
mod network_cutter;
mod node_cache;
mod population_filter;
mod scenario_cutter;
mod session;
mod transit_cutter;

#[cfg(test)]
pub(crate) mod fixture;

pub use agent_classifier::{classify_person, classify_plan, AgentRelevance, AgentState};
pub use cut_error::CutError;
pub use cut_summary::{CutSummary, PersonStats, ScenarioStats};
pub use network_cutter::{copy_link, cut_network};
pub use node_cache::NodeInsideCache;
pub use population_filter::cut_persons;
pub use scenario_cutter::{CutAnalysis, CutOutcome, ScenarioCutter};
pub use session::CutSession;
pub use transit_cutter::cut_transit;

pub mod fs;
mod scenario_io;
mod summary_io;

pub use scenario_io::{
    read_scenario, write_scenario, NETWORK_FILENAME, POPULATION_FILENAME,
    TRANSIT_SCHEDULE_FILENAME, TRANSIT_VEHICLES_FILENAME,
};
pub use summary_io::{
    write_relevant_activity_locations, write_summary, RELEVANT_ACTIVITY_LOCATIONS_FILENAME,
    SUMMARY_FILENAME,
};

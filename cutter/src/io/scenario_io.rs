use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use cutter_core::model::{Network, Population, Scenario, TransitSchedule, Vehicles};

use super::fs::{create_dirs, open_reader, write_json};
use crate::cut::CutError;

pub const NETWORK_FILENAME: &str = "network.json";
pub const TRANSIT_SCHEDULE_FILENAME: &str = "transit_schedule.json";
pub const TRANSIT_VEHICLES_FILENAME: &str = "transit_vehicles.json";
pub const POPULATION_FILENAME: &str = "population.json";

/// reads a scenario from a directory. each file may also be stored gzipped
/// with a `.gz` suffix. network and population are required, a scenario
/// without transit may omit the schedule and vehicle files. only the
/// selected plan of each person is kept.
pub fn read_scenario(input_directory: &Path) -> Result<Scenario, CutError> {
    let network: Network = read_required(input_directory, NETWORK_FILENAME)?;
    let transit_schedule: TransitSchedule =
        read_optional(input_directory, TRANSIT_SCHEDULE_FILENAME)?.unwrap_or_default();
    let transit_vehicles: Vehicles =
        read_optional(input_directory, TRANSIT_VEHICLES_FILENAME)?.unwrap_or_default();
    let mut population: Population = read_required(input_directory, POPULATION_FILENAME)?;
    population.retain_selected_plans()?;
    log::info!(
        "read scenario with {} nodes, {} links, {} transit routes, {} vehicles and {} persons",
        network.nodes.len(),
        network.links.len(),
        transit_schedule.route_count(),
        transit_vehicles.vehicles.len(),
        population.persons.len()
    );
    Ok(Scenario::new(
        network,
        transit_schedule,
        transit_vehicles,
        population,
    ))
}

/// writes the four scenario files as JSON into the output directory. with
/// `compress` set, each file is gzipped and gets a `.gz` suffix.
pub fn write_scenario(
    scenario: &Scenario,
    output_directory: &Path,
    overwrite: bool,
    compress: bool,
) -> Result<(), CutError> {
    create_dirs(output_directory)?;
    let output_path = |filename: &str| {
        if compress {
            output_directory.join(format!("{filename}.gz"))
        } else {
            output_directory.join(filename)
        }
    };
    write_json(&scenario.network, &output_path(NETWORK_FILENAME), overwrite)?;
    write_json(
        &scenario.transit_schedule,
        &output_path(TRANSIT_SCHEDULE_FILENAME),
        overwrite,
    )?;
    write_json(
        &scenario.transit_vehicles,
        &output_path(TRANSIT_VEHICLES_FILENAME),
        overwrite,
    )?;
    write_json(
        &scenario.population,
        &output_path(POPULATION_FILENAME),
        overwrite,
    )?;
    log::info!(
        "wrote scenario to {}",
        output_directory.to_str().unwrap_or_default()
    );
    Ok(())
}

/// finds `filename` or its gzipped sibling in the directory.
fn find_file(directory: &Path, filename: &str) -> Option<PathBuf> {
    let plain = directory.join(filename);
    if plain.is_file() {
        return Some(plain);
    }
    let gzipped = directory.join(format!("{filename}.gz"));
    if gzipped.is_file() {
        return Some(gzipped);
    }
    None
}

fn read_required<T: DeserializeOwned>(directory: &Path, filename: &str) -> Result<T, CutError> {
    match read_optional(directory, filename)? {
        Some(value) => Ok(value),
        None => Err(CutError::ReadError {
            path: directory.join(filename),
            message: "file not found, with or without .gz suffix".to_string(),
        }),
    }
}

fn read_optional<T: DeserializeOwned>(
    directory: &Path,
    filename: &str,
) -> Result<Option<T>, CutError> {
    let path = match find_file(directory, filename) {
        Some(path) => path,
        None => {
            log::info!("no {filename} in input directory");
            return Ok(None);
        }
    };
    log::debug!("reading {}", path.to_str().unwrap_or_default());
    let reader = open_reader(&path)?;
    let value = serde_json::from_reader(reader).map_err(|e| CutError::ReadError {
        path: path.clone(),
        message: format!("failed to deserialize from JSON: {e}"),
    })?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{write::GzEncoder, Compression};

    use super::*;
    use crate::cut::fixture;

    #[test]
    fn test_write_then_read_scenario() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let scenario = fixture::scenario();
        write_scenario(&scenario, dir.path(), false, false)
            .expect("test invariant failed: write failed");
        let back = read_scenario(dir.path()).expect("test invariant failed: read failed");
        assert_eq!(back, scenario);
    }

    #[test]
    fn test_write_then_read_compressed_scenario() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let scenario = fixture::scenario();
        write_scenario(&scenario, dir.path(), false, true)
            .expect("test invariant failed: write failed");
        assert!(dir.path().join("network.json.gz").is_file());
        assert!(dir.path().join("population.json.gz").is_file());
        assert!(!dir.path().join(NETWORK_FILENAME).exists());
        // a complete gzip member ends with CRC32 and ISIZE, so a missing
        // trailer fails to decode
        let bytes = std::fs::read(dir.path().join("population.json.gz"))
            .expect("test invariant failed: read population bytes");
        let mut decoder = flate2::read::GzDecoder::new(bytes.as_slice());
        let mut contents = String::new();
        std::io::Read::read_to_string(&mut decoder, &mut contents)
            .expect("test invariant failed: population is not a complete gzip stream");
        let back = read_scenario(dir.path()).expect("test invariant failed: read failed");
        assert_eq!(back, scenario);
    }

    #[test]
    fn test_existing_files_need_overwrite() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let scenario = fixture::scenario();
        write_scenario(&scenario, dir.path(), false, false)
            .expect("test invariant failed: write failed");
        let result = write_scenario(&scenario, dir.path(), false, false);
        assert!(matches!(result, Err(CutError::WriteError { .. })));
        write_scenario(&scenario, dir.path(), true, false)
            .expect("test invariant failed: overwrite failed");
    }

    #[test]
    fn test_read_gzipped_and_missing_transit() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let network = fixture::network();
        let file = std::fs::File::create(dir.path().join("network.json.gz"))
            .expect("test invariant failed: create file");
        let mut encoder = GzEncoder::new(file, Compression::default());
        serde_json::to_writer(&mut encoder, &network)
            .expect("test invariant failed: serialize network");
        encoder
            .finish()
            .expect("test invariant failed: finish gzip")
            .flush()
            .expect("test invariant failed: flush");
        let population_json = r#"{"persons": {"p1": {"id": "p1", "plans": [
            {"elements": [{"element": "activity", "type": "home", "coord": {"x": 0.0, "y": 0.0}}]},
            {"elements": []}
          ], "selected_plan": 1}}}"#;
        std::fs::write(dir.path().join(POPULATION_FILENAME), population_json)
            .expect("test invariant failed: write population");

        let scenario = read_scenario(dir.path()).expect("test invariant failed: read failed");
        assert_eq!(scenario.network, network);
        assert_eq!(scenario.transit_schedule.route_count(), 0);
        assert!(scenario.transit_vehicles.vehicles.is_empty());
        let person = &scenario.population.persons[&cutter_core::model::PersonId::from("p1")];
        assert_eq!(person.plans.len(), 1);
        assert!(person.plans[0].elements.is_empty());
    }

    #[test]
    fn test_missing_network_is_an_error() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let result = read_scenario(dir.path());
        assert!(matches!(result, Err(CutError::ReadError { .. })));
    }
}

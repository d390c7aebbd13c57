use std::path::Path;

use geo::Coord;
use serde::Serialize;

use super::fs::{check_overwrite, create_dirs, serialize_into_csv};
use crate::cut::{CutError, CutSummary};

pub const SUMMARY_FILENAME: &str = "cut_summary.json";
pub const RELEVANT_ACTIVITY_LOCATIONS_FILENAME: &str = "relevant_activity_locations.csv.gz";

#[derive(Serialize)]
struct ActivityLocationRow {
    x: f64,
    y: f64,
}

/// write the cut summary to disk as JSON. an existing summary is only
/// replaced when `overwrite` is set.
pub fn write_summary(
    summary: &CutSummary,
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), CutError> {
    create_dirs(output_directory)?;
    let filepath = output_directory.join(SUMMARY_FILENAME);
    check_overwrite(&filepath, overwrite)?;
    let json = serde_json::to_string_pretty(summary).map_err(|e| {
        let msg = format!("failure while serializing cut summary as JSON: {e}");
        CutError::WriteError {
            path: filepath.clone(),
            message: msg,
        }
    })?;
    std::fs::write(&filepath, &json).map_err(|e| CutError::WriteError {
        path: filepath.clone(),
        message: e.to_string(),
    })
}

/// writes the activity coordinates of all relevant persons, one row per activity.
pub fn write_relevant_activity_locations(
    locations: &[Coord<f64>],
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), CutError> {
    create_dirs(output_directory)?;
    serialize_into_csv(
        locations.iter().map(|c| ActivityLocationRow { x: c.x, y: c.y }),
        RELEVANT_ACTIVITY_LOCATIONS_FILENAME,
        output_directory,
        overwrite,
        "write relevant activity locations",
    )
}

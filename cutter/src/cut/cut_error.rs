use std::path::PathBuf;

use cutter_core::model::ScenarioError;
use cutter_extent::ExtentError;

#[derive(thiserror::Error, Debug)]
pub enum CutError {
    #[error("scenario is inconsistent: {0}")]
    Scenario(#[from] ScenarioError),
    #[error("failure building extent: {0}")]
    Extent(#[from] ExtentError),
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Error writing to csv: {0}")]
    CsvWriteError(String),
}

use std::path::Path;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::{app::CutConfiguration, cut::CutError};

/// Command line tool for cutting multimodal transportation scenarios down to a region
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CutterApp {
    #[command(subcommand)]
    pub op: CutterOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum CutterOperation {
    /// cut a scenario to the configured extent and write the result
    Cut {
        /// TOML file with the extent and cut options
        #[arg(short, long)]
        configuration_file: String,

        /// directory containing network.json, population.json and, optionally,
        /// transit_schedule.json and transit_vehicles.json (each may be gzipped)
        #[arg(short, long)]
        input_directory: String,

        /// location on disk to write output files. if not provided,
        /// use the current working directory.
        #[arg(short, long)]
        output_directory: Option<String>,

        /// replace existing files in the output directory
        #[arg(long)]
        overwrite: bool,

        /// gzip the scenario files, written with a `.gz` suffix
        #[arg(long)]
        compress: bool,
    },
    /// classify the population against the configured extent without
    /// cutting. writes the cut summary and relevant activity locations.
    Analyze {
        #[arg(short, long)]
        configuration_file: String,

        #[arg(short, long)]
        input_directory: String,

        #[arg(short, long)]
        output_directory: Option<String>,

        #[arg(long)]
        overwrite: bool,
    },
}

impl CutterOperation {
    pub fn run(&self) -> Result<(), CutError> {
        match self {
            CutterOperation::Cut {
                configuration_file,
                input_directory,
                output_directory,
                overwrite,
                compress,
            } => {
                let config = CutConfiguration::from_file(configuration_file)?;
                let outdir = output_path(output_directory.as_deref());
                crate::app::run::cut(
                    &config,
                    Path::new(input_directory),
                    outdir,
                    *overwrite,
                    *compress,
                )
            }
            CutterOperation::Analyze {
                configuration_file,
                input_directory,
                output_directory,
                overwrite,
            } => {
                let config = CutConfiguration::from_file(configuration_file)?;
                let outdir = output_path(output_directory.as_deref());
                crate::app::run::analyze(&config, Path::new(input_directory), outdir, *overwrite)
            }
        }
    }
}

fn output_path(output_directory: Option<&str>) -> &Path {
    match output_directory {
        Some(out) => Path::new(out),
        None => Path::new(""),
    }
}

use std::path::Path;

use cutter_extent::extent::CutExtent;

use crate::{
    app::CutConfiguration,
    cut::{CutError, ScenarioCutter},
    io,
};

/// reads the scenario in `input_directory`, cuts it to the configured extent
/// and writes the cut scenario, its summary and the relevant activity
/// locations to `output_directory`. `compress` gzips the scenario files.
pub fn cut(
    config: &CutConfiguration,
    input_directory: &Path,
    output_directory: &Path,
    overwrite: bool,
    compress: bool,
) -> Result<(), CutError> {
    let extent = config.extent.build()?;
    let source = io::read_scenario(input_directory)?;
    let cutter =
        ScenarioCutter::new(&source).with_outside_subpopulation(config.outside_subpopulation.clone());
    let outcome = cutter.perform_cut_with_report(extent.as_ref(), config.outside_share)?;
    io::write_scenario(&outcome.scenario, output_directory, overwrite, compress)?;
    io::write_relevant_activity_locations(
        &outcome.relevant_activity_locations,
        output_directory,
        overwrite,
    )?;
    io::write_summary(&outcome.summary, output_directory, overwrite)?;
    Ok(())
}

/// classifies the population only. writes the summary and relevant
/// activity locations to `output_directory`.
pub fn analyze(
    config: &CutConfiguration,
    input_directory: &Path,
    output_directory: &Path,
    overwrite: bool,
) -> Result<(), CutError> {
    let extent: Box<dyn CutExtent> = config.extent.build()?;
    let source = io::read_scenario(input_directory)?;
    let analysis = ScenarioCutter::new(&source).analyze_cut(extent.as_ref(), config.outside_share)?;
    io::write_relevant_activity_locations(
        &analysis.relevant_activity_locations,
        output_directory,
        overwrite,
    )?;
    io::write_summary(&analysis.summary, output_directory, overwrite)?;
    Ok(())
}

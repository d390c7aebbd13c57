use std::path::Path;

use config::{Config, File};
use serde::{Deserialize, Serialize};

use cutter_extent::extent::ExtentConfig;

use crate::cut::CutError;

/// options of a cut, read from a TOML file:
///
/// ```toml
/// outside_share = 0.0
/// outside_subpopulation = "outsideAgent"
///
/// [extent]
/// type = "shape"
/// zone_file = "zones.geojson"
/// zone_id_column = "zone_id"
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CutConfiguration {
    pub extent: ExtentConfig,
    /// accepted for compatibility. transit stops are always tested against
    /// `extent`.
    #[serde(default)]
    pub extended_extent: Option<ExtentConfig>,
    /// share of outside traffic to keep. reported, not applied.
    #[serde(default)]
    pub outside_share: f64,
    /// subpopulation assigned to persons that are only partially inside.
    /// persons keep their subpopulation if not set.
    #[serde(default)]
    pub outside_subpopulation: Option<String>,
}

impl CutConfiguration {
    pub fn from_file(configuration_file: &str) -> Result<Self, CutError> {
        let filepath = Path::new(configuration_file);
        let config = Config::builder()
            .add_source(File::from(filepath))
            .build()
            .map_err(|e| {
                let msg = format!("file '{configuration_file}' produced error: {e}");
                CutError::InvalidUserInput(msg)
            })?;
        let cut_config = config.try_deserialize::<CutConfiguration>().map_err(|e| {
            let msg = format!("error reading cut configuration in '{configuration_file}': {e}");
            CutError::InvalidUserInput(msg)
        })?;
        if cut_config.extended_extent.is_some() {
            log::warn!(
                "'extended_extent' in '{configuration_file}' is ignored, transit stops are tested against 'extent'"
            );
        }
        if !(0.0..=1.0).contains(&cut_config.outside_share) {
            let msg = format!(
                "outside_share must be in [0, 1], found {}",
                cut_config.outside_share
            );
            return Err(CutError::InvalidUserInput(msg));
        }
        Ok(cut_config)
    }
}

mod cut_configuration;
mod cutter_app;
pub mod run;

pub use cut_configuration::CutConfiguration;
pub use cutter_app::{CutterApp, CutterOperation};

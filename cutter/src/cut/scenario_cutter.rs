use geo::Coord;

use cutter_core::model::Scenario;
use cutter_extent::extent::CutExtent;

use super::{
    agent_classifier::classify_population, cut_network, cut_persons, cut_transit, CutError,
    CutSession, CutSummary,
};

/// result of a cut, with the statistics and activity locations gathered
/// along the way.
pub struct CutOutcome {
    pub scenario: Scenario,
    pub summary: CutSummary,
    pub relevant_activity_locations: Vec<Coord<f64>>,
}

/// result of a classification-only run.
pub struct CutAnalysis {
    pub summary: CutSummary,
    pub relevant_activity_locations: Vec<Coord<f64>>,
}

/// cuts a scenario down to an extent. the source scenario is never modified,
/// each cut builds a new one.
pub struct ScenarioCutter<'a> {
    source: &'a Scenario,
    outside_subpopulation: Option<String>,
}

impl<'a> ScenarioCutter<'a> {
    pub fn new(source: &'a Scenario) -> Self {
        Self {
            source,
            outside_subpopulation: None,
        }
    }

    /// partially inside persons get this subpopulation when copied.
    pub fn with_outside_subpopulation(mut self, outside_subpopulation: Option<String>) -> Self {
        self.outside_subpopulation = outside_subpopulation;
        self
    }

    pub fn perform_cut(
        &self,
        extent: &dyn CutExtent,
        outside_share: f64,
    ) -> Result<Scenario, CutError> {
        self.perform_cut_with_report(extent, outside_share)
            .map(|outcome| outcome.scenario)
    }

    pub fn perform_cut_with_report(
        &self,
        extent: &dyn CutExtent,
        outside_share: f64,
    ) -> Result<CutOutcome, CutError> {
        let mut session = CutSession::new(self.source, extent);

        log::info!("filtering persons");
        classify_population(&mut session)?;
        // extended extent is the cut extent, see CutSession::extended_extent
        log::info!("cutting network");
        cut_network(&mut session)?;
        log::info!("cutting transit schedule and vehicles");
        cut_transit(&mut session)?;
        log::info!("cutting persons");
        cut_persons(&mut session, self.outside_subpopulation.as_deref());

        let summary = CutSummary::new(&session, outside_share, true);
        summary.log_stats();
        Ok(CutOutcome {
            scenario: session.dest,
            summary,
            relevant_activity_locations: session.relevant_activity_locations,
        })
    }

    /// classifies the population without building a destination scenario.
    pub fn analyze_cut(
        &self,
        extent: &dyn CutExtent,
        outside_share: f64,
    ) -> Result<CutAnalysis, CutError> {
        let mut session = CutSession::new(self.source, extent);
        log::info!("analyzing persons");
        classify_population(&mut session)?;
        let summary = CutSummary::new(&session, outside_share, false);
        summary.log_stats();
        Ok(CutAnalysis {
            summary,
            relevant_activity_locations: session.relevant_activity_locations,
        })
    }
}

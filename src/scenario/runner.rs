//! Compose adjust → project → shock, for one scenario or a whole set

use super::adjuster::adjust;
use super::shock::apply_shock;
use crate::comparison::ScenarioComparison;
use crate::params::{ShockKind, SimulationParameters, SimulationType};
use crate::projection::{
    CurrentTotals, ProjectionConfig, ProjectionEngine, ProjectionSeed, SimulationResult,
    TotalsProvider,
};
use log::info;
use rayon::prelude::*;

/// A named scenario waiting to be run
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSpec {
    pub name: String,
    pub description: String,
    pub parameters: SimulationParameters,
}

impl ScenarioSpec {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: SimulationParameters,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Name of the unmodified scenario in [`standard_scenarios`]
pub const BASELINE_SCENARIO: &str = "Baseline";

/// Baseline, optimistic, pessimistic and one crisis per shock kind
pub fn standard_scenarios(base: &SimulationParameters) -> Vec<ScenarioSpec> {
    let mut specs = vec![
        ScenarioSpec::new(
            BASELINE_SCENARIO,
            "Current assumptions with no adjustment",
            base.variant(BASELINE_SCENARIO, SimulationType::Normal),
        ),
        ScenarioSpec::new(
            "Optimistic",
            "Growth, returns and expense cuts 50% stronger",
            base.variant("Optimistic", SimulationType::Optimistic),
        ),
        ScenarioSpec::new(
            "Pessimistic",
            "Growth, returns and expense cuts halved; inflation 50% higher",
            base.variant("Pessimistic", SimulationType::Pessimistic),
        ),
    ];
    specs.extend(ShockKind::ALL.into_iter().map(|kind| {
        ScenarioSpec::new(
            kind.label(),
            kind.description(),
            base.variant(kind.label(), SimulationType::Crisis(kind)),
        )
    }));
    specs
}

/// Runs scenarios against one user's current totals
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
    totals: CurrentTotals,
}

impl ScenarioRunner {
    pub fn new(totals: CurrentTotals, config: ProjectionConfig) -> Self {
        Self {
            engine: ProjectionEngine::new(ProjectionSeed::from_totals(&totals), config),
            totals,
        }
    }

    pub fn from_provider<T: TotalsProvider + ?Sized>(provider: &T, config: ProjectionConfig) -> Self {
        Self::new(provider.current_totals(), config)
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }

    pub fn totals(&self) -> &CurrentTotals {
        &self.totals
    }

    /// Run the scenario named by `params.simulation_type`
    pub fn run(&self, params: &SimulationParameters) -> SimulationResult {
        let scenario = params.simulation_type;
        let adjusted = adjust(params, scenario);
        let projected = self.engine.project(&adjusted);
        match scenario.shock() {
            Some(kind) => apply_shock(&projected, kind, &self.totals),
            None => projected,
        }
    }

    /// Run independent parameter sets in parallel, preserving order
    pub fn run_batch(&self, params: &[SimulationParameters]) -> Vec<SimulationResult> {
        params.par_iter().map(|p| self.run(p)).collect()
    }

    /// Run every spec in parallel, preserving order
    pub fn run_specs(&self, specs: &[ScenarioSpec]) -> Vec<ScenarioComparison> {
        info!("running {} scenarios", specs.len());
        specs
            .par_iter()
            .map(|spec| ScenarioComparison {
                name: spec.name.clone(),
                description: spec.description.clone(),
                parameters: spec.parameters.clone(),
                result: self.run(&spec.parameters),
            })
            .collect()
    }

    /// Run [`standard_scenarios`] for `base`
    pub fn run_all(&self, base: &SimulationParameters) -> Vec<ScenarioComparison> {
        self.run_specs(&standard_scenarios(base))
    }
}

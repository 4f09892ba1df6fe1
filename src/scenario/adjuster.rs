//! Scale parameter rates for optimistic and pessimistic scenarios
//!
//! The transform runs once, before projection, and always returns a new
//! parameter set. Crisis scenarios are not rescaled here; their effect is
//! applied to the finished series by the shock applier.

use crate::params::{SimulationParameters, SimulationType};
use serde::{Deserialize, Serialize};

/// Multipliers applied to each rate field (1.0 = no change)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMultipliers {
    pub income_growth: f64,
    pub investment_return: f64,
    pub expense_reduction: f64,
    pub inflation_rate: f64,
}

impl Default for ScenarioMultipliers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ScenarioMultipliers {
    pub const IDENTITY: Self = Self {
        income_growth: 1.0,
        investment_return: 1.0,
        expense_reduction: 1.0,
        inflation_rate: 1.0,
    };

    pub const OPTIMISTIC: Self = Self {
        income_growth: 1.5,
        investment_return: 1.5,
        expense_reduction: 1.5,
        inflation_rate: 1.0,
    };

    pub const PESSIMISTIC: Self = Self {
        income_growth: 0.5,
        investment_return: 0.5,
        expense_reduction: 0.5,
        inflation_rate: 1.5,
    };

    pub fn for_type(scenario: SimulationType) -> Self {
        match scenario {
            SimulationType::Normal | SimulationType::Crisis(_) => Self::IDENTITY,
            SimulationType::Optimistic => Self::OPTIMISTIC,
            SimulationType::Pessimistic => Self::PESSIMISTIC,
        }
    }

    pub fn apply(&self, params: &SimulationParameters) -> SimulationParameters {
        SimulationParameters {
            income_growth: params.income_growth * self.income_growth,
            investment_return: params.investment_return * self.investment_return,
            expense_reduction: params.expense_reduction * self.expense_reduction,
            inflation_rate: params.inflation_rate * self.inflation_rate,
            ..params.clone()
        }
    }
}

/// Return `params` transformed for `scenario`, tagged with that scenario
pub fn adjust(params: &SimulationParameters, scenario: SimulationType) -> SimulationParameters {
    let mut adjusted = ScenarioMultipliers::for_type(scenario).apply(params);
    adjusted.simulation_type = scenario;
    adjusted
}

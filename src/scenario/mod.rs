//! What-if scenarios: rate adjustments before projection, shocks after it

pub mod adjuster;
pub mod shock;
mod runner;

pub use crate::params::ShockKind;
pub use adjuster::{adjust, ScenarioMultipliers};
pub use shock::apply_shock;
pub use runner::{standard_scenarios, ScenarioRunner, ScenarioSpec, BASELINE_SCENARIO};

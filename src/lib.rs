//! Finance Projection - deterministic personal-finance projection engine
//!
//! This library provides:
//! - Parameter validation from loosely typed input
//! - Yearly projections of income, expenses, savings and net worth
//! - Optimistic/pessimistic scenario adjustments and crisis shocks
//! - Savings-goal trajectories with inflation adjustment
//! - Rankings and baseline comparisons across projections
//!
//! Flow: raw parameters → [`params::validate`] → [`scenario::adjust`] →
//! [`ProjectionEngine::project`] → [`scenario::apply_shock`] →
//! [`comparison::compare`]. [`ScenarioRunner`] wires these together.

pub mod comparison;
pub mod error;
pub mod export;
pub mod goal;
pub mod params;
pub mod projection;
pub mod scenario;

// Re-export commonly used types
pub use comparison::{compare, ComparisonRow, ResultSummary, ScenarioComparison};
pub use error::{Error, Result};
pub use goal::{project_goal, GoalDefinition, GoalResult};
pub use params::{validate, RawParameters, ShockKind, SimulationParameters, SimulationType};
pub use projection::{
    Clock, CurrentTotals, Metric, ProjectionConfig, ProjectionEngine, ProjectionSeed,
    SimulationResult, SystemClock,
};
pub use scenario::{adjust, apply_shock, ScenarioRunner};

//! Simulation parameters and the validation boundary

mod data;
pub mod validator;
pub mod loader;

pub use data::{
    RawParameters, RawSimulationType, RawValue, ShockKind, SimulationParameters,
    SimulationType, DEFAULT_SIMULATION_NAME, MAX_PROJECTION_YEARS,
};
pub use validator::{validate, validate_goal};
pub use loader::{load_goal, load_parameters, parse_parameters};

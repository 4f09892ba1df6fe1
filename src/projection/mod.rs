//! Projection engine for yearly personal-finance trajectories

mod clock;
mod engine;
mod result;
mod seed;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{ProjectionConfig, ProjectionEngine, YearLabels};
pub use result::{Metric, SimulationResult, YearRow};
pub use seed::{CurrentTotals, Ledger, LineItem, ProjectionSeed, TotalsProvider};

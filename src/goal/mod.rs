//! Savings goals tracked independently of the main projection

mod calculator;

pub use calculator::{project_goal, GoalDefinition, GoalResult};

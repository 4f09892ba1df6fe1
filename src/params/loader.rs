//! Load parameter sets and goals from JSON documents

use super::data::{RawParameters, SimulationParameters};
use super::validator::{validate, validate_goal};
use crate::error::Result;
use crate::goal::GoalDefinition;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse and validate parameter sets from a JSON string
///
/// The document may hold a single parameter object or an array of them.
pub fn parse_parameters(json: &str) -> Result<Vec<SimulationParameters>> {
    let raw: Vec<RawParameters> = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .map(serde_json::from_value::<RawParameters>)
            .collect::<std::result::Result<Vec<_>, _>>()?,
        single => vec![serde_json::from_value(single)?],
    };
    raw.iter().map(validate).collect()
}

/// Read and validate parameter sets from a JSON file
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<Vec<SimulationParameters>> {
    let contents = fs::read_to_string(path)?;
    parse_parameters(&contents)
}

/// Read and validate a goal definition from a JSON file
pub fn load_goal<P: AsRef<Path>>(path: P) -> Result<GoalDefinition> {
    let contents = fs::read_to_string(path)?;
    let goal: GoalDefinition = serde_json::from_str(&contents)?;
    validate_goal(&goal)
}

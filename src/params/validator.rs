//! Narrow raw user input into engine-safe parameters
//!
//! This is the only place the crate rejects input. Missing or NaN rates
//! fall back to 0; malformed values (unparseable text, infinities, a bad
//! horizon) fail with [`Error::InvalidParameter`] naming the field.

use super::data::{
    RawParameters, RawSimulationType, RawValue, ShockKind, SimulationParameters, SimulationType,
    DEFAULT_SIMULATION_NAME, MAX_PROJECTION_YEARS,
};
use crate::error::{Error, Result};
use crate::goal::GoalDefinition;
use log::debug;

/// Validate and coerce a raw parameter bag
pub fn validate(raw: &RawParameters) -> Result<SimulationParameters> {
    let years = horizon("years", raw.years.as_ref())?;

    let name = raw
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_SIMULATION_NAME)
        .to_string();

    let params = SimulationParameters {
        name,
        years,
        income_growth: rate("incomeGrowth", raw.income_growth.as_ref())?,
        expense_reduction: rate("expenseReduction", raw.expense_reduction.as_ref())?,
        investment_return: rate("investmentReturn", raw.investment_return.as_ref())?,
        inflation_rate: rate("inflationRate", raw.inflation_rate.as_ref())?,
        savings_rate: rate("savingsRate", raw.savings_rate.as_ref())?,
        simulation_type: simulation_type(raw.simulation_type.as_ref(), raw.shock.as_deref())?,
    };

    debug!(
        "validated parameters '{}': {} years, type {}",
        params.name,
        params.years,
        params.simulation_type.label()
    );
    Ok(params)
}

/// Check a goal definition: every amount and rate finite and non-negative,
/// and the horizon within [`MAX_PROJECTION_YEARS`]
pub fn validate_goal(goal: &GoalDefinition) -> Result<GoalDefinition> {
    if goal.years > MAX_PROJECTION_YEARS {
        return Err(Error::invalid(
            "years",
            format!("must be at most {MAX_PROJECTION_YEARS}, got {}", goal.years),
        ));
    }
    let fields = [
        ("targetAmount", goal.target_amount),
        ("currentAmount", goal.current_amount),
        ("monthlyContribution", goal.monthly_contribution),
        ("interestRate", goal.interest_rate),
        ("inflationRate", goal.inflation_rate),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(Error::invalid(field, "must be a finite number"));
        }
        if value < 0.0 {
            return Err(Error::invalid(field, format!("must be non-negative, got {value}")));
        }
    }
    Ok(goal.clone())
}

/// Interpret a raw value as a number; empty text counts as missing
fn numeric(field: &'static str, value: &RawValue) -> Result<Option<f64>> {
    match value {
        RawValue::Number(n) => Ok(Some(*n)),
        RawValue::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map(Some)
                .map_err(|_| Error::invalid(field, format!("'{text}' is not a number")))
        }
        RawValue::Other(other) => Err(Error::invalid(field, format!("{other} is not a number"))),
    }
}

fn rate(field: &'static str, value: Option<&RawValue>) -> Result<f64> {
    let parsed = match value {
        Some(v) => numeric(field, v)?,
        None => None,
    };
    match parsed {
        None => Ok(0.0),
        Some(n) if n.is_nan() => Ok(0.0),
        Some(n) if n.is_infinite() => Err(Error::invalid(field, "must be a finite number")),
        Some(n) => Ok(n),
    }
}

fn horizon(field: &'static str, value: Option<&RawValue>) -> Result<u32> {
    let n = match value {
        Some(v) => numeric(field, v)?,
        None => None,
    }
    .ok_or_else(|| Error::invalid(field, "is required"))?;

    if !n.is_finite() {
        return Err(Error::invalid(field, "must be a finite number"));
    }
    if n < 0.0 {
        return Err(Error::invalid(field, format!("must be non-negative, got {n}")));
    }
    if n.fract() != 0.0 {
        return Err(Error::invalid(field, format!("must be a whole number, got {n}")));
    }
    // Results hold years + 1 points per series; cap before allocating
    if n > f64::from(MAX_PROJECTION_YEARS) {
        return Err(Error::invalid(
            field,
            format!("must be at most {MAX_PROJECTION_YEARS}, got {n}"),
        ));
    }
    Ok(n as u32)
}

fn simulation_type(
    kind: Option<&RawSimulationType>,
    shock: Option<&str>,
) -> Result<SimulationType> {
    let kind = match kind {
        None => String::new(),
        Some(RawSimulationType::Name(name)) => name.trim().to_ascii_lowercase(),
        // Already closed over the known variants
        Some(RawSimulationType::Tagged(tagged)) => return Ok(*tagged),
        Some(RawSimulationType::Other(other)) => {
            return Err(Error::invalid(
                "simulationType",
                format!("{other} is not a simulation type"),
            ))
        }
    };
    match kind.as_str() {
        "" | "normal" => Ok(SimulationType::Normal),
        "optimistic" => Ok(SimulationType::Optimistic),
        "pessimistic" => Ok(SimulationType::Pessimistic),
        "crisis" => {
            let shock = match shock.map(str::trim).filter(|s| !s.is_empty()) {
                None => ShockKind::JobLoss,
                Some(name) => ShockKind::from_name(name)
                    .ok_or_else(|| Error::invalid("shock", format!("unknown shock '{name}'")))?,
            };
            Ok(SimulationType::Crisis(shock))
        }
        other => Err(Error::invalid(
            "simulationType",
            format!("unknown simulation type '{other}'"),
        )),
    }
}

//! Rank projections and measure them against a baseline

use super::guard::ratio;
use crate::params::SimulationParameters;
use crate::projection::{Metric, SimulationResult};
use log::warn;
use serde::Serialize;

/// A named scenario together with the projection it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    pub name: String,
    pub description: String,
    pub parameters: SimulationParameters,
    pub result: SimulationResult,
}

/// One compared projection
///
/// Ratio fields are `None` when their divisor was zero; render them as
/// "N/A" (see [`format_pct`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub name: String,
    /// 1 = highest final value
    pub rank: usize,
    pub initial_value: f64,
    pub final_value: f64,
    /// `(final / initial - 1) * 100`, rounded to a whole percent
    pub growth_pct: Option<i64>,
    pub delta_from_baseline: Option<f64>,
    pub delta_pct: Option<f64>,
    pub is_baseline: bool,
}

/// Render an optional percentage, "N/A" when undefined
pub fn format_pct<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(v) => format!("{v}%"),
        None => "N/A".to_string(),
    }
}

/// Compare results by `metric`, optionally against the result named `baseline`
///
/// Rows come back in input order. Ranks order by final value, highest
/// first; ties keep input order.
pub fn compare(
    results: &[SimulationResult],
    baseline: Option<&str>,
    metric: Metric,
) -> Vec<ComparisonRow> {
    compare_named(results.iter().map(|r| (r.name(), r)), baseline, metric)
}

/// Same as [`compare`], keyed by scenario names rather than parameter names
pub fn compare_scenarios(
    scenarios: &[ScenarioComparison],
    baseline: Option<&str>,
    metric: Metric,
) -> Vec<ComparisonRow> {
    compare_named(
        scenarios.iter().map(|s| (s.name.as_str(), &s.result)),
        baseline,
        metric,
    )
}

fn compare_named<'a, I>(entries: I, baseline: Option<&str>, metric: Metric) -> Vec<ComparisonRow>
where
    I: Iterator<Item = (&'a str, &'a SimulationResult)>,
{
    let entries: Vec<(&str, &SimulationResult)> = entries.collect();

    let baseline_result = baseline.and_then(|name| {
        let found = entries.iter().find(|(n, _)| *n == name).map(|(_, r)| *r);
        if found.is_none() {
            warn!("baseline '{name}' not found among {} results", entries.len());
        }
        found
    });
    let baseline_final = baseline_result.map(|r| r.final_value(metric));
    // A baseline that starts from zero has no meaningful relative scale
    let baseline_starts_at_zero = baseline_result.is_some_and(|r| r.initial(metric) == 0.0);

    let mut rows: Vec<ComparisonRow> = entries
        .iter()
        .map(|(name, result)| {
            let initial_value = result.initial(metric);
            let final_value = result.final_value(metric);
            let growth_pct = ratio(final_value, initial_value, "growth")
                .map(|r| ((r - 1.0) * 100.0).round())
                .filter(|g| g.is_finite())
                .map(|g| g as i64);

            let delta_from_baseline = baseline_final.map(|b| final_value - b);
            let delta_pct = match (delta_from_baseline, baseline_final) {
                (Some(_), Some(_)) if baseline_starts_at_zero => {
                    warn!("division guard: baseline {} starts at zero, reporting N/A", metric.label());
                    None
                }
                (Some(delta), Some(b)) => ratio(delta, b, "baseline delta").map(|r| r * 100.0),
                _ => None,
            };

            ComparisonRow {
                name: name.to_string(),
                rank: 0,
                initial_value,
                final_value,
                growth_pct,
                delta_from_baseline,
                delta_pct,
                is_baseline: baseline == Some(*name),
            }
        })
        .collect();

    let mut order: Vec<usize> = (0..rows.len()).collect();
    order.sort_by(|&a, &b| rows[b].final_value.total_cmp(&rows[a].final_value));
    for (rank, idx) in order.into_iter().enumerate() {
        rows[idx].rank = rank + 1;
    }

    rows
}

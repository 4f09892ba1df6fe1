//! Headline figures for a single projection

use super::guard::ratio;
use crate::projection::{Metric, SimulationResult};
use serde::Serialize;

/// Share of income left after expenses, as a percentage
///
/// `None` when income is zero.
pub fn savings_ratio_pct(income: f64, expenses: f64) -> Option<f64> {
    ratio(income - expenses, income, "savings ratio").map(|r| r * 100.0)
}

/// Summary card for one result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub name: String,
    pub years: u32,
    pub final_income: f64,
    pub final_expenses: f64,
    pub final_savings: f64,
    pub final_net_worth: f64,
    pub net_worth_change: f64,
    /// Sum of `income - expenses` over the projected years (year 0 excluded)
    pub total_surplus: f64,
    /// Mean of the yearly savings ratios that are defined
    pub average_savings_ratio_pct: Option<f64>,
    /// Configured savings rate, clamped to 0-100
    pub savings_rate_pct: f64,
}

impl ResultSummary {
    pub fn from_result(result: &SimulationResult) -> Self {
        let income = result.income();
        let expenses = result.expenses();

        let total_surplus: f64 = income
            .iter()
            .zip(expenses)
            .skip(1)
            .map(|(i, e)| i - e)
            .sum();

        let ratios: Vec<f64> = income
            .iter()
            .zip(expenses)
            .skip(1)
            .filter_map(|(&i, &e)| savings_ratio_pct(i, e))
            .collect();
        let average_savings_ratio_pct = if ratios.is_empty() {
            None
        } else {
            Some(ratios.iter().sum::<f64>() / ratios.len() as f64)
        };

        Self {
            name: result.name().to_string(),
            years: result.parameters().years,
            final_income: result.final_value(Metric::Income),
            final_expenses: result.final_value(Metric::Expenses),
            final_savings: result.final_value(Metric::Savings),
            final_net_worth: result.final_value(Metric::NetWorth),
            net_worth_change: result.final_value(Metric::NetWorth) - result.initial(Metric::NetWorth),
            total_surplus,
            average_savings_ratio_pct,
            savings_rate_pct: result.parameters().savings_rate.clamp(0.0, 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::SimulationParameters;
    use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionSeed};
    use approx::assert_abs_diff_eq;

    fn result(income: f64, expenses: f64, years: u32, savings_rate: f64) -> SimulationResult {
        ProjectionEngine::new(
            ProjectionSeed::new(income, expenses, 0.0, 0.0),
            ProjectionConfig::default(),
        )
        .project(&SimulationParameters {
            name: "Summary".into(),
            years,
            income_growth: 0.0,
            expense_reduction: 0.0,
            investment_return: 0.0,
            savings_rate,
            ..Default::default()
        })
    }

    #[test]
    fn test_savings_ratio() {
        assert_abs_diff_eq!(savings_ratio_pct(5_000.0, 4_000.0).unwrap(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(savings_ratio_pct(1_000.0, 1_500.0).unwrap(), -50.0, epsilon = 1e-9);
        assert_eq!(savings_ratio_pct(0.0, 100.0), None);
    }

    #[test]
    fn test_summary_flat_projection() {
        let summary = ResultSummary::from_result(&result(5_000.0, 4_000.0, 4, 50.0));

        assert_eq!(summary.years, 4);
        assert_eq!(summary.final_income, 5_000.0);
        assert_abs_diff_eq!(summary.total_surplus, 4_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.final_savings, 2_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.net_worth_change, 4_000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.average_savings_ratio_pct.unwrap(), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn test_summary_zero_income() {
        let summary = ResultSummary::from_result(&result(0.0, 100.0, 3, 10.0));
        assert_eq!(summary.average_savings_ratio_pct, None);
        assert!(summary.final_net_worth < 0.0);
    }

    #[test]
    fn test_summary_zero_years() {
        let summary = ResultSummary::from_result(&result(100.0, 50.0, 0, 10.0));
        assert_eq!(summary.total_surplus, 0.0);
        assert_eq!(summary.average_savings_ratio_pct, None);
        assert_eq!(summary.net_worth_change, 0.0);
    }

    #[test]
    fn test_savings_rate_clamped_for_reporting() {
        assert_eq!(ResultSummary::from_result(&result(1.0, 0.0, 1, 140.0)).savings_rate_pct, 100.0);
        assert_eq!(ResultSummary::from_result(&result(1.0, 0.0, 1, -5.0)).savings_rate_pct, 0.0);
    }
}

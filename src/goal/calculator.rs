//! Savings-goal trajectories

use crate::projection::Clock;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A single target-amount savings goal
///
/// Amounts are in currency units, rates are annual percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalDefinition {
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub inflation_rate: f64,
    pub years: u32,
}

impl GoalDefinition {
    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Whole years of contributions (ignoring interest) still needed
    ///
    /// `Some(0)` once the goal is met. `None` when nothing is contributed
    /// and the goal is unmet, since the goal can never be reached that way.
    pub fn years_to_target(&self) -> Option<u32> {
        let remaining = self.target_amount - self.current_amount;
        if remaining <= 0.0 {
            return Some(0);
        }
        let yearly = self.monthly_contribution * 12.0;
        if yearly <= 0.0 {
            warn!("years to target undefined: no contribution toward unmet goal");
            return None;
        }
        // `as` saturates for values beyond u32
        Some((remaining / yearly).ceil().max(0.0) as u32)
    }

    /// Current amount as a percentage of the target
    pub fn progress_pct(&self) -> Option<f64> {
        if self.target_amount == 0.0 {
            warn!("goal progress undefined: target amount is zero");
            return None;
        }
        Some(self.current_amount / self.target_amount * 100.0)
    }
}

/// Nominal and inflation-adjusted goal balances, one point per year
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalResult {
    years: Vec<i32>,
    amounts: Vec<f64>,
    adjusted_for_inflation: Vec<f64>,
}

impl GoalResult {
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn amounts(&self) -> &[f64] {
        &self.amounts
    }

    pub fn adjusted_for_inflation(&self) -> &[f64] {
        &self.adjusted_for_inflation
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn final_amount(&self) -> f64 {
        self.amounts.last().copied().unwrap_or(0.0)
    }

    /// First calendar year whose nominal balance reaches `target`
    pub fn first_year_reaching(&self, target: f64) -> Option<i32> {
        self.amounts
            .iter()
            .position(|&a| a >= target)
            .map(|i| self.years[i])
    }
}

/// Compound a goal for `goal.years` years starting at the clock's year
///
/// Each year the twelve monthly contributions are added first and then the
/// whole balance earns `interest_rate`. Year 0 is the current amount as
/// given; later points are rounded to whole units.
pub fn project_goal<C: Clock + ?Sized>(goal: &GoalDefinition, clock: &C) -> GoalResult {
    let start_year = clock.current_year();
    let n = goal.years as usize + 1;
    let growth = 1.0 + goal.interest_rate / 100.0;
    let deflator = 1.0 + goal.inflation_rate / 100.0;
    let yearly_contribution = goal.monthly_contribution * 12.0;

    let mut years = Vec::with_capacity(n);
    let mut amounts = Vec::with_capacity(n);
    let mut adjusted = Vec::with_capacity(n);

    years.push(start_year);
    amounts.push(goal.current_amount);
    adjusted.push(goal.current_amount);

    let mut total = goal.current_amount;
    for i in 1..=goal.years {
        total += yearly_contribution;
        total *= growth;

        let periods = i32::try_from(i).unwrap_or(i32::MAX);
        years.push(start_year.saturating_add(periods));
        amounts.push(total.round());
        adjusted.push((total / deflator.powi(periods)).round());
    }

    debug!(
        "goal projected over {} years: {:.0} nominal, target {:.0}",
        goal.years, total, goal.target_amount
    );

    GoalResult {
        years,
        amounts,
        adjusted_for_inflation: adjusted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::FixedClock;

    fn goal() -> GoalDefinition {
        GoalDefinition {
            target_amount: 20_000.0,
            current_amount: 1_000.0,
            monthly_contribution: 100.0,
            interest_rate: 5.0,
            inflation_rate: 2.0,
            years: 5,
        }
    }

    #[test]
    fn test_flat_goal_at_zero_rates() {
        let g = GoalDefinition {
            target_amount: 5_000.0,
            current_amount: 1_000.0,
            monthly_contribution: 0.0,
            interest_rate: 0.0,
            inflation_rate: 0.0,
            years: 5,
        };
        let result = project_goal(&g, &FixedClock(2025));

        assert_eq!(result.amounts(), &[1000.0; 6]);
        assert_eq!(result.adjusted_for_inflation(), &[1000.0; 6]);
    }

    #[test]
    fn test_recurrence() {
        let result = project_goal(&goal(), &FixedClock(2025));

        assert_eq!(result.years(), &[2025, 2026, 2027, 2028, 2029, 2030]);
        // (1000 + 1200) * 1.05 = 2310
        assert_eq!(result.amounts()[1], 2310.0);
        // (2310 + 1200) * 1.05 = 3685.5 -> 3686
        assert_eq!(result.amounts()[2], 3686.0);
        // 2310 / 1.02 = 2264.7 -> 2265
        assert_eq!(result.adjusted_for_inflation()[1], 2265.0);
        // 3685.5 / 1.0404 = 3542.4 -> 3542
        assert_eq!(result.adjusted_for_inflation()[2], 3542.0);
    }

    #[test]
    fn test_year_zero_is_exact_current_amount() {
        let g = GoalDefinition {
            current_amount: 1234.56,
            ..goal()
        };
        let result = project_goal(&g, &FixedClock(2025));

        assert_eq!(result.amounts()[0], 1234.56);
        assert_eq!(result.adjusted_for_inflation()[0], result.amounts()[0]);
    }

    #[test]
    fn test_zero_years() {
        let g = GoalDefinition { years: 0, ..goal() };
        let result = project_goal(&g, &FixedClock(2025));

        assert_eq!(result.len(), 1);
        assert_eq!(result.years(), &[2025]);
        assert_eq!(result.final_amount(), 1000.0);
    }

    #[test]
    fn test_inflation_erodes_real_value() {
        let result = project_goal(&goal(), &FixedClock(2025));
        for i in 1..result.len() {
            assert!(result.adjusted_for_inflation()[i] < result.amounts()[i]);
        }
    }

    #[test]
    fn test_input_untouched() {
        let g = goal();
        let _ = project_goal(&g, &FixedClock(2025));
        assert_eq!(g, goal());
    }

    #[test]
    fn test_years_to_target() {
        // 19000 remaining / 1200 per year = 15.8 -> 16
        assert_eq!(goal().years_to_target(), Some(16));

        let met = GoalDefinition {
            current_amount: 25_000.0,
            ..goal()
        };
        assert_eq!(met.years_to_target(), Some(0));

        let stalled = GoalDefinition {
            monthly_contribution: 0.0,
            ..goal()
        };
        assert_eq!(stalled.years_to_target(), None);

        let stalled_but_met = GoalDefinition {
            monthly_contribution: 0.0,
            current_amount: 20_000.0,
            ..goal()
        };
        assert_eq!(stalled_but_met.years_to_target(), Some(0));
    }

    #[test]
    fn test_progress() {
        let pct = goal().progress_pct().unwrap();
        assert!((pct - 5.0).abs() < 1e-9);

        let no_target = GoalDefinition {
            target_amount: 0.0,
            ..goal()
        };
        assert_eq!(no_target.progress_pct(), None);
    }

    #[test]
    fn test_first_year_reaching() {
        let g = GoalDefinition { years: 20, ..goal() };
        let result = project_goal(&g, &FixedClock(2025));

        let year = result.first_year_reaching(g.target_amount).unwrap();
        let idx = (year - 2025) as usize;
        assert!(result.amounts()[idx] >= g.target_amount);
        assert!(result.amounts()[idx - 1] < g.target_amount);
        assert_eq!(result.first_year_reaching(f64::MAX), None);
    }

    #[test]
    fn test_deserialize_defaults() {
        let g: GoalDefinition =
            serde_json::from_str(r#"{"targetAmount": 5000, "years": 3}"#).unwrap();
        assert_eq!(g.current_amount, 0.0);
        assert_eq!(g.monthly_contribution, 0.0);
    }
}

//! Yearly compounding of income, expenses, savings and net worth

use super::clock::Clock;
use super::result::{SimulationResult, YearRow};
use super::seed::ProjectionSeed;
use crate::params::SimulationParameters;
use log::debug;

/// How the `years` series is labelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearLabels {
    /// `start_year + i`
    Calendar { start_year: i32 },
    /// Plain offsets `0, 1, 2, ...`
    Offset,
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    pub year_labels: YearLabels,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            year_labels: YearLabels::Offset,
        }
    }
}

impl ProjectionConfig {
    /// Label years starting from the clock's current year
    pub fn calendar<C: Clock + ?Sized>(clock: &C) -> Self {
        Self {
            year_labels: YearLabels::Calendar {
                start_year: clock.current_year(),
            },
        }
    }

    fn label(&self, offset: u32) -> i32 {
        match self.year_labels {
            YearLabels::Calendar { start_year } => start_year.saturating_add_unsigned(offset),
            YearLabels::Offset => i32::try_from(offset).unwrap_or(i32::MAX),
        }
    }
}

/// Deterministic projection engine
///
/// Holds the year-0 seed and labelling config; [`ProjectionEngine::project`]
/// is pure and may be called from any number of threads.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    seed: ProjectionSeed,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(seed: ProjectionSeed, config: ProjectionConfig) -> Self {
        Self { seed, config }
    }

    pub fn seed(&self) -> &ProjectionSeed {
        &self.seed
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Project `params.years` years forward from the seed
    ///
    /// For each year after the seed:
    /// - income grows by `income_growth`%
    /// - expenses shrink by `expense_reduction`%, never below 0
    /// - savings accrue `savings_rate`% of the surplus
    /// - net worth earns `investment_return`% and takes the full surplus
    ///
    /// Rates are used as given; scenario transforms happen before this call
    /// and shocks after it.
    pub fn project(&self, params: &SimulationParameters) -> SimulationResult {
        let income_factor = 1.0 + params.income_growth / 100.0;
        let expense_factor = 1.0 - params.expense_reduction / 100.0;
        let return_factor = 1.0 + params.investment_return / 100.0;
        let savings_share = params.savings_rate / 100.0;

        // Year 0 is the seed as given
        let mut result = SimulationResult::with_capacity(params.clone());
        let mut row = YearRow {
            year: self.config.label(0),
            income: self.seed.income,
            expenses: self.seed.expenses,
            savings: self.seed.savings,
            net_worth: self.seed.net_worth,
        };
        result.push(row);

        for offset in 1..=params.years {
            // Grow income and cut expenses first; a cut above 100% would
            // otherwise flip expenses negative
            let income = row.income * income_factor;
            let expenses = (row.expenses * expense_factor).max(0.0);
            let surplus = income - expenses;

            // Savings take only their share of the surplus and earn nothing.
            // Net worth compounds last year's balance, then takes the whole
            // surplus, which may be negative.
            row = YearRow {
                year: self.config.label(offset),
                income,
                expenses,
                savings: row.savings + surplus * savings_share,
                net_worth: row.net_worth * return_factor + surplus,
            };
            result.push(row);
        }

        debug!(
            "projected '{}' over {} years: final net worth {:.2}",
            params.name, params.years, row.net_worth
        );
        result
    }
}

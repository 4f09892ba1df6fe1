//! Projection output series

use crate::params::SimulationParameters;
use serde::Serialize;

/// Which yearly series a comparison or summary reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Income,
    Expenses,
    Savings,
    #[default]
    NetWorth,
}

impl Metric {
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Income => "Income",
            Metric::Expenses => "Expenses",
            Metric::Savings => "Savings",
            Metric::NetWorth => "Net Worth",
        }
    }
}

/// One row of a result, used for tabular output
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRow {
    pub year: i32,
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub net_worth: f64,
}

/// Year-indexed projection series
///
/// All five series have length `parameters.years + 1`. Index 0 is the
/// seed snapshot. Results are read-only outside the crate; derived
/// variants (see [`crate::scenario::apply_shock`]) are new values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    years: Vec<i32>,
    income: Vec<f64>,
    expenses: Vec<f64>,
    savings: Vec<f64>,
    net_worth: Vec<f64>,
    parameters: SimulationParameters,
}

impl SimulationResult {
    pub(crate) fn with_capacity(parameters: SimulationParameters) -> Self {
        let n = parameters.years as usize + 1;
        Self {
            years: Vec::with_capacity(n),
            income: Vec::with_capacity(n),
            expenses: Vec::with_capacity(n),
            savings: Vec::with_capacity(n),
            net_worth: Vec::with_capacity(n),
            parameters,
        }
    }

    pub(crate) fn push(&mut self, row: YearRow) {
        self.years.push(row.year);
        self.income.push(row.income);
        self.expenses.push(row.expenses);
        self.savings.push(row.savings);
        self.net_worth.push(row.net_worth);
    }

    /// Mutable views for the shock applier, which only ever works on its own clone
    pub(crate) fn series_mut(&mut self) -> SeriesMut<'_> {
        SeriesMut {
            income: &mut self.income,
            expenses: &mut self.expenses,
            savings: &mut self.savings,
            net_worth: &mut self.net_worth,
        }
    }

    pub(crate) fn set_parameters(&mut self, parameters: SimulationParameters) {
        self.parameters = parameters;
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn income(&self) -> &[f64] {
        &self.income
    }

    pub fn expenses(&self) -> &[f64] {
        &self.expenses
    }

    pub fn savings(&self) -> &[f64] {
        &self.savings
    }

    pub fn net_worth(&self) -> &[f64] {
        &self.net_worth
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn name(&self) -> &str {
        &self.parameters.name
    }

    /// Number of points in every series
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn series(&self, metric: Metric) -> &[f64] {
        match metric {
            Metric::Income => &self.income,
            Metric::Expenses => &self.expenses,
            Metric::Savings => &self.savings,
            Metric::NetWorth => &self.net_worth,
        }
    }

    /// Year-0 value of a metric
    pub fn initial(&self, metric: Metric) -> f64 {
        self.series(metric).first().copied().unwrap_or(0.0)
    }

    /// Last projected value of a metric
    pub fn final_value(&self, metric: Metric) -> f64 {
        self.series(metric).last().copied().unwrap_or(0.0)
    }

    pub fn row(&self, index: usize) -> Option<YearRow> {
        Some(YearRow {
            year: *self.years.get(index)?,
            income: self.income[index],
            expenses: self.expenses[index],
            savings: self.savings[index],
            net_worth: self.net_worth[index],
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = YearRow> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }
}

pub(crate) struct SeriesMut<'a> {
    pub income: &'a mut [f64],
    pub expenses: &'a mut [f64],
    pub savings: &'a mut [f64],
    pub net_worth: &'a mut [f64],
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_year_result() -> SimulationResult {
        let mut result = SimulationResult::with_capacity(SimulationParameters {
            years: 1,
            ..Default::default()
        });
        result.push(YearRow { year: 2024, income: 100.0, expenses: 80.0, savings: 10.0, net_worth: 50.0 });
        result.push(YearRow { year: 2025, income: 110.0, expenses: 85.0, savings: 20.0, net_worth: 90.0 });
        result
    }

    #[test]
    fn test_series_accessors() {
        let result = two_year_result();

        assert_eq!(result.len(), 2);
        assert_eq!(result.years(), &[2024, 2025]);
        assert_eq!(result.initial(Metric::NetWorth), 50.0);
        assert_eq!(result.final_value(Metric::Income), 110.0);
        assert_eq!(result.series(Metric::Savings), &[10.0, 20.0]);
    }

    #[test]
    fn test_rows() {
        let result = two_year_result();
        let rows: Vec<YearRow> = result.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].expenses, 85.0);
        assert!(result.row(2).is_none());
    }
}

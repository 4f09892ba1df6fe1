//! Year-0 seed values and the current-totals collaborator
//!
//! The engine does not compute the user's current position. A
//! [`TotalsProvider`] sums whatever line items the application tracks and
//! the engine seeds year 0 from the result.

use serde::{Deserialize, Serialize};

/// Current monthly flows and balances
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTotals {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub savings: f64,
    pub debt: f64,
}

/// Source of the user's current totals
pub trait TotalsProvider {
    fn current_totals(&self) -> CurrentTotals;
}

impl TotalsProvider for CurrentTotals {
    fn current_totals(&self) -> CurrentTotals {
        *self
    }
}

/// A single tracked amount (salary, rent, brokerage account, car loan...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: f64,
}

impl LineItem {
    pub fn new(label: impl Into<String>, amount: f64) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Line items grouped by kind; income and expenses are monthly amounts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub incomes: Vec<LineItem>,
    #[serde(default)]
    pub expenses: Vec<LineItem>,
    #[serde(default)]
    pub savings: Vec<LineItem>,
    #[serde(default)]
    pub debts: Vec<LineItem>,
}

fn sum(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.amount).filter(|a| a.is_finite()).sum()
}

impl TotalsProvider for Ledger {
    fn current_totals(&self) -> CurrentTotals {
        CurrentTotals {
            monthly_income: sum(&self.incomes),
            monthly_expenses: sum(&self.expenses),
            savings: sum(&self.savings),
            debt: sum(&self.debts),
        }
    }
}

/// Year-0 values for the four projected series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSeed {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub net_worth: f64,
}

impl ProjectionSeed {
    pub fn new(income: f64, expenses: f64, savings: f64, net_worth: f64) -> Self {
        Self {
            income,
            expenses,
            savings,
            net_worth,
        }
    }

    /// Annualize monthly flows; net worth starts as savings minus debt
    pub fn from_totals(totals: &CurrentTotals) -> Self {
        Self {
            income: totals.monthly_income * 12.0,
            expenses: totals.monthly_expenses * 12.0,
            savings: totals.savings,
            net_worth: totals.savings - totals.debt,
        }
    }

    pub fn from_provider<T: TotalsProvider + ?Sized>(provider: &T) -> Self {
        Self::from_totals(&provider.current_totals())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_totals() {
        let ledger = Ledger {
            incomes: vec![LineItem::new("Salary", 4_000.0), LineItem::new("Freelance", 500.0)],
            expenses: vec![LineItem::new("Rent", 1_500.0), LineItem::new("Food", 600.0)],
            savings: vec![LineItem::new("Emergency fund", 10_000.0)],
            debts: vec![LineItem::new("Car loan", 3_000.0)],
        };
        let totals = ledger.current_totals();

        assert_eq!(totals.monthly_income, 4_500.0);
        assert_eq!(totals.monthly_expenses, 2_100.0);
        assert_eq!(totals.savings, 10_000.0);
        assert_eq!(totals.debt, 3_000.0);
    }

    #[test]
    fn test_non_finite_items_ignored() {
        let ledger = Ledger {
            incomes: vec![LineItem::new("Salary", 1_000.0), LineItem::new("Typo", f64::NAN)],
            ..Default::default()
        };
        assert_eq!(ledger.current_totals().monthly_income, 1_000.0);
    }

    #[test]
    fn test_seed_from_totals() {
        let totals = CurrentTotals {
            monthly_income: 5_000.0,
            monthly_expenses: 3_000.0,
            savings: 20_000.0,
            debt: 25_000.0,
        };
        let seed = ProjectionSeed::from_provider(&totals);

        assert_eq!(seed.income, 60_000.0);
        assert_eq!(seed.expenses, 36_000.0);
        assert_eq!(seed.savings, 20_000.0);
        assert_eq!(seed.net_worth, -5_000.0);
    }
}

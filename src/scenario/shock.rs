//! Crisis shocks applied to a finished projection
//!
//! A shock clones the baseline result and perturbs only the year indices
//! it targets. Savings entries a shock touches are floored at 0; net worth
//! may go negative. Indices past the projection horizon are skipped.

use crate::params::{ShockKind, SimulationType};
use crate::projection::{CurrentTotals, SimulationResult};
use log::debug;

// ============================================================================
// Shock Sizing
// ============================================================================
// Year indices count from the seed (index 0). Amounts are sized from the
// user's current monthly totals, not from the projected series, so every
// scenario built from the same totals sees the same shock.

/// Year index hit by a job loss
pub const JOB_LOSS_YEAR: usize = 2;
/// Share of income kept during the job-loss year
pub const JOB_LOSS_INCOME_FACTOR: f64 = 0.3;
/// Share of that year's expenses drawn from savings
pub const JOB_LOSS_EXPENSE_DRAW: f64 = 0.7;

/// Year index of the medical bill
pub const MEDICAL_EMERGENCY_YEAR: usize = 1;
/// Medical bill, in months of current income
pub const MEDICAL_EMERGENCY_MONTHS: f64 = 6.0;

/// First year of higher debt service
pub const RATE_RISE_FIRST_YEAR: usize = 1;
/// Yearly extra cost as a share of current monthly expenses
pub const RATE_RISE_EXPENSE_SHARE: f64 = 0.15;

/// Year of the down payment and first mortgage payment
pub const HOUSING_PURCHASE_YEAR: usize = 2;
/// Down payment, in months of current income
pub const DOWN_PAYMENT_MONTHS: f64 = 24.0;
/// Mortgage payment as a share of current monthly income, paid 12 times a year
pub const MORTGAGE_INCOME_SHARE: f64 = 0.33;
/// Share of each mortgage payment that becomes home equity
pub const MORTGAGE_EQUITY_SHARE: f64 = 0.30;

/// Derive a shocked variant of `baseline`
///
/// The returned result owns fresh series; `baseline` is left as it was and
/// stays valid for comparison. `totals` supplies the current monthly
/// income and expenses that size the shock.
pub fn apply_shock(
    baseline: &SimulationResult,
    kind: ShockKind,
    totals: &CurrentTotals,
) -> SimulationResult {
    let mut shocked = baseline.clone();
    let mut parameters = baseline.parameters().clone();
    parameters.simulation_type = SimulationType::Crisis(kind);
    shocked.set_parameters(parameters);

    let s = shocked.series_mut();
    let len = s.income.len();

    match kind {
        ShockKind::JobLoss => {
            let i = JOB_LOSS_YEAR;
            if i < len {
                // Living costs not covered by the reduced income come out of savings
                let draw = s.expenses[i] * JOB_LOSS_EXPENSE_DRAW;
                s.income[i] *= JOB_LOSS_INCOME_FACTOR;
                s.savings[i] = (s.savings[i] - draw).max(0.0);
                s.net_worth[i] -= draw;
            }
        }
        ShockKind::MedicalEmergency => {
            let i = MEDICAL_EMERGENCY_YEAR;
            if i < len {
                // One-off bill: booked as an expense and paid from savings
                let cost = totals.monthly_income * MEDICAL_EMERGENCY_MONTHS;
                s.expenses[i] += cost;
                s.savings[i] = (s.savings[i] - cost).max(0.0);
                s.net_worth[i] -= cost;
            }
        }
        ShockKind::InterestRateRise => {
            // Same extra cost every year; it does not compound
            let cost = totals.monthly_expenses * RATE_RISE_EXPENSE_SHARE;
            for i in RATE_RISE_FIRST_YEAR..len {
                s.expenses[i] += cost;
                s.savings[i] = (s.savings[i] - cost).max(0.0);
                s.net_worth[i] -= cost;
            }
        }
        ShockKind::HousingPurchase => {
            let first = HOUSING_PURCHASE_YEAR;

            // Down payment leaves savings and net worth once
            if first < len {
                let down_payment = totals.monthly_income * DOWN_PAYMENT_MONTHS;
                s.savings[first] = (s.savings[first] - down_payment).max(0.0);
                s.net_worth[first] -= down_payment;
            }

            // Mortgage from the purchase year on. The full payment is an
            // expense, but the principal share comes back as home equity, so
            // net worth only loses the interest part (70% of the payment).
            // Savings are untouched; the payment is funded from income.
            let payment = totals.monthly_income * MORTGAGE_INCOME_SHARE * 12.0;
            let equity = payment * MORTGAGE_EQUITY_SHARE;
            for i in first..len {
                s.expenses[i] += payment;
                s.net_worth[i] -= payment - equity;
            }
        }
    }

    debug!(
        "applied {} shock to '{}' ({} points)",
        kind.label(),
        shocked.name(),
        len
    );
    shocked
}

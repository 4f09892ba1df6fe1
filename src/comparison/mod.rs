//! Side-by-side comparison and summary metrics for projections

mod comparator;
mod guard;
mod summary;

pub use comparator::{compare, compare_scenarios, format_pct, ComparisonRow, ScenarioComparison};
pub use guard::ratio;
pub use summary::{savings_ratio_pct, ResultSummary};

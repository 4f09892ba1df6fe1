//! Project the standard scenario set (or a parameter file) and print a comparison
//!
//! Examples:
//!   run_scenarios --monthly-income 5000 --monthly-expenses 3500 --savings 12000
//!   run_scenarios --params plans.json --baseline "Current plan" --output cmp.csv

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use finance_projection::{
    comparison::{compare, compare_scenarios, format_pct, ComparisonRow, ResultSummary},
    export::{write_comparison_csv, write_result_csv},
    params::{load_parameters, validate, RawParameters, RawValue},
    projection::{CurrentTotals, Ledger, Metric, ProjectionConfig, SystemClock, TotalsProvider},
    scenario::{ScenarioRunner, BASELINE_SCENARIO},
    SimulationParameters, SimulationResult,
};
use std::fs::{self, File};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MetricArg {
    Income,
    Expenses,
    Savings,
    NetWorth,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Income => Metric::Income,
            MetricArg::Expenses => Metric::Expenses,
            MetricArg::Savings => Metric::Savings,
            MetricArg::NetWorth => Metric::NetWorth,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Run personal-finance projections and compare scenarios")]
struct Args {
    /// JSON file with one parameter object or an array of them
    #[arg(long)]
    params: Option<PathBuf>,

    /// JSON ledger of income/expense/savings/debt line items
    #[arg(long, conflicts_with_all = ["monthly_income", "monthly_expenses", "savings", "debt"])]
    ledger: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0)]
    monthly_income: f64,

    #[arg(long, default_value_t = 0.0)]
    monthly_expenses: f64,

    #[arg(long, default_value_t = 0.0)]
    savings: f64,

    #[arg(long, default_value_t = 0.0)]
    debt: f64,

    /// Projection horizon when no parameter file is given
    #[arg(long, default_value_t = 10)]
    years: u32,

    #[arg(long)]
    income_growth: Option<f64>,

    #[arg(long)]
    expense_reduction: Option<f64>,

    #[arg(long)]
    investment_return: Option<f64>,

    #[arg(long)]
    inflation_rate: Option<f64>,

    #[arg(long)]
    savings_rate: Option<f64>,

    /// Name of the result to measure deltas against
    #[arg(long)]
    baseline: Option<String>,

    #[arg(long, value_enum, default_value = "net-worth")]
    metric: MetricArg,

    /// Label years 0, 1, 2... instead of calendar years
    #[arg(long)]
    offset_years: bool,

    /// Write the comparison table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write the baseline's yearly series to this CSV file
    #[arg(long)]
    series: Option<PathBuf>,
}

fn current_totals(args: &Args) -> Result<CurrentTotals> {
    match &args.ledger {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading ledger {}", path.display()))?;
            let ledger: Ledger = serde_json::from_str(&contents)
                .with_context(|| format!("parsing ledger {}", path.display()))?;
            Ok(ledger.current_totals())
        }
        None => Ok(CurrentTotals {
            monthly_income: args.monthly_income,
            monthly_expenses: args.monthly_expenses,
            savings: args.savings,
            debt: args.debt,
        }),
    }
}

fn cli_parameters(args: &Args) -> Result<SimulationParameters> {
    let raw = RawParameters {
        name: Some(BASELINE_SCENARIO.to_string()),
        years: Some(RawValue::from(args.years)),
        income_growth: args.income_growth.map(RawValue::from),
        expense_reduction: args.expense_reduction.map(RawValue::from),
        investment_return: args.investment_return.map(RawValue::from),
        inflation_rate: args.inflation_rate.map(RawValue::from),
        savings_rate: args.savings_rate.map(RawValue::from),
        ..Default::default()
    };
    validate(&raw).context("invalid command line parameters")
}

fn print_rows(rows: &[ComparisonRow], metric: Metric) {
    println!(
        "{:<22} {:>4} {:>16} {:>16} {:>8} {:>16} {:>10}",
        "Scenario",
        "Rank",
        format!("Initial {}", metric.label()),
        format!("Final {}", metric.label()),
        "Growth",
        "vs Baseline",
        "Delta %"
    );
    for row in rows {
        let delta = row
            .delta_from_baseline
            .map(|d| format!("{d:.0}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<22} {:>4} {:>16.0} {:>16.0} {:>8} {:>16} {:>10}",
            row.name,
            row.rank,
            row.initial_value,
            row.final_value,
            format_pct(row.growth_pct),
            delta,
            format_pct(row.delta_pct.map(|p| format!("{p:.1}"))),
        );
    }
}

fn print_summary(result: &SimulationResult) {
    let summary = ResultSummary::from_result(result);
    println!("\n{} summary:", summary.name);
    println!("  Years:                {}", summary.years);
    println!("  Final income:         {:.0}", summary.final_income);
    println!("  Final expenses:       {:.0}", summary.final_expenses);
    println!("  Final savings:        {:.0}", summary.final_savings);
    println!("  Final net worth:      {:.0}", summary.final_net_worth);
    println!("  Net worth change:     {:.0}", summary.net_worth_change);
    println!(
        "  Avg savings ratio:    {}",
        format_pct(summary.average_savings_ratio_pct.map(|p| format!("{p:.1}")))
    );
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let totals = current_totals(&args)?;
    let config = if args.offset_years {
        ProjectionConfig::default()
    } else {
        ProjectionConfig::calendar(&SystemClock)
    };
    let runner = ScenarioRunner::new(totals, config);
    let metric = Metric::from(args.metric);

    let params = match &args.params {
        Some(path) => load_parameters(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => vec![cli_parameters(&args)?],
    };

    println!(
        "Current totals: income {:.0}/mo, expenses {:.0}/mo, savings {:.0}, debt {:.0}",
        totals.monthly_income, totals.monthly_expenses, totals.savings, totals.debt
    );

    let (rows, baseline_result) = if params.len() == 1 {
        let comparisons = runner.run_all(&params[0]);
        let baseline = args.baseline.as_deref().unwrap_or(BASELINE_SCENARIO);
        let rows = compare_scenarios(&comparisons, Some(baseline), metric);
        let baseline_result = comparisons
            .iter()
            .find(|c| c.name == baseline)
            .map(|c| c.result.clone());
        (rows, baseline_result)
    } else {
        let results = runner.run_batch(&params);
        let baseline = args.baseline.as_deref().or_else(|| results.first().map(|r| r.name()));
        let rows = compare(&results, baseline, metric);
        let baseline_result = baseline
            .and_then(|name| results.iter().find(|r| r.name() == name))
            .cloned();
        (rows, baseline_result)
    };

    println!();
    print_rows(&rows, metric);

    if let Some(result) = &baseline_result {
        print_summary(result);

        if let Some(path) = &args.series {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_result_csv(result, file)?;
            println!("\nBaseline series written to {}", path.display());
        }
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_comparison_csv(&rows, file)?;
        println!("Comparison written to {}", path.display());
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

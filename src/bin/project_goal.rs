//! Print the trajectory of a single savings goal
//!
//! Either pass the goal inline or point at a JSON file:
//!   project_goal --target 20000 --current 1000 --monthly 150 --interest 4 --years 10
//!   project_goal --goal goal.json --output goal.csv

use anyhow::{Context, Result};
use clap::Parser;
use finance_projection::{
    export::write_goal_csv,
    params::{load_goal, validate_goal},
    project_goal, GoalDefinition, SystemClock,
};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Project progress toward a savings goal")]
struct Args {
    /// JSON file holding a goal definition
    #[arg(long, conflicts_with_all = ["target", "current", "monthly", "interest", "inflation", "years"])]
    goal: Option<PathBuf>,

    #[arg(long, default_value_t = 0.0)]
    target: f64,

    #[arg(long, default_value_t = 0.0)]
    current: f64,

    /// Monthly contribution
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,

    /// Annual interest rate, percent
    #[arg(long, default_value_t = 0.0)]
    interest: f64,

    /// Annual inflation rate, percent
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Write the trajectory to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let goal = match &args.goal {
        Some(path) => {
            load_goal(path).with_context(|| format!("loading goal from {}", path.display()))?
        }
        None => validate_goal(&GoalDefinition {
            target_amount: args.target,
            current_amount: args.current,
            monthly_contribution: args.monthly,
            interest_rate: args.interest,
            inflation_rate: args.inflation,
            years: args.years,
        })
        .context("invalid goal")?,
    };

    let result = project_goal(&goal, &SystemClock);

    println!("{:<6} {:>14} {:>14}", "Year", "Nominal", "Real");
    for ((year, amount), real) in result
        .years()
        .iter()
        .zip(result.amounts())
        .zip(result.adjusted_for_inflation())
    {
        println!("{:<6} {:>14.0} {:>14.0}", year, amount, real);
    }

    println!();
    match goal.progress_pct() {
        Some(pct) => println!("Progress:        {:.1}%", pct),
        None => println!("Progress:        N/A"),
    }
    match goal.years_to_target() {
        Some(0) => println!("Years remaining: goal reached"),
        Some(n) => println!("Years remaining: {} (contributions only)", n),
        None => println!("Years remaining: N/A (no monthly contribution)"),
    }
    match result.first_year_reaching(goal.target_amount) {
        Some(year) => println!("Target reached:  {}", year),
        None => println!("Target reached:  not within {} years", goal.years),
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_goal_csv(&result, file)?;
        println!("\nOutput written to {}", path.display());
    }

    Ok(())
}

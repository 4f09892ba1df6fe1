//! CSV output of projection, goal and comparison series

use crate::comparison::ComparisonRow;
use crate::error::Result;
use crate::goal::GoalResult;
use crate::projection::SimulationResult;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalRow {
    year: i32,
    amount: f64,
    adjusted_for_inflation: f64,
}

/// One line per year: year, income, expenses, savings, netWorth
pub fn write_result_csv<W: Write>(result: &SimulationResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in result.rows() {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// One line per year: year, amount, adjustedForInflation
pub fn write_goal_csv<W: Write>(goal: &GoalResult, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for ((&year, &amount), &adjusted) in goal
        .years()
        .iter()
        .zip(goal.amounts())
        .zip(goal.adjusted_for_inflation())
    {
        wtr.serialize(GoalRow {
            year,
            amount,
            adjusted_for_inflation: adjusted,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// One line per compared result; undefined ratios are left empty
pub fn write_comparison_csv<W: Write>(rows: &[ComparisonRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::compare;
    use crate::goal::{project_goal, GoalDefinition};
    use crate::params::SimulationParameters;
    use crate::projection::{FixedClock, Metric, ProjectionConfig, ProjectionEngine, ProjectionSeed};

    fn result(years: u32) -> SimulationResult {
        ProjectionEngine::new(
            ProjectionSeed::new(1200.0, 1000.0, 0.0, 0.0),
            ProjectionConfig::calendar(&FixedClock(2025)),
        )
        .project(&SimulationParameters {
            name: "Export".into(),
            years,
            ..Default::default()
        })
    }

    #[test]
    fn test_result_csv() {
        let mut buf = Vec::new();
        write_result_csv(&result(3), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "year,income,expenses,savings,netWorth");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].starts_with("2025,1200.0,1000.0,"));
    }

    #[test]
    fn test_goal_csv() {
        let goal = GoalDefinition {
            target_amount: 10_000.0,
            current_amount: 500.0,
            monthly_contribution: 50.0,
            interest_rate: 0.0,
            inflation_rate: 0.0,
            years: 2,
        };
        let mut buf = Vec::new();
        write_goal_csv(&project_goal(&goal, &FixedClock(2030)), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(
            text.lines().collect::<Vec<_>>(),
            vec![
                "year,amount,adjustedForInflation",
                "2030,500.0,500.0",
                "2031,1100.0,1100.0",
                "2032,1700.0,1700.0",
            ]
        );
    }

    #[test]
    fn test_comparison_csv_leaves_na_empty() {
        let zero = ProjectionEngine::new(ProjectionSeed::default(), ProjectionConfig::default())
            .project(&SimulationParameters {
                name: "Zero".into(),
                years: 0,
                ..Default::default()
            });
        let rows = compare(&[zero], Some("Zero"), Metric::NetWorth);

        let mut buf = Vec::new();
        write_comparison_csv(&rows, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "name,rank,initialValue,finalValue,growthPct,deltaFromBaseline,deltaPct,isBaseline"
        );
        assert_eq!(lines[1], "Zero,1,0.0,0.0,,0.0,,true");
    }
}

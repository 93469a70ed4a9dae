//! Lineup optimization command: roster in, best lineup(s) out.
//!
//! Loads and validates the roster file, builds the position index, then
//! runs the cap-pruned search. Three modes share that pipeline:
//!
//! - default: branch-and-bound for the single best lineup (`--parallel`
//!   splits the outermost slot across threads)
//! - `--top K`: the K best lineups under the same ordering
//! - `--all`: every valid lineup in traversal order
//!
//! Output is text lines or `--json`; an empty result is reported as a
//! normal outcome, not an error.

use crate::{
    commands::resolve_salary_cap,
    config::Configuration,
    ingest,
    models::output::{project, LineupReport},
    roster::RosterIndex,
    search::{search, Solver},
    select, Result,
};
use std::path::PathBuf;

/// Configuration parameters for the optimize command.
#[derive(Debug)]
pub struct OptimizeParams {
    pub input: PathBuf,
    pub salary_cap: Option<u32>,
    pub as_json: bool,
    pub top: Option<usize>,
    pub all: bool,
    pub parallel: bool,
    pub verbose: bool,
}

/// Run the optimization pipeline and print the result.
///
/// # Errors
///
/// Returns an error if the roster file cannot be read, the resolved salary
/// cap is invalid, or JSON serialization fails. Finding no feasible lineup
/// is reported as output, not as an error.
pub fn handle_optimize(params: OptimizeParams) -> Result<()> {
    let cap = resolve_salary_cap(params.salary_cap)?;
    let config = Configuration::with_cap(cap)?;

    let players = ingest::load_players(&params.input)?;
    if params.verbose {
        println!(
            "Loaded {} players from {}",
            players.len(),
            params.input.display()
        );
    }
    let index = RosterIndex::build(&players);

    if params.all {
        let reports: Vec<LineupReport> = search(&index, &config).map(|l| project(&l)).collect();
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            for report in &reports {
                print_report(report);
            }
            println!("✓ Found {} valid lineups under the ${} cap", reports.len(), cap);
        }
        return Ok(());
    }

    if let Some(k) = params.top {
        let ranked = select::top_k(search(&index, &config), k);
        let reports: Vec<LineupReport> = ranked.iter().map(project).collect();
        if params.as_json {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else if reports.is_empty() {
            println!("No valid lineup fits under the ${} cap", cap);
        } else {
            for (rank, report) in reports.iter().enumerate() {
                println!("#{}", rank + 1);
                print_report(report);
            }
        }
        return Ok(());
    }

    let solver = Solver::new(&index, &config);
    let best = if params.parallel {
        solver.solve_parallel()
    } else {
        solver.solve()
    };

    match best {
        Some(lineup) => {
            let report = project(&lineup);
            if params.as_json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        None => {
            if params.as_json {
                println!("null");
            } else {
                println!("No valid lineup fits under the ${} cap", cap);
            }
        }
    }

    Ok(())
}

fn print_report(report: &LineupReport) {
    for row in &report.rows {
        println!(
            "{:<3} {} ${} {:.2}",
            row.position, row.name, row.cost, row.points
        );
    }
    println!(
        "Total: ${} {:.2} pts",
        report.total_cost, report.total_points
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimize_params_construction() {
        let params = OptimizeParams {
            input: PathBuf::from("playerdata"),
            salary_cap: Some(50_000),
            as_json: true,
            top: Some(3),
            all: false,
            parallel: true,
            verbose: false,
        };
        assert_eq!(params.salary_cap, Some(50_000));
        assert_eq!(params.top, Some(3));
        assert!(params.as_json);
        assert!(params.parallel);
    }

    #[test]
    fn test_missing_roster_file_is_an_error() {
        let params = OptimizeParams {
            input: PathBuf::from("/nonexistent/roster"),
            salary_cap: Some(50_000),
            as_json: false,
            top: None,
            all: false,
            parallel: false,
            verbose: false,
        };
        assert!(handle_optimize(params).is_err());
    }

    #[test]
    fn test_zero_cap_fails_before_reading_the_roster() {
        let params = OptimizeParams {
            input: PathBuf::from("/nonexistent/roster"),
            salary_cap: Some(0),
            as_json: false,
            top: None,
            all: false,
            parallel: false,
            verbose: false,
        };
        let err = handle_optimize(params).unwrap_err();
        assert!(matches!(err, crate::LineupError::NonPositiveCap));
    }
}

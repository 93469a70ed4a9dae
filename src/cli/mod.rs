//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Common arguments shared between commands
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Roster file to read player entries from.
    #[clap(long, short, default_value = "playerdata")]
    pub input: PathBuf,

    /// Salary cap in dollars (or set `DFS_HOOPS_SALARY_CAP` env var).
    #[clap(long, short = 'c')]
    pub salary_cap: Option<u32>,
}

#[derive(Debug, Parser)]
#[clap(name = "dfs-hoops", about = "Daily-fantasy basketball lineup optimizer")]
pub struct DfsHoops {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the optimal lineup (or the top K, or every valid lineup).
    ///
    /// Reads the roster file, groups players by position, and runs the
    /// cap-pruned backtracking search.
    Optimize {
        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,

        /// Report the K best lineups instead of just the best.
        #[clap(long, short = 'k')]
        top: Option<usize>,

        /// Enumerate every valid lineup instead of selecting the best.
        #[clap(long)]
        all: bool,

        /// Split the outermost slot's candidates across threads.
        #[clap(long)]
        parallel: bool,

        /// Print progress while searching.
        #[clap(long)]
        verbose: bool,
    },

    /// Print the per-position player pools parsed from the roster file.
    Pools {
        #[clap(flatten)]
        common: CommonArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

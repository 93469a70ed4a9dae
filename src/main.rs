//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use dfs_hoops::{
    cli::{Commands, DfsHoops},
    commands::{
        optimize::{handle_optimize, OptimizeParams},
        pools::handle_pools,
    },
    Result,
};

/// Run the CLI.
fn main() -> Result<()> {
    let app = DfsHoops::parse();

    match app.command {
        Commands::Optimize {
            common,
            json,
            top,
            all,
            parallel,
            verbose,
        } => handle_optimize(OptimizeParams {
            input: common.input,
            salary_cap: common.salary_cap,
            as_json: json,
            top,
            all,
            parallel,
            verbose,
        })?,

        Commands::Pools { common, json } => handle_pools(common.input, json)?,
    }

    Ok(())
}

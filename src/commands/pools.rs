//! Position-pool listing command.

use crate::{
    cli::types::Position, ingest, models::Player, roster::RosterIndex, Result,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Print each position's eligible-player pool from the roster file.
pub fn handle_pools(input: PathBuf, as_json: bool) -> Result<()> {
    let players = ingest::load_players(&input)?;
    let index = RosterIndex::build(&players);

    if as_json {
        let pools: BTreeMap<Position, &[Player]> = Position::ALL
            .iter()
            .map(|&p| (p, index.lookup(p)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&pools)?);
    } else {
        for position in Position::ALL {
            println!("{}:", position);
            for player in index.lookup(position) {
                println!("  {} ${} {:.2}", player.name, player.cost, player.points);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_handle_pools_reads_roster_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Alice 3000 PG 10.0").unwrap();
        writeln!(file, "Bob 4500 SG/SF 8.5").unwrap();

        assert!(handle_pools(file.path().to_path_buf(), false).is_ok());
        assert!(handle_pools(file.path().to_path_buf(), true).is_ok());
    }

    #[test]
    fn test_handle_pools_missing_file() {
        assert!(handle_pools(PathBuf::from("/nonexistent/roster"), false).is_err());
    }
}

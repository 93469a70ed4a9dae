//! Roster file parsing.
//!
//! Lines are whitespace-delimited: `name cost positions points`, with
//! positions separated by `/` (e.g. `Jones 4200 PG/SG 21.5`). A malformed
//! line or an unknown position token is reported and skipped; one bad record
//! never aborts the rest of the load.

use crate::cli::types::{PlayerId, Position};
use crate::error::Result;
use crate::models::Player;
use std::fs;
use std::path::Path;

/// Read and parse a roster file into validated players.
pub fn load_players(path: &Path) -> Result<Vec<Player>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_players(&content))
}

/// Parse roster text into validated players, skipping bad records with a
/// warning. IDs are assigned sequentially in accepted order and are the
/// identity used for lineup-uniqueness checks.
pub fn parse_players(input: &str) -> Vec<Player> {
    let mut players = Vec::new();

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            eprintln!(
                "⚠ line {}: expected 4 fields, got {}; skipping",
                line_no + 1,
                fields.len()
            );
            continue;
        }

        let name = fields[0];
        let cost: u32 = match fields[1].parse() {
            Ok(c) => c,
            Err(_) => {
                eprintln!("⚠ line {}: invalid cost {:?}; skipping", line_no + 1, fields[1]);
                continue;
            }
        };
        let points: f64 = match fields[3].parse() {
            Ok(p) if p >= 0.0 => p,
            _ => {
                eprintln!(
                    "⚠ line {}: invalid points {:?}; skipping",
                    line_no + 1,
                    fields[3]
                );
                continue;
            }
        };

        let mut positions: Vec<Position> = Vec::new();
        for token in fields[2].split('/') {
            match token.parse::<Position>() {
                Ok(position) => {
                    if !positions.contains(&position) {
                        positions.push(position);
                    }
                }
                Err(_) => {
                    eprintln!(
                        "⚠ line {}: invalid position {:?}; ignoring",
                        line_no + 1,
                        token
                    );
                }
            }
        }
        if positions.is_empty() {
            eprintln!(
                "⚠ line {}: no valid positions for {}; skipping",
                line_no + 1,
                name
            );
            continue;
        }

        players.push(Player::new(
            PlayerId::new(players.len()),
            name,
            cost,
            points,
            positions,
        ));
    }

    players
}

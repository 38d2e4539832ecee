#![cfg(feature = "std")]

//! Terminal rendering and coordinate parsing for the `play` command.

use std::fmt::Write;

use rand::Rng;

use crate::board::BB;
use crate::common::{AttackResult, Winner};
use crate::config::GRID_SIZE;
use crate::game::GameEngine;

/// Label such as `A1` for a flat cell index (column letter, 1-based row).
pub fn coord_to_string(index: usize) -> String {
    let (r, c) = (index / GRID_SIZE, index % GRID_SIZE);
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse a coordinate like `C7` (case-insensitive) into a flat cell index.
pub fn parse_coord(input: &str) -> Result<usize, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= GRID_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > GRID_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1) * GRID_SIZE + col)
}

fn render_grid(out: &mut String, hits: &BB, misses: &BB, ships: Option<&BB>) {
    out.push_str("    ");
    for c in 0..GRID_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..GRID_SIZE {
        let _ = write!(out, "  {:2}", r + 1);
        for c in 0..GRID_SIZE {
            let index = r * GRID_SIZE + c;
            let ch = if hits.contains(index) {
                'X'
            } else if misses.contains(index) {
                'o'
            } else if ships.is_some_and(|s| s.contains(index)) {
                'S'
            } else {
                '.'
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
}

/// Both grids: the opponent's (fog of war) above the player's own.
pub fn render_player_view<R: Rng>(engine: &GameEngine<R>, player_name: &str) -> String {
    let mut out = String::new();
    let (hits, misses) = engine.player_marks();
    out.push_str("Computer's waters:\n");
    render_grid(&mut out, &hits, &misses, None);

    let (hits, misses) = engine.opponent_marks();
    let ships = engine.human_fleet().mask();
    let _ = writeln!(out, "\n{}'s fleet:", player_name);
    render_grid(&mut out, &hits, &misses, Some(&ships));
    out.push_str("  Legend: S=Ship  X=Hit  o=Miss  .=Water\n");
    out
}

pub fn describe_result(result: AttackResult) -> &'static str {
    match result {
        AttackResult::Hit => "hit!",
        AttackResult::Miss => "miss.",
    }
}

/// Announcement shown when a game ends.
pub fn winner_banner(winner: Winner, player_name: &str) -> String {
    match winner {
        Winner::Human => format!("{} Wins! 🎉", player_name),
        Winner::Opponent => "Computer Wins! 💀".to_string(),
    }
}

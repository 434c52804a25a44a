//! PGN export of a game's move history.
//!
//! Movetext is written in long algebraic form (`e2e4`) straight from the
//! history records; no SAN disambiguation is attempted.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::utils::long_algebraic::move_record_to_long_algebraic;

/// Write a PGN for the moves played from `initial_state` to `current_state`,
/// dated today.
pub fn write_pgn(
    initial_state: &GameState,
    current_state: &GameState,
    result: &str,
) -> Result<String, ChessErrors> {
    write_pgn_dated(initial_state, current_state, result, Local::now().date_naive())
}

pub fn write_pgn_dated(
    initial_state: &GameState,
    current_state: &GameState,
    result: &str,
    date: NaiveDate,
) -> Result<String, ChessErrors> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Mailbox Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(initial_state, current_state, &headers)
}

/// Only the history entries added after `initial_state` are written.
pub fn write_pgn_with_headers(
    initial_state: &GameState,
    current_state: &GameState,
    headers: &BTreeMap<String, String>,
) -> Result<String, ChessErrors> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let played = current_state
        .history
        .get(initial_state.history.len()..)
        .unwrap_or_default();

    let dark_first = initial_state.side_to_move == Color::Dark;
    let mut movetext_parts = Vec::<String>::with_capacity(played.len() + 1);
    for (index, record) in played.iter().enumerate() {
        let ply = index + usize::from(dark_first);
        let lan = move_record_to_long_algebraic(record)?;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, lan));
        } else if index == 0 {
            movetext_parts.push(format!("{}... {}", (ply / 2) + 1, lan));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

fn normalize_result(result: &str) -> &'static str {
    match result.trim() {
        "1-0" => "1-0",
        "0-1" => "0-1",
        "1/2-1/2" => "1/2-1/2",
        _ => "*",
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

//! Long algebraic move text (`e2e4`).
//!
//! Parsing accepts the compact form as well as the space- or dash-separated
//! forms typed at the interactive prompt (`e2 e4`, `e2-e4`).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::CandidateMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn parse_long_algebraic(long_algebraic: &str) -> Result<(Square, Square), ChessErrors> {
    let invalid = || ChessErrors::InvalidMoveInput(long_algebraic.to_owned());

    let parts: Vec<&str> = long_algebraic
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect();

    // Separated parts must each be a square; a single token must be two squares.
    let (start, end) = match parts.as_slice() {
        [start, end] => (*start, *end),
        [single] if single.is_ascii() && single.len() == 4 => (&single[0..2], &single[2..4]),
        _ => return Err(invalid()),
    };

    let start = algebraic_to_square(start).map_err(|_| invalid())?;
    let end = algebraic_to_square(end).map_err(|_| invalid())?;
    Ok((start, end))
}

pub fn move_record_to_long_algebraic(record: &MoveRecord) -> Result<String, ChessErrors> {
    squares_to_long_algebraic(record.start, record.end)
}

pub fn candidate_to_long_algebraic(mv: &CandidateMove) -> Result<String, ChessErrors> {
    squares_to_long_algebraic(mv.start, mv.end)
}

fn squares_to_long_algebraic(start: Square, end: Square) -> Result<String, ChessErrors> {
    let mut out = square_to_algebraic(start)?;
    out.push_str(&square_to_algebraic(end)?);
    Ok(out)
}

//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and `Square`
//! values reused by the executor, FEN, PGN and the interactive binary.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
///
/// The file letter is case-insensitive; anything that is not exactly a file
/// in `a..=h` followed by a rank in `1..=8` is rejected.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(square.to_owned());

    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };

    let file = file.to_ascii_lowercase();
    if !('a'..='h').contains(&file) {
        return Err(invalid());
    }
    let rank = rank.to_digit(10).ok_or_else(invalid)?;
    if !(1..=8).contains(&rank) {
        return Err(invalid());
    }

    Ok(Square::new(rank as i8 - 1, (file as u8 - b'a') as i8))
}

/// Convert an on-board square to algebraic notation (for example: "e4").
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !square.is_on_board() {
        return Err(ChessErrors::SquareOffBoard {
            row: square.row,
            col: square.col,
        });
    }

    let file_char = char::from(b'a' + square.col as u8);
    let rank_char = char::from(b'1' + square.row as u8);

    Ok(format!("{file_char}{rank_char}"))
}

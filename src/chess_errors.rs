//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by notation parsing, the
//! move executor, the undo manager, FEN handling and the opponent engines.
//! The `Display` text of each variant is the caller-facing message.
//!
//! Illegal moves are not errors: `is_legal_move` answers them with `false`.

use thiserror::Error;

/// Unified error type for the chess engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// An algebraic square (for example `e4`) could not be interpreted.
    ///
    /// Payload: the rejected input.
    #[error("Invalid algebraic square: {0}")]
    InvalidAlgebraicString(String),

    /// The start square handed to the move executor was malformed notation.
    #[error("Invalid start position notation: {0}")]
    InvalidStartNotation(String),

    /// The end square handed to the move executor was malformed notation.
    #[error("Invalid end position notation: {0}")]
    InvalidEndNotation(String),

    /// A raw square outside `[0,7] x [0,7]` reached an operation that has to
    /// index the board.
    #[error("Square ({row}, {col}) is off the board")]
    SquareOffBoard { row: i8, col: i8 },

    /// A full move string (for example `e2e4`) could not be split into two squares.
    #[error("Invalid move input: {0}. Use 'start end', e.g. 'e2 e4'")]
    InvalidMoveInput(String),

    /// Undo was requested with an empty history.
    #[error("No moves to undo")]
    NoMovesToUndo,

    /// The FEN string was malformed.
    #[error("Invalid FEN string: {0}")]
    InvalidFENstring(String),

    /// No candidate moves are available for the side to move.
    #[error("No candidate moves available")]
    NoCandidateMoves,
}

//! Undo manager.
//!
//! Pops the last `MoveRecord` and puts the two touched squares back. Only the
//! king flags are re-derived (from the remaining history); rook flags and the
//! en-passant target keep whatever value the undone move left behind. The
//! fullmove number steps back when a Dark move is taken back.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn undo_move(game_state: &mut GameState) -> Result<MoveRecord, ChessErrors> {
    let record = game_state.history.pop().ok_or(ChessErrors::NoMovesToUndo)?;

    if let (Some(from), Some(to)) = (record.start.index(), record.end.index()) {
        game_state.squares[from] = record.moved_piece;
        game_state.squares[to] = record.captured_piece;
    }

    if let Some(Piece {
        kind: PieceKind::King,
        color,
    }) = record.moved_piece
    {
        game_state.king_position[color.index()] = record.start;
        game_state.king_moved[color.index()] = game_state
            .history
            .iter()
            .any(|earlier| earlier.is_king_move_by(color));
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    if game_state.side_to_move == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1).max(1);
    }

    debug!(
        start = ?record.start,
        end = ?record.end,
        remaining = game_state.history.len(),
        "move undone"
    );

    Ok(record)
}

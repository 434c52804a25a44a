use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::moves::path_clearance::is_path_clear;

/// Rook rule: a pure rank or file move with nothing in between.
#[inline]
pub fn is_valid_rook_move(game_state: &GameState, start: Square, end: Square) -> bool {
    if start.row != end.row && start.col != end.col {
        return false;
    }

    is_path_clear(game_state, start, end)
}

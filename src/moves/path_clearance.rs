//! Occlusion test for sliding pieces.

use crate::game_state::{chess_types::*, game_state::GameState};

/// True when no square strictly between `start` and `end` is occupied.
///
/// Walks one unit step at a time (each component in `-1..=1`), so the two
/// squares must share a rank, a file or a diagonal; callers check alignment
/// before asking.
pub fn is_path_clear(game_state: &GameState, start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    let row_step = d_row.signum() as i8;
    let col_step = d_col.signum() as i8;

    let mut cursor = start.offset(row_step, col_step);
    while cursor != end {
        if !cursor.is_on_board() || !game_state.is_empty(cursor) {
            return false;
        }
        cursor = cursor.offset(row_step, col_step);
    }

    true
}

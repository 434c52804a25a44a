use crate::game_state::chess_types::Square;

/// Knight rule: an L-shaped leap. Occupants in between are irrelevant.
#[inline]
pub fn is_valid_knight_move(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

use crate::game_state::chess_types::Square;

/// King rule: one step in any direction. Castling is never produced here,
/// even though the eligibility flags are tracked on `GameState`.
#[inline]
pub fn is_valid_king_move(start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    d_row.abs() <= 1 && d_col.abs() <= 1
}

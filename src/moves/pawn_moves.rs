use crate::game_state::{chess_types::*, game_state::GameState};

/// Pawn rule: single push, double push from the start row, diagonal capture
/// and en-passant capture. Ownership of `start` and `end` is checked by the
/// caller.
pub fn is_valid_pawn_move(game_state: &GameState, color: Color, start: Square, end: Square) -> bool {
    let direction = i16::from(color.pawn_direction());
    let (d_row, d_col) = start.delta_to(end);
    let end_piece = game_state.piece_at(end);

    // Pushes never capture.
    if d_col == 0 && end_piece.is_none() {
        if d_row == direction {
            return true;
        }

        if d_row == 2 * direction && start.row == color.pawn_start_row() {
            return game_state.is_empty(start.offset(color.pawn_direction(), 0));
        }
    }

    if d_col.abs() == 1 && d_row == direction {
        return match end_piece {
            Some(target) => target.color != color,
            None => game_state.en_passant_target == Some(end),
        };
    }

    false
}

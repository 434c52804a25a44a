use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::moves::path_clearance::is_path_clear;

/// Bishop rule: a pure diagonal move with nothing in between.
#[inline]
pub fn is_valid_bishop_move(game_state: &GameState, start: Square, end: Square) -> bool {
    let (d_row, d_col) = start.delta_to(end);
    if d_row.abs() != d_col.abs() {
        return false;
    }

    is_path_clear(game_state, start, end)
}

#[cfg(test)]
mod tests {
    use super::is_valid_bishop_move;
    use crate::game_state::{chess_types::Square, game_state::GameState};

    #[test]
    fn bishop_needs_open_diagonal() {
        let game_state = GameState::new_game();
        let c1 = Square::new(0, 2);
        assert!(!is_valid_bishop_move(&game_state, c1, Square::new(2, 4)));

        // After e2 and d2 leave, both long diagonals from c1/f1 open up.
        let opened = GameState::from_fen("rnbqkbnr/pppppppp/8/8/3PP3/8/PPP2PPP/RNBQKBNR b KQkq - 0 2")
            .expect("FEN should parse");
        assert!(is_valid_bishop_move(&opened, c1, Square::new(5, 7)));
        assert!(is_valid_bishop_move(&opened, Square::new(0, 5), Square::new(5, 0)));
    }

    #[test]
    fn bishop_rejects_straight_lines() {
        let game_state = GameState::new_empty();
        let d4 = Square::new(3, 3);
        assert!(!is_valid_bishop_move(&game_state, d4, Square::new(3, 6)));
        assert!(!is_valid_bishop_move(&game_state, d4, Square::new(5, 4)));
        assert!(is_valid_bishop_move(&game_state, d4, Square::new(0, 0)));
    }

    #[test]
    fn far_off_board_diagonal_is_rejected_without_overflow() {
        let game_state = GameState::new_empty();
        assert!(!is_valid_bishop_move(&game_state, Square::new(-128, -128), Square::new(127, 127)));
        assert!(!is_valid_bishop_move(&game_state, Square::new(127, -128), Square::new(-128, 127)));
    }
}

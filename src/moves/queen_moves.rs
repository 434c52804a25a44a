use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::rook_moves::is_valid_rook_move;

/// Queen rule: rook rule or bishop rule.
#[inline]
pub fn is_valid_queen_move(game_state: &GameState, start: Square, end: Square) -> bool {
    is_valid_bishop_move(game_state, start, end) || is_valid_rook_move(game_state, start, end)
}

#[cfg(test)]
mod tests {
    use super::is_valid_queen_move;
    use crate::game_state::{chess_types::Square, game_state::GameState};

    #[test]
    fn queen_on_empty_d4_reaches_twenty_seven_squares() {
        let game_state = GameState::new_empty();
        let d4 = Square::new(3, 3);
        let reachable = Square::all()
            .filter(|&end| end != d4 && is_valid_queen_move(&game_state, d4, end))
            .count();
        assert_eq!(reachable, 27);
    }

    #[test]
    fn queen_cannot_move_like_a_knight() {
        let game_state = GameState::new_empty();
        assert!(!is_valid_queen_move(&game_state, Square::new(3, 3), Square::new(5, 4)));
    }
}

//! Move legality entry point.
//!
//! `is_legal_move` answers "does this move obey the piece-movement rules for
//! the side to move". It never looks at king safety: a `true` result may
//! leave the mover's own king attacked.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::is_valid_bishop_move;
use crate::moves::king_moves::is_valid_king_move;
use crate::moves::knight_moves::is_valid_knight_move;
use crate::moves::pawn_moves::is_valid_pawn_move;
use crate::moves::queen_moves::is_valid_queen_move;
use crate::moves::rook_moves::is_valid_rook_move;

pub fn is_legal_move(game_state: &GameState, start: Square, end: Square) -> bool {
    if !start.is_on_board() || !end.is_on_board() {
        return false;
    }

    let Some(piece) = game_state.piece_at(start) else {
        return false;
    };
    if piece.color != game_state.side_to_move {
        return false;
    }

    if let Some(target) = game_state.piece_at(end) {
        if target.color == piece.color {
            return false;
        }
    }

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(game_state, piece.color, start, end),
        PieceKind::Rook => is_valid_rook_move(game_state, start, end),
        PieceKind::Knight => is_valid_knight_move(start, end),
        PieceKind::Bishop => is_valid_bishop_move(game_state, start, end),
        PieceKind::Queen => is_valid_queen_move(game_state, start, end),
        PieceKind::King => is_valid_king_move(start, end),
    }
}

#[cfg(test)]
mod tests {
    use super::is_legal_move;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn e2_pawn_reaches_e3_and_e4_but_not_e5() {
        let game_state = GameState::new_game();
        assert!(is_legal_move(&game_state, sq("e2"), sq("e3")));
        assert!(is_legal_move(&game_state, sq("e2"), sq("e4")));
        assert!(!is_legal_move(&game_state, sq("e2"), sq("e5")));
    }

    #[test]
    fn b1_knight_reaches_exactly_a3_and_c3() {
        let game_state = GameState::new_game();
        let targets: Vec<Square> = Square::all()
            .filter(|&end| is_legal_move(&game_state, sq("b1"), end))
            .collect();
        assert_eq!(targets, vec![sq("a3"), sq("c3")]);
    }

    #[test]
    fn rook_needs_the_back_rank_cleared() {
        let mut game_state = GameState::new_game();
        assert!(!is_legal_move(&game_state, sq("a1"), sq("h1")));

        // Clear b1..g1 and the h1 rook so the destination is empty.
        for col in 1..8 {
            game_state
                .set_piece(Square::new(0, col), None)
                .expect("back rank is on the board");
        }
        assert!(is_legal_move(&game_state, sq("a1"), sq("h1")));

        // A single blocker anywhere in between is enough to refuse it again.
        game_state
            .set_piece(sq("d1"), Some(Piece::new(PieceKind::Knight, Color::Dark)))
            .expect("d1 is on the board");
        assert!(!is_legal_move(&game_state, sq("a1"), sq("h1")));
    }

    #[test]
    fn only_the_side_to_move_may_move() {
        let game_state = GameState::new_game();
        assert!(!is_legal_move(&game_state, sq("e7"), sq("e5")));
        assert!(!is_legal_move(&game_state, sq("e4"), sq("e5")));
    }

    #[test]
    fn own_pieces_cannot_be_captured() {
        let game_state = GameState::new_game();
        assert!(!is_legal_move(&game_state, sq("d1"), sq("d2")));
        assert!(!is_legal_move(&game_state, sq("e1"), sq("e1")));
    }

    #[test]
    fn off_board_squares_are_rejected() {
        let game_state = GameState::new_game();
        assert!(!is_legal_move(&game_state, Square::new(-1, 0), sq("a3")));
        assert!(!is_legal_move(&game_state, sq("b1"), Square::new(2, -1)));
        assert!(!is_legal_move(&game_state, sq("h2"), Square::new(2, 8)));
    }

    #[test]
    fn king_may_walk_into_attack() {
        // Black rook on f8 covers the f-file; the engine has no notion of check.
        let game_state = GameState::from_fen("5r1k/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_move(&game_state, sq("e1"), sq("f1")));
        assert!(!is_legal_move(&game_state, sq("e1"), sq("g1")));
    }

    #[test]
    fn queen_combines_rook_and_bishop_paths() {
        let game_state = GameState::from_fen("4k3/8/8/8/3Q4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_legal_move(&game_state, sq("d4"), sq("d8")));
        assert!(is_legal_move(&game_state, sq("d4"), sq("h8")));
        assert!(is_legal_move(&game_state, sq("d4"), sq("a1")));
        assert!(!is_legal_move(&game_state, sq("d4"), sq("e6")));
    }

    #[test]
    fn legality_checks_do_not_mutate_state() {
        let game_state = GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3")
            .expect("FEN should parse");
        let before = game_state.clone();

        let samples = [
            ("d4", "e3", true),
            ("d4", "d3", true),
            ("d4", "c3", false),
            ("g8", "f6", true),
            ("f8", "b4", false),
            ("e8", "d7", true),
            ("a1", "a3", false),
            ("d8", "d5", true),
        ];
        for (start, end, expected) in samples {
            assert_eq!(
                is_legal_move(&game_state, sq(start), sq(end)),
                expected,
                "{start}{end}"
            );
        }

        assert_eq!(game_state, before);
    }
}

//! Move executor.
//!
//! `make_move` performs a move without asking whether it is legal; callers
//! are expected to run `is_legal_move` first. Once both squares resolve the
//! move always goes through: the history record is written, the en-passant
//! target and castling flags are updated, the piece is relocated and the
//! turn passes to the other side.

use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

/// Anything the executor accepts as a square: a raw `Square`, a
/// `(row, col)` tuple, or algebraic notation such as `"e4"`.
pub trait SquareInput {
    fn resolve_square(self) -> Result<Square, ChessErrors>;
}

impl SquareInput for Square {
    #[inline]
    fn resolve_square(self) -> Result<Square, ChessErrors> {
        if self.is_on_board() {
            Ok(self)
        } else {
            Err(ChessErrors::SquareOffBoard {
                row: self.row,
                col: self.col,
            })
        }
    }
}

impl SquareInput for (i8, i8) {
    #[inline]
    fn resolve_square(self) -> Result<Square, ChessErrors> {
        Square::from(self).resolve_square()
    }
}

impl SquareInput for &str {
    #[inline]
    fn resolve_square(self) -> Result<Square, ChessErrors> {
        algebraic_to_square(self)
    }
}

impl SquareInput for &String {
    #[inline]
    fn resolve_square(self) -> Result<Square, ChessErrors> {
        algebraic_to_square(self)
    }
}

impl SquareInput for String {
    #[inline]
    fn resolve_square(self) -> Result<Square, ChessErrors> {
        algebraic_to_square(&self)
    }
}

pub fn make_move<S, E>(game_state: &mut GameState, start: S, end: E) -> Result<MoveRecord, ChessErrors>
where
    S: SquareInput,
    E: SquareInput,
{
    let start = start.resolve_square().map_err(|e| match e {
        ChessErrors::InvalidAlgebraicString(text) => ChessErrors::InvalidStartNotation(text),
        other => other,
    })?;
    let end = end.resolve_square().map_err(|e| match e {
        ChessErrors::InvalidAlgebraicString(text) => ChessErrors::InvalidEndNotation(text),
        other => other,
    })?;

    Ok(apply_move(game_state, start, end))
}

fn apply_move(game_state: &mut GameState, start: Square, end: Square) -> MoveRecord {
    let moved_piece = game_state.piece_at(start);
    let captured_piece = game_state.piece_at(end);

    let record = MoveRecord {
        start,
        end,
        moved_piece,
        captured_piece,
    };
    game_state.history.push(record);

    update_en_passant_target(game_state, moved_piece, start, end);

    if let Some(piece) = moved_piece {
        match piece.kind {
            PieceKind::King => {
                game_state.king_position[piece.color.index()] = end;
                game_state.king_moved[piece.color.index()] = true;
            }
            PieceKind::Rook => update_rook_moved(game_state, piece.color, start),
            _ => {}
        }
    }

    // Both squares were resolved on the board by `make_move`.
    if let (Some(from), Some(to)) = (start.index(), end.index()) {
        game_state.squares[to] = moved_piece;
        game_state.squares[from] = None;
    }

    if game_state.side_to_move == Color::Dark {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }
    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!(
        start = ?start,
        end = ?end,
        moved = ?moved_piece,
        captured = ?captured_piece,
        ply = game_state.history.len(),
        "move applied"
    );

    record
}

fn update_en_passant_target(
    game_state: &mut GameState,
    moved_piece: Option<Piece>,
    start: Square,
    end: Square,
) {
    game_state.en_passant_target = match moved_piece {
        Some(Piece {
            kind: PieceKind::Pawn,
            ..
        }) if start.delta_to(end).0.abs() == 2 => {
            Some(Square::new((start.row + end.row) / 2, start.col))
        }
        _ => None,
    };
}

/// Only a rook leaving its own color's corner square changes eligibility.
fn update_rook_moved(game_state: &mut GameState, color: Color, start: Square) {
    if start.row != color.home_row() {
        return;
    }

    if let Some(side) = CastlingSide::from_rook_home_col(start.col) {
        game_state.rook_moved[color.index()][side.index()] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::make_move;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::{chess_types::*, game_state::GameState};
    use crate::move_generation::legal_move_checks::is_legal_move;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("test square should parse")
    }

    #[test]
    fn pawn_push_moves_piece_and_flips_turn() {
        let mut game_state = GameState::new_game();
        let record = make_move(&mut game_state, "e2", "e3").expect("move should apply");

        assert_eq!(record.start, sq("e2"));
        assert_eq!(record.end, sq("e3"));
        assert_eq!(record.moved_piece, Some(Piece::new(PieceKind::Pawn, Color::Light)));
        assert_eq!(record.captured_piece, None);

        assert!(game_state.is_empty(sq("e2")));
        assert_eq!(
            game_state.piece_at(sq("e3")),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
        assert_eq!(game_state.side_to_move, Color::Dark);
        assert_eq!(game_state.history, vec![record]);
        assert_eq!(game_state.en_passant_target, None);
    }

    #[test]
    fn accepts_squares_tuples_and_strings() {
        let mut game_state = GameState::new_game();
        make_move(&mut game_state, sq("g1"), (2, 5)).expect("knight move should apply");
        make_move(&mut game_state, String::from("g8"), &String::from("f6")).expect("knight move should apply");

        assert!(game_state.piece_at(sq("f3")).is_some());
        assert!(game_state.piece_at(sq("f6")).is_some());
        assert_eq!(game_state.history.len(), 2);
    }

    #[test]
    fn double_step_sets_en_passant_target_which_next_move_clears() {
        let mut game_state = GameState::new_game();
        make_move(&mut game_state, "e2", "e4").expect("move should apply");
        assert_eq!(game_state.en_passant_target, Some(sq("e3")));

        make_move(&mut game_state, "g8", "f6").expect("move should apply");
        assert_eq!(game_state.en_passant_target, None);
    }

    #[test]
    fn black_pawn_beside_a_double_step_may_capture_en_passant() {
        let mut game_state = GameState::from_fen("rnbqkbnr/ppp1pppp/8/8/3p4/8/PPPPPPPP/RNBQKBNR w KQkq - 0 3")
            .expect("FEN should parse");
        make_move(&mut game_state, "e2", "e4").expect("move should apply");

        assert_eq!(game_state.en_passant_target, Some(Square::new(2, 4)));
        assert!(is_legal_move(&game_state, Square::new(3, 3), Square::new(2, 4)));

        let record = make_move(&mut game_state, "d4", "e3").expect("capture should apply");
        assert_eq!(record.captured_piece, None);
        assert_eq!(game_state.en_passant_target, None);
        // The executor relocates only the capturing pawn.
        assert_eq!(
            game_state.piece_at(sq("e4")),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
    }

    #[test]
    fn capture_is_recorded() {
        let mut game_state = GameState::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let record = make_move(&mut game_state, "e4", "d5").expect("capture should apply");
        assert_eq!(record.captured_piece, Some(Piece::new(PieceKind::Pawn, Color::Dark)));
        assert_eq!(game_state.squares.iter().flatten().count(), 3);
    }

    #[test]
    fn king_move_updates_cache_and_flag() {
        let mut game_state = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        game_state.king_moved = [false; 2];
        make_move(&mut game_state, "e1", "d2").expect("move should apply");

        assert_eq!(game_state.king_position(Color::Light), sq("d2"));
        assert!(game_state.king_moved(Color::Light));
        assert!(!game_state.king_moved(Color::Dark));
    }

    #[test]
    fn rook_flags_track_home_corners_per_color() {
        let mut game_state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        make_move(&mut game_state, "h1", "h4").expect("move should apply");
        assert!(game_state.rook_moved(Color::Light, CastlingSide::Kingside));
        assert!(!game_state.rook_moved(Color::Light, CastlingSide::Queenside));

        make_move(&mut game_state, "a8", "a5").expect("move should apply");
        assert!(game_state.rook_moved(Color::Dark, CastlingSide::Queenside));
        assert!(!game_state.rook_moved(Color::Dark, CastlingSide::Kingside));

        // A rook that is not on its home rank changes nothing.
        make_move(&mut game_state, "h4", "h1").expect("move should apply");
        make_move(&mut game_state, "a5", "a8").expect("move should apply");
        make_move(&mut game_state, "h1", "h3").expect("move should apply");
        assert!(!game_state.rook_moved(Color::Light, CastlingSide::Queenside));
        assert!(!game_state.rook_moved(Color::Dark, CastlingSide::Kingside));
    }

    #[test]
    fn enemy_rook_leaving_a_light_corner_keeps_light_flags() {
        let mut game_state = GameState::from_fen("4k3/8/8/8/8/8/8/r3K2r b - - 0 1").expect("FEN should parse");
        game_state.rook_moved = [[false; 2]; 2];

        make_move(&mut game_state, "a1", "a5").expect("move should apply");
        make_move(&mut game_state, "e1", "d2").expect("move should apply");
        make_move(&mut game_state, "h1", "h5").expect("move should apply");

        assert_eq!(game_state.rook_moved, [[false; 2]; 2]);
    }

    #[test]
    fn fullmove_number_advances_after_dark_moves() {
        let mut game_state = GameState::new_game();
        make_move(&mut game_state, "e2", "e4").expect("move should apply");
        assert_eq!(game_state.fullmove_number, 1);
        make_move(&mut game_state, "e7", "e5").expect("move should apply");
        assert_eq!(game_state.fullmove_number, 2);
    }

    #[test]
    fn malformed_notation_leaves_state_untouched() {
        let mut game_state = GameState::new_game();
        let before = game_state.clone();

        assert_eq!(
            make_move(&mut game_state, "e9", "e4"),
            Err(ChessErrors::InvalidStartNotation("e9".to_owned()))
        );
        assert_eq!(
            make_move(&mut game_state, "e2", "e44"),
            Err(ChessErrors::InvalidEndNotation("e44".to_owned()))
        );
        assert_eq!(
            make_move(&mut game_state, Square::new(8, 0), "e4"),
            Err(ChessErrors::SquareOffBoard { row: 8, col: 0 })
        );
        assert_eq!(game_state, before);
    }

    #[test]
    fn executor_does_not_revalidate_legality() {
        let mut game_state = GameState::new_game();
        assert!(!is_legal_move(&game_state, sq("e2"), sq("e6")));
        make_move(&mut game_state, "e2", "e6").expect("executor should not gate legality");
        assert!(game_state.piece_at(sq("e6")).is_some());
        assert_eq!(game_state.side_to_move, Color::Dark);
    }
}

//! Canonical chess-rule constants.
//!
//! Static literals describing the opening setup, used both by
//! `GameState::new_game` and by the FEN layer.

use crate::game_state::chess_types::{PieceKind, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from the a-file to the h-file, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const LIGHT_KING_START: Square = Square::new(0, 4);
pub const DARK_KING_START: Square = Square::new(7, 4);

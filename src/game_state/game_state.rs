//! Core board state representation.
//!
//! `GameState` is the central model for the engine. It stores a 64-cell
//! mailbox board, the side to move, the en-passant target, castling
//! eligibility flags, cached king squares and the move history consumed by
//! undo.
//!
//! The cached king squares are kept in sync by the move executor and the undo
//! manager only. Editing cells directly through `set_piece` does not touch
//! them; callers that relocate a king that way must call
//! `resync_king_positions`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, DARK_KING_START, LIGHT_KING_START};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // --- Mailbox board, indexed by `row * 8 + col` ---
    pub squares: [Option<Piece>; 64],

    // --- Side and state flags ---
    pub side_to_move: Color,
    pub en_passant_target: Option<Square>,
    /// FEN fullmove number: starts at 1, advances after each Dark move.
    pub fullmove_number: u16,

    // --- Castling eligibility, [color] and [color][side] ---
    pub king_moved: [bool; 2],
    pub rook_moved: [[bool; 2]; 2],

    // --- Cached king squares, [color] ---
    pub king_position: [Square; 2],

    // --- Undo stack ---
    pub history: Vec<MoveRecord>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],

            side_to_move: Color::Light,
            en_passant_target: None,
            fullmove_number: 1,

            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],

            king_position: [LIGHT_KING_START, DARK_KING_START],

            history: Vec::new(),
        }
    }
}

impl GameState {
    /// Empty board, Light to move. King caches point at the home squares
    /// until kings are placed and `resync_king_positions` is called.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening position with Light to move.
    pub fn new_game() -> Self {
        let mut game_state = Self::default();

        for color in [Color::Light, Color::Dark] {
            let home = color.home_row();
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                game_state.place(Square::new(home, col as i8), Piece::new(*kind, color));
            }
            for col in 0..8 {
                game_state.place(
                    Square::new(color.pawn_start_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }

        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Occupant of `square`; off-board squares read as empty.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        square.index().and_then(|index| self.squares[index])
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Overwrite a cell. Returns the previous occupant.
    pub fn set_piece(
        &mut self,
        square: Square,
        piece: Option<Piece>,
    ) -> Result<Option<Piece>, ChessErrors> {
        let index = square.index().ok_or(ChessErrors::SquareOffBoard {
            row: square.row,
            col: square.col,
        })?;
        Ok(std::mem::replace(&mut self.squares[index], piece))
    }

    /// Rebuild the king cache by scanning the board. Colors without a king
    /// keep their previous cached square.
    pub fn resync_king_positions(&mut self) {
        for square in Square::all() {
            if let Some(Piece {
                kind: PieceKind::King,
                color,
            }) = self.piece_at(square)
            {
                self.king_position[color.index()] = square;
            }
        }
    }

    #[inline]
    pub fn king_position(&self, color: Color) -> Square {
        self.king_position[color.index()]
    }

    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastlingSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    fn place(&mut self, square: Square, piece: Piece) {
        if let Some(index) = square.index() {
            self.squares[index] = Some(piece);
        }
    }
}

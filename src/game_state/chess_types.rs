//! Core value types shared by the board, the rules and the executor.
//!
//! Colors are named `Light` (White, moves first, back rank on row 0) and
//! `Dark` (Black, back rank on row 7).

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::MoveRecord;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row delta of a single pawn step.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }

    /// Row the pawns start on, the only row a double step is allowed from.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::Light => 1,
            Color::Dark => 6,
        }
    }

    /// Back rank holding the king and rooks in the opening position.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board. An empty square is `None` in an `Option<Piece>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// FEN-style letter: uppercase for Light, lowercase for Dark.
    pub const fn letter(self) -> char {
        let lower = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match self.color {
            Color::Light => lower.to_ascii_uppercase(),
            Color::Dark => lower,
        }
    }

    pub const fn from_letter(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::Light
        } else if ch.is_ascii_lowercase() {
            Color::Dark
        } else {
            return None;
        };

        let kind = match ch.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        Some(Self { kind, color })
    }
}

/// Board coordinate. Row 0 is Light's back rank, column 0 is the a-file.
///
/// Coordinates are signed so that off-board squares can be expressed and
/// rejected by the legality bounds check instead of by the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Cell index `row * 8 + col`, or `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * 8 + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of `index` for `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as i8,
            col: (index % 8) as i8,
        }
    }

    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// `(row, col)` distance from `self` to `other`, widened so that any two
    /// squares can be compared without overflow.
    #[inline]
    pub const fn delta_to(self, other: Square) -> (i16, i16) {
        (
            other.row as i16 - self.row as i16,
            other.col as i16 - self.col as i16,
        )
    }

    /// All 64 on-board squares in row-major order starting at a1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl From<(i8, i8)> for Square {
    fn from((row, col): (i8, i8)) -> Self {
        Self { row, col }
    }
}

/// Which rook a castling flag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Queenside,
    Kingside,
}

impl CastlingSide {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastlingSide::Queenside => 0,
            CastlingSide::Kingside => 1,
        }
    }

    /// Side whose rook starts on column `col`, if any.
    pub const fn from_rook_home_col(col: i8) -> Option<Self> {
        match col {
            0 => Some(CastlingSide::Queenside),
            7 => Some(CastlingSide::Kingside),
            _ => None,
        }
    }
}

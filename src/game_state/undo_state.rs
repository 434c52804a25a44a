use crate::game_state::chess_types::*;

/// Single history entry written by `make_move` and consumed by `undo_move`.
///
/// This is the only undo information kept: flags changed by the move are not
/// snapshotted, so undo cannot fully restore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub start: Square,
    pub end: Square,
    /// Occupant of `start` before the move. `None` only when the executor was
    /// driven from an empty square without a legality check.
    pub moved_piece: Option<Piece>,
    /// Occupant of `end` before the move.
    pub captured_piece: Option<Piece>,
}

impl MoveRecord {
    #[inline]
    pub fn is_king_move_by(&self, color: Color) -> bool {
        self.moved_piece == Some(Piece::new(PieceKind::King, color))
    }
}

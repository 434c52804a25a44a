use crate::game_state::{chess_types::Square, game_state::GameState};

/// A move accepted by `is_legal_move`. It may leave the mover in check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub start: Square,
    pub end: Square,
}

impl CandidateMove {
    #[inline]
    pub const fn new(start: Square, end: Square) -> Self {
        Self { start, end }
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_candidate_moves(&self, game_state: &GameState) -> Vec<CandidateMove>;
}

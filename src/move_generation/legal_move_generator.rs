//! Exhaustive candidate move enumeration.
//!
//! Every origin/destination pair is put through `is_legal_move`, so the list
//! is exactly what the legality engine accepts, in row-major order from a1.
//! This is the building block for anything that needs "all moves", such as
//! the random opponent and perft.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::move_generator::{CandidateMove, MoveGenerator};

pub struct CandidateMoveGenerator;

impl MoveGenerator for CandidateMoveGenerator {
    fn generate_candidate_moves(&self, game_state: &GameState) -> Vec<CandidateMove> {
        generate_candidate_moves(game_state)
    }
}

/// All candidate moves for the piece on `start`. Empty when `start` does not
/// hold a piece of the side to move.
pub fn candidate_moves_from(game_state: &GameState, start: Square) -> Vec<CandidateMove> {
    Square::all()
        .filter(|&end| is_legal_move(game_state, start, end))
        .map(|end| CandidateMove::new(start, end))
        .collect()
}

/// All candidate moves for the side to move.
pub fn generate_candidate_moves(game_state: &GameState) -> Vec<CandidateMove> {
    let mut out = Vec::<CandidateMove>::with_capacity(64);

    for start in Square::all() {
        match game_state.piece_at(start) {
            Some(piece) if piece.color == game_state.side_to_move => {
                out.extend(candidate_moves_from(game_state, start));
            }
            _ => {}
        }
    }

    out
}

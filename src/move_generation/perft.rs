//! Node counting over the candidate move tree.
//!
//! Each child is produced by cloning the parent and running the executor, so
//! perft does not depend on undo restoring the en-passant target or castling
//! flags. Counts match standard perft only at depths where no side can be in
//! check, since candidates are not filtered for king safety.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::move_generator::MoveGenerator;
use crate::utils::long_algebraic::move_record_to_long_algebraic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for mv in generator.generate_candidate_moves(game_state) {
        let mut child = game_state.clone();
        let record = make_move(&mut child, mv.start, mv.end)?;

        if depth == 1 {
            total.nodes += 1;
            if record.captured_piece.is_some() {
                total.captures += 1;
            }
        } else {
            total.merge(perft(generator, &child, depth - 1)?);
        }
    }

    Ok(total)
}

/// Per-root-move node counts in generation order, keyed by long algebraic text.
pub fn perft_divide<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> Result<Vec<(String, usize)>, ChessErrors> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in generator.generate_candidate_moves(game_state) {
        let mut child = game_state.clone();
        let record = make_move(&mut child, mv.start, mv.end)?;
        let nodes = perft(generator, &child, depth - 1)?.nodes;
        out.push((move_record_to_long_algebraic(&record)?, nodes));
    }

    Ok(out)
}

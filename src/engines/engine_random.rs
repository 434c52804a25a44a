//! Random-move opponent.
//!
//! Selects uniformly from the candidate moves of the side to move. Seeded
//! construction makes a whole game reproducible, which the tests rely on.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::CandidateMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;

pub struct RandomEngine {
    move_generator: CandidateMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: CandidateMoveGenerator,
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: CandidateMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Mailbox Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors> {
        let candidates = self.move_generator.generate_candidate_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine candidate_moves {}", candidates.len()));
        trace!(candidates = candidates.len(), "random engine choosing");

        if candidates.is_empty() {
            return Err(ChessErrors::NoCandidateMoves);
        }

        out.best_move = candidates.choose(&mut self.rng).copied();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::chess_errors::ChessErrors;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::make_move;
    use crate::move_generation::legal_move_checks::is_legal_move;

    #[test]
    fn chosen_moves_are_always_legal() {
        let mut engine = RandomEngine::with_seed(7);
        let mut game_state = GameState::new_game();

        let first = engine.choose_move(&game_state).expect("engine should choose");
        assert_eq!(first.info_lines, vec!["random_engine candidate_moves 20".to_owned()]);

        for _ in 0..40 {
            let output = engine.choose_move(&game_state).expect("engine should choose");
            let mv = output.best_move.expect("a move should be available");
            assert!(is_legal_move(&game_state, mv.start, mv.end));
            make_move(&mut game_state, mv.start, mv.end).expect("move should apply");
        }

        assert_eq!(game_state.history.len(), 40);
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut engine = RandomEngine::with_seed(seed);
            let mut game_state = GameState::new_game();
            for _ in 0..12 {
                let mv = engine
                    .choose_move(&game_state)
                    .expect("engine should choose")
                    .best_move
                    .expect("a move should be available");
                make_move(&mut game_state, mv.start, mv.end).expect("move should apply");
            }
            game_state
        };

        assert_eq!(play(99), play(99));
    }

    #[test]
    fn no_candidates_is_an_error() {
        // Light pawns on the last rank cannot move; the rest are blocked by their own pieces.
        let stuck = GameState::from_fen("PPPPPPPK/6PP/8/8/8/8/8/k7 w - - 0 1").expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(1);
        assert_eq!(engine.choose_move(&stuck).err(), Some(ChessErrors::NoCandidateMoves));
    }
}

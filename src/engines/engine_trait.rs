//! Opponent abstraction used by the interactive binary.
//!
//! An engine looks at the current state and proposes one candidate move;
//! the caller still decides whether and how to play it.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::CandidateMove;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<CandidateMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_move(&mut self, game_state: &GameState) -> Result<EngineOutput, ChessErrors>;
}

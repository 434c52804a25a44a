//! Interactive console front-end and command loop.
//!
//! Reads one line at a time, routes commands (`undo`, `moves`, `fen`, `pgn`,
//! `help`, `quit`) and otherwise treats the line as a move in long algebraic
//! form. Moves are checked with `is_legal_move` before being handed to the
//! executor. An optional random opponent answers every Light move.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::chess_errors::ChessErrors;
use crate::engines::engine_random::RandomEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::legal_move_generator::{candidate_moves_from, generate_candidate_moves};
use crate::move_generation::legal_move_undo::undo_move;
use crate::utils::algebraic::algebraic_to_square;
use crate::utils::long_algebraic::{candidate_to_long_algebraic, parse_long_algebraic};
use crate::utils::pgn::write_pgn;
use crate::utils::render_game_state::{render_game_state, RenderStyle};

/// Side played by the random opponent.
const ENGINE_COLOR: Color = Color::Dark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpponentKind {
    /// Both sides are entered at the prompt.
    #[default]
    Human,
    /// Dark is played by `RandomEngine`.
    Random,
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleConfig {
    pub initial_fen: Option<String>,
    pub opponent: OpponentKind,
    pub seed: Option<u64>,
    pub style: RenderStyle,
}

pub fn run_stdio_loop(config: ConsoleConfig) -> Result<(), ConsoleError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut console = ConsoleState::new(config)?;

    console.greet(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = console.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    writeln!(stdout, "Thanks for playing!")?;
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Chess(#[from] ChessErrors),
}

pub struct ConsoleState {
    initial_state: GameState,
    game_state: GameState,
    engine: Option<Box<dyn Engine>>,
    style: RenderStyle,
}

impl ConsoleState {
    pub fn new(config: ConsoleConfig) -> Result<Self, ChessErrors> {
        let game_state = match config.initial_fen.as_deref() {
            Some(fen) => GameState::from_fen(fen)?,
            None => GameState::new_game(),
        };

        let engine: Option<Box<dyn Engine>> = match config.opponent {
            OpponentKind::Human => None,
            OpponentKind::Random => Some(Box::new(match config.seed {
                Some(seed) => RandomEngine::with_seed(seed),
                None => RandomEngine::new(),
            })),
        };

        info!(
            fen = %game_state.get_fen(),
            opponent = ?config.opponent,
            "console session started"
        );

        Ok(Self {
            initial_state: game_state.clone(),
            game_state,
            engine,
            style: config.style,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn greet(&mut self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Welcome to Mailbox Chess!")?;
        writeln!(out, "Enter moves in algebraic notation, e.g., 'e2 e4'")?;
        writeln!(out, "Type 'quit' to exit, 'undo' to undo the last move, 'help' for more")?;
        self.engine_reply(out)?;
        self.display(out)
    }

    /// Handle one input line. Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default().to_ascii_lowercase();

        match cmd.as_str() {
            "quit" | "exit" => return Ok(true),
            "undo" => self.handle_undo(out)?,
            "moves" => self.handle_moves(parts.next(), out)?,
            "fen" => writeln!(out, "{}", self.game_state.get_fen())?,
            "pgn" => match write_pgn(&self.initial_state, &self.game_state, "*") {
                Ok(pgn) => write!(out, "{pgn}")?,
                Err(err) => writeln!(out, "{err}")?,
            },
            "board" => self.display(out)?,
            "help" => {
                writeln!(out, "Commands:")?;
                writeln!(out, "  <start> <end>   move a piece, e.g. 'e2 e4' or 'e2e4'")?;
                writeln!(out, "  undo            take back the last move")?;
                writeln!(out, "  moves [square]  list candidate moves")?;
                writeln!(out, "  board           show the board")?;
                writeln!(out, "  fen             print the position as FEN")?;
                writeln!(out, "  pgn             print the game as PGN")?;
                writeln!(out, "  quit            leave the game")?;
            }
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_move(&mut self, input: &str, out: &mut impl Write) -> io::Result<()> {
        let (start, end) = match parse_long_algebraic(input) {
            Ok(squares) => squares,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        };

        if !is_legal_move(&self.game_state, start, end) {
            debug!(input, "rejected illegal move");
            writeln!(out, "Illegal move: {input}")?;
            return Ok(());
        }

        if let Err(err) = make_move(&mut self.game_state, start, end) {
            writeln!(out, "{err}")?;
            return Ok(());
        }

        self.engine_reply(out)?;
        self.display(out)
    }

    fn handle_undo(&mut self, out: &mut impl Write) -> io::Result<()> {
        match undo_move(&mut self.game_state) {
            Ok(_) => writeln!(out, "Move undone")?,
            Err(err) => {
                writeln!(out, "{err}")?;
                return Ok(());
            }
        }

        // Against the engine, give the turn back to the human.
        if self.engine.is_some()
            && self.game_state.side_to_move == ENGINE_COLOR
            && !self.game_state.history.is_empty()
        {
            undo_move(&mut self.game_state).map_err(io::Error::other)?;
            writeln!(out, "Move undone")?;
        }

        self.engine_reply(out)?;
        self.display(out)
    }

    fn handle_moves(&mut self, square: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let candidates = match square {
            Some(text) => match algebraic_to_square(text) {
                Ok(start) => candidate_moves_from(&self.game_state, start),
                Err(err) => {
                    writeln!(out, "{err}")?;
                    return Ok(());
                }
            },
            None => generate_candidate_moves(&self.game_state),
        };

        let listed: Vec<String> = candidates
            .iter()
            .filter_map(|mv| candidate_to_long_algebraic(mv).ok())
            .collect();

        if listed.is_empty() {
            writeln!(out, "No candidate moves")?;
        } else {
            writeln!(out, "{}", listed.join(" "))?;
        }
        Ok(())
    }

    fn engine_reply(&mut self, out: &mut impl Write) -> io::Result<()> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(());
        };
        if self.game_state.side_to_move != ENGINE_COLOR {
            return Ok(());
        }

        let chosen = match engine.choose_move(&self.game_state) {
            Ok(output) => {
                for line in &output.info_lines {
                    debug!(engine = engine.name(), info = %line, "engine info");
                }
                output.best_move
            }
            Err(err) => {
                warn!(engine = engine.name(), %err, "engine could not move");
                writeln!(out, "{} has no reply: {err}", ENGINE_COLOR.name())?;
                return Ok(());
            }
        };

        if let Some(mv) = chosen {
            let record = make_move(&mut self.game_state, mv.start, mv.end).map_err(io::Error::other)?;
            let text = candidate_to_long_algebraic(&mv).map_err(io::Error::other)?;
            debug!(engine = engine.name(), mv = %text, captured = ?record.captured_piece, "engine replied");
            writeln!(out, "{} plays {text}", ENGINE_COLOR.name())?;
        }
        Ok(())
    }

    fn display(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", render_game_state(&self.game_state, self.style))?;
        writeln!(out, "{}'s turn", self.game_state.side_to_move.name())
    }
}

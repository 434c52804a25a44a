//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for the interactive binary, tests and
//! diagnostics. Rank 8 is drawn at the top.

use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Chess glyphs, `·` for empty squares.
    #[default]
    Unicode,
    /// FEN letters (uppercase Light), `.` for empty squares.
    Ascii,
}

/// Render the board to a string for terminal output.
pub fn render_game_state(game_state: &GameState, style: RenderStyle) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..8).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for col in 0..8 {
            let cell = game_state.piece_at(Square::new(row, col));
            out.push(match (cell, style) {
                (Some(piece), RenderStyle::Unicode) => piece_to_unicode(piece),
                (Some(piece), RenderStyle::Ascii) => piece.letter(),
                (None, RenderStyle::Unicode) => '·',
                (None, RenderStyle::Ascii) => '.',
            });

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

/// Serialize the state to FEN.
///
/// The halfmove clock is not tracked and is always `0`.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state);
    let side_to_move = match game_state.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = generate_en_passant_field(game_state.en_passant_target);

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        0,
        game_state.fullmove_number
    )
}

fn generate_board_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for row in (0..8).rev() {
        let mut empty_count = 0u8;

        for col in 0..8 {
            if let Some(piece) = game_state.piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.letter());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row > 0 {
            out.push('/');
        }
    }

    out
}

/// A right is written while neither the king nor that rook has moved.
fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for (color, kingside, queenside) in [(Color::Light, 'K', 'Q'), (Color::Dark, 'k', 'q')] {
        if game_state.king_moved(color) {
            continue;
        }
        if !game_state.rook_moved(color, CastlingSide::Kingside) {
            out.push(kingside);
        }
        if !game_state.rook_moved(color, CastlingSide::Queenside) {
            out.push(queenside);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    let Some(square) = square else {
        return "-".to_owned();
    };

    square_to_algebraic(square).unwrap_or_else(|_| "-".to_owned())
}

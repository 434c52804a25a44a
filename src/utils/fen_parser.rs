//! FEN-to-GameState parser.
//!
//! Fills the mailbox board, side to move and en-passant target from a
//! Forsyth-Edwards Notation string. The castling field is mapped onto the
//! "has moved" flags: a color with no right at all is treated as having moved
//! its king, and each missing side marks that rook as moved. The halfmove
//! clock is validated but not stored; the fullmove number is kept.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn fen_error(message: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFENstring(message.into())
}

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| fen_error("Missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| fen_error("Missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| fen_error("Missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| fen_error("Missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| fen_error("Missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| fen_error("Missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(fen_error("FEN has extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    locate_kings(&mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    parse_castling_rights(castling_part, &mut game_state)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("Invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = match fullmove_part.parse::<u16>() {
        Ok(number) if number >= 1 => number,
        _ => return Err(fen_error(format!("Invalid fullmove number: {fullmove_part}"))),
    };

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(fen_error("Board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let row = 7 - fen_rank_idx as i8;
        let mut col = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(fen_error(format!("Invalid empty-square count '{ch}'")));
                }
                col += empty_count as i8;
                if col > 8 {
                    return Err(fen_error("Board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_letter(ch)
                .ok_or_else(|| fen_error(format!("Invalid piece character '{ch}' in board layout")))?;

            if col >= 8 {
                return Err(fen_error("Board rank has too many files"));
            }

            game_state.set_piece(Square::new(row, col), Some(piece))?;
            col += 1;
        }

        if col != 8 {
            return Err(fen_error("Board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn locate_kings(game_state: &mut GameState) -> Result<(), ChessErrors> {
    for color in [Color::Light, Color::Dark] {
        let king = Piece::new(PieceKind::King, color);
        let count = game_state.squares.iter().filter(|cell| **cell == Some(king)).count();
        if count != 1 {
            return Err(fen_error(format!(
                "Expected exactly one {} king, found {count}",
                color.name()
            )));
        }
    }

    game_state.resync_king_positions();
    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(fen_error(format!("Invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str, game_state: &mut GameState) -> Result<(), ChessErrors> {
    // [color][side]: starts with "no rights" and gains them per character.
    let mut rights = [[false; 2]; 2];

    if castling_part != "-" {
        for ch in castling_part.chars() {
            let (color, side) = match ch {
                'K' => (Color::Light, CastlingSide::Kingside),
                'Q' => (Color::Light, CastlingSide::Queenside),
                'k' => (Color::Dark, CastlingSide::Kingside),
                'q' => (Color::Dark, CastlingSide::Queenside),
                _ => return Err(fen_error(format!("Invalid castling rights character: {ch}"))),
            };
            rights[color.index()][side.index()] = true;
        }
    }

    for color in [Color::Light, Color::Dark] {
        let sides = rights[color.index()];
        game_state.king_moved[color.index()] = !sides.iter().any(|right| *right);
        for side in [CastlingSide::Queenside, CastlingSide::Kingside] {
            game_state.rook_moved[color.index()][side.index()] = !sides[side.index()];
        }
    }

    Ok(())
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| fen_error(format!("Invalid en-passant square: {en_passant_part}")))
}

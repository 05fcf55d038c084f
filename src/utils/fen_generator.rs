//! Position-to-FEN generator.
//!
//! Clocks are not tracked by the rule set, so the halfmove clock is always 0
//! and the fullmove number is always 1. There is never an en-passant square.

use crate::game_state::chess_types::*;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(position);

    format!("{board} {side_to_move} {castling} - 0 1")
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in 0..8u8 {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match position.get(Square::new_unchecked(file, rank)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(position: &Position) -> String {
    let mut out = String::new();

    for (color, kingside, queenside) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
        let flags = position.flags(color);
        if flags.king_moved {
            continue;
        }
        if !flags.kingside_rook_moved {
            out.push(kingside);
        }
        if !flags.queenside_rook_moved {
            out.push(queenside);
        }
    }

    if out.is_empty() {
        out.push('-');
    }
    out
}

//! FEN-to-Position parser.
//!
//! Reads the board layout, side to move and castling field. Castling rights
//! are mapped onto the movement flags (a missing right marks the matching
//! rook, or the king when both are gone, as moved). The en-passant square and
//! the clocks are validated for shape and otherwise ignored.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::parse_square;

pub fn parse_fen(fen: &str) -> Result<Position, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::new_empty();

    parse_board(board_part, &mut position)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    position.movement_flags = parse_castling_rights(castling_part)?;

    if en_passant_part != "-" {
        parse_square(en_passant_part)
            .map_err(|_| invalid(&format!("en-passant square '{en_passant_part}'")))?;
    }
    halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;

    position.validate_kings()?;
    Ok(position)
}

fn invalid(detail: &str) -> ChessErrors {
    ChessErrors::InvalidFen(detail.to_owned())
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists the "8" rank first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            position.set(Square::new(file as u8, rank as u8)?, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side-to-move field '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<[MovementFlags; 2], ChessErrors> {
    let mut rights = [[false; 2]; 2]; // [color][kingside, queenside]

    if castling_part != "-" {
        for ch in castling_part.chars() {
            match ch {
                'K' => rights[Color::White.index()][0] = true,
                'Q' => rights[Color::White.index()][1] = true,
                'k' => rights[Color::Black.index()][0] = true,
                'q' => rights[Color::Black.index()][1] = true,
                _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
            }
        }
    }

    Ok(rights.map(|[kingside, queenside]| MovementFlags {
        king_moved: !kingside && !queenside,
        kingside_rook_moved: !kingside,
        queenside_rook_moved: !queenside,
    }))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn starting_fen_matches_reset_position() {
        let position = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&position));

        assert_eq!(position, Position::new_game());
    }

    #[test]
    fn castling_field_maps_to_movement_flags() {
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").expect("FEN should parse");
        let white = position.flags(Color::White);
        let black = position.flags(Color::Black);
        assert!(!white.king_moved && !white.kingside_rook_moved && white.queenside_rook_moved);
        assert!(!black.king_moved && black.kingside_rook_moved && !black.queenside_rook_moved);

        let none = parse_fen("4k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN should parse");
        assert!(none.flags(Color::White).king_moved);
        assert_eq!(none.side_to_move, Color::Black);
    }

    #[test]
    fn trailing_fields_are_optional() {
        let short = parse_fen("4k3/8/8/8/8/8/8/4K3 w").expect("short FEN should parse");
        assert_eq!(short.pieces().count(), 2);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let cases = [
            "",
            "8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4X3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w Z - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e9 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - x 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1 extra",
        ];
        for fen in cases {
            assert!(
                matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))),
                "{fen:?} should be rejected"
            );
        }
    }

    #[test]
    fn positions_without_both_kings_are_rejected() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ChessErrors::MissingKing(Color::Black))
        );
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(ChessErrors::MissingKing(Color::White))
        );
    }
}

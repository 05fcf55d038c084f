//! Coordinate notation for squares and moves.
//!
//! Squares are written `<file><rank>` with files `a`-`h` left to right and
//! ranks `1`-`8` bottom to top from White's side. Moves are two squares
//! joined by `-` (the hyphen may be omitted on input).

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, Square};

/// Convert notation such as "e4" to a square.
pub fn parse_square(text: &str) -> Result<Square, ChessErrors> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    Square::new(file - b'a', b'8' - rank)
}

/// Convert "e2-e4" or "e2e4" to a move.
pub fn parse_move(text: &str) -> Result<Move, ChessErrors> {
    let trimmed = text.trim();
    let (from, to) = match trimmed.len() {
        5 if trimmed.as_bytes()[2] == b'-' => (&trimmed[..2], &trimmed[3..]),
        4 if trimmed.is_ascii() => (&trimmed[..2], &trimmed[2..]),
        _ => return Err(ChessErrors::InvalidAlgebraic(text.to_owned())),
    };

    let from = parse_square(from).map_err(|_| ChessErrors::InvalidAlgebraic(text.to_owned()))?;
    let to = parse_square(to).map_err(|_| ChessErrors::InvalidAlgebraic(text.to_owned()))?;
    Ok(Move::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_map_to_white_perspective_indices() {
        let a1 = parse_square("a1").expect("a1 should parse");
        let h8 = parse_square("h8").expect("h8 should parse");
        assert_eq!((a1.file(), a1.rank()), (0, 7));
        assert_eq!((h8.file(), h8.rank()), (7, 0));
        assert_eq!(parse_square("E4").expect("E4 should parse").to_string(), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e44", "4e"] {
            assert!(
                matches!(parse_square(bad), Err(ChessErrors::InvalidAlgebraic(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn moves_parse_with_or_without_hyphen() {
        let hyphen = parse_move("e2-e4").expect("e2-e4 should parse");
        let bare = parse_move(" e2e4 ").expect("e2e4 should parse");
        assert_eq!(hyphen, bare);
        assert_eq!(hyphen.to_string(), "e2-e4");

        assert!(parse_move("e2_e4").is_err());
        assert!(parse_move("e2-e9").is_err());
        assert!(parse_move("é2e4").is_err());
    }
}

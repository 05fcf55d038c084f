//! Attack geometry and check detection.
//!
//! Everything here answers "does this piece hit that square" from the piece
//! patterns alone, so the legality filter can call it without recursion.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks_square;
use crate::moves::king_moves::king_attacks_square;
use crate::moves::knight_moves::knight_attacks_square;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::queen_moves::queen_attacks_square;
use crate::moves::rook_moves::rook_attacks_square;

/// Attack geometry of one piece. This never consults move legality, so check
/// detection cannot recurse back into the legality filter.
pub fn piece_attacks_square(position: &Position, from: Square, piece: Piece, target: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks_square(piece.color, from, target),
        PieceKind::Knight => knight_attacks_square(from, target),
        PieceKind::Bishop => bishop_attacks_square(position, from, target),
        PieceKind::Rook => rook_attacks_square(position, from, target),
        PieceKind::Queen => queen_attacks_square(position, from, target),
        PieceKind::King => king_attacks_square(from, target),
    }
}

pub fn is_square_attacked(position: &Position, square: Square, attacker_color: Color) -> bool {
    position
        .pieces_of(attacker_color)
        .any(|(from, piece)| piece_attacks_square(position, from, piece, square))
}

/// A color without a king on the board is never reported as in check.
#[inline]
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    let Some(king_sq) = position.king_square(color) else {
        return false;
    };
    is_square_attacked(position, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::parse_square;

    fn sq(name: &str) -> Square {
        parse_square(name).expect("test square should parse")
    }

    #[test]
    fn start_position_has_no_checks_and_pawn_cover_on_third_rank() {
        let position = Position::new_game();
        assert!(!is_king_in_check(&position, Color::White));
        assert!(!is_king_in_check(&position, Color::Black));
        assert!(is_square_attacked(&position, sq("e3"), Color::White));
        assert!(is_square_attacked(&position, sq("f6"), Color::Black));
        assert!(!is_square_attacked(&position, sq("e5"), Color::White));
    }

    #[test]
    fn pawn_forward_square_is_not_attacked() {
        let position =
            Position::from_fen("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_square_attacked(&position, sq("e5"), Color::White));
        assert!(is_square_attacked(&position, sq("d5"), Color::White));
        assert!(is_square_attacked(&position, sq("f5"), Color::White));
    }

    #[test]
    fn sliding_check_is_blocked_by_interposed_piece() {
        let open =
            Position::from_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&open, Color::White));

        let blocked =
            Position::from_fen("4k3/8/8/8/8/8/8/r1N1K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&blocked, Color::White));
    }

    #[test]
    fn knight_and_rook_each_give_check() {
        let position =
            Position::from_fen("4k3/8/8/8/8/5n2/8/r3K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&position, Color::White));

        let rook = position.get(sq("a1")).expect("a1 holds the rook");
        let knight = position.get(sq("f3")).expect("f3 holds the knight");
        assert!(piece_attacks_square(&position, sq("a1"), rook, sq("e1")));
        assert!(piece_attacks_square(&position, sq("f3"), knight, sq("e1")));
        assert!(!piece_attacks_square(&position, sq("f3"), knight, sq("e2")));

        let mut without_king = position.clone();
        without_king.set(sq("e1"), None);
        assert!(!is_king_in_check(&without_king, Color::White));
    }
}

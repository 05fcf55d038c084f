use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{deltas, is_path_clear};

/// Equal, nonzero file and rank distance.
#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    df != 0 && df.abs() == dr.abs()
}

/// Diagonal slide with nothing in between. Serves as both the bishop's
/// attack geometry and its movement pattern.
#[inline]
pub fn bishop_attacks_square(position: &Position, from: Square, target: Square) -> bool {
    is_diagonal(from, target) && is_path_clear(position, from, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::parse_square;

    fn sq(name: &str) -> Square {
        parse_square(name).expect("test square should parse")
    }

    #[test]
    fn bishop_slides_until_blocked() {
        let mut position = Position::new_empty();
        assert!(bishop_attacks_square(&position, sq("c1"), sq("h6")));
        assert!(!bishop_attacks_square(&position, sq("c1"), sq("c5")));

        position.set(sq("e3"), Some(Piece::new(Color::White, PieceKind::Pawn)));
        assert!(bishop_attacks_square(&position, sq("c1"), sq("e3")));
        assert!(!bishop_attacks_square(&position, sq("c1"), sq("f4")));
    }
}

use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::step_attack_table;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// King target masks (Chebyshev distance 1) indexed by [`Square::index`].
pub const KING_ATTACKS: [u64; 64] = step_attack_table(&KING_OFFSETS);

#[inline]
pub const fn king_attacks(square: Square) -> u64 {
    KING_ATTACKS[square.index()]
}

/// True iff `target` is adjacent to `from`. Castling is not a king move here.
#[inline]
pub const fn king_attacks_square(from: Square, target: Square) -> bool {
    king_attacks(from) & target.mask() != 0
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, king_attacks_square};
    use crate::utils::algebraic::parse_square;

    #[test]
    fn king_target_counts_by_region() {
        let corner = parse_square("h8").expect("h8 should parse");
        let edge = parse_square("e1").expect("e1 should parse");
        let centre = parse_square("e4").expect("e4 should parse");
        assert_eq!(king_attacks(corner).count_ones(), 3);
        assert_eq!(king_attacks(edge).count_ones(), 5);
        assert_eq!(king_attacks(centre).count_ones(), 8);
    }

    #[test]
    fn king_steps_do_not_wrap_across_files() {
        let h4 = parse_square("h4").expect("h4 should parse");
        let a5 = parse_square("a5").expect("a5 should parse");
        let g5 = parse_square("g5").expect("g5 should parse");
        assert!(king_attacks_square(h4, g5));
        assert!(!king_attacks_square(h4, a5));
    }
}

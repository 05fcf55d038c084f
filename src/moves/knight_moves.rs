use crate::game_state::chess_types::Square;
use crate::move_generation::legal_move_shared::step_attack_table;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Knight target masks indexed by [`Square::index`].
pub const KNIGHT_ATTACKS: [u64; 64] = step_attack_table(&KNIGHT_OFFSETS);

#[inline]
pub const fn knight_attacks(square: Square) -> u64 {
    KNIGHT_ATTACKS[square.index()]
}

/// True iff `target` is an L-shaped (1,2)/(2,1) jump away from `from`.
#[inline]
pub const fn knight_attacks_square(from: Square, target: Square) -> bool {
    knight_attacks(from) & target.mask() != 0
}

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{deltas, is_path_clear};

/// Exactly one of the file/rank deltas is zero.
#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    (df == 0) != (dr == 0)
}

/// Straight slide with nothing in between.
#[inline]
pub fn rook_attacks_square(position: &Position, from: Square, target: Square) -> bool {
    is_straight(from, target) && is_path_clear(position, from, target)
}

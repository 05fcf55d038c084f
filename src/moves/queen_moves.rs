use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_path_clear;
use crate::moves::bishop_moves::is_diagonal;
use crate::moves::rook_moves::is_straight;

#[inline]
pub fn is_queen_line(from: Square, to: Square) -> bool {
    is_diagonal(from, to) || is_straight(from, to)
}

/// Bishop-or-rook slide with nothing in between.
#[inline]
pub fn queen_attacks_square(position: &Position, from: Square, target: Square) -> bool {
    is_queen_line(from, target) && is_path_clear(position, from, target)
}

//! Canonical chess-rule constants.
//!
//! Starting arrangement, home squares used by the movement-flag bookkeeping,
//! and the per-color rank constants the pawn rules depend on.

use crate::game_state::chess_types::{Color, Square};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Rank index of a color's back row.
#[inline]
pub const fn back_rank(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

/// Rank index pawns of this color start on.
#[inline]
pub const fn pawn_start_rank(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Rank index on which pawns of this color promote.
#[inline]
pub const fn promotion_rank(color: Color) -> u8 {
    back_rank(color.opposite())
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::new_unchecked(4, back_rank(color))
}

#[inline]
pub const fn kingside_rook_home(color: Color) -> Square {
    Square::new_unchecked(7, back_rank(color))
}

#[inline]
pub const fn queenside_rook_home(color: Color) -> Square {
    Square::new_unchecked(0, back_rank(color))
}

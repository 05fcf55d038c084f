use crate::game_state::chess_rules::pawn_start_rank;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::deltas;

/// Diagonal-forward attack geometry only; the quiet forward shapes never
/// attack anything.
#[inline]
pub fn pawn_attacks_square(color: Color, from: Square, target: Square) -> bool {
    let (df, dr) = deltas(from, target);
    dr == color.forward() && df.abs() == 1
}

/// Movement pattern for a pawn of `color` standing on `from`.
///
/// One step forward onto an empty square, two steps from the start rank
/// through empty squares, or one step diagonally forward onto an enemy piece.
/// There is no en passant.
pub fn pawn_pattern_allows(position: &Position, color: Color, from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    let dir = color.forward();

    if df == 0 && dr == dir {
        return position.is_empty(to);
    }

    if df == 0 && dr == 2 * dir && from.rank() == pawn_start_rank(color) {
        let Some(between) = from.offset(0, dir) else {
            return false;
        };
        return position.is_empty(between) && position.is_empty(to);
    }

    if df.abs() == 1 && dr == dir {
        return position.is_occupied_by_color(to, color.opposite());
    }

    false
}

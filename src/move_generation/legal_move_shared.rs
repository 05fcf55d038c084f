//! Geometry helpers shared by the per-piece patterns and attack detection.

use crate::game_state::chess_types::*;

/// Signed (file, rank) delta from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.file() as i8 - from.file() as i8,
        to.rank() as i8 - from.rank() as i8,
    )
}

/// Same file, same rank, or same diagonal, and not the same square.
#[inline]
pub fn is_aligned(from: Square, to: Square) -> bool {
    let (df, dr) = deltas(from, to);
    (df == 0) != (dr == 0) || (df != 0 && df.abs() == dr.abs())
}

/// Target masks for a single-step piece, one entry per [`Square::index`].
///
/// `offsets` are (file, rank) jumps; jumps that leave the board are dropped.
pub const fn step_attack_table(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut index = 0usize;

    while index < 64 {
        let file = (index % 8) as i8;
        let rank = (index / 8) as i8;

        let mut i = 0usize;
        while i < offsets.len() {
            let (df, dr) = offsets[i];
            let (f, r) = (file + df, rank + dr);
            if f >= 0 && f < 8 && r >= 0 && r < 8 {
                table[index] |= 1u64 << (r as usize * 8 + f as usize);
            }
            i += 1;
        }
        index += 1;
    }

    table
}

/// True iff every square strictly between two aligned squares is empty.
///
/// Squares that are not on a shared line have no path and yield `false`.
pub fn is_path_clear(position: &Position, from: Square, to: Square) -> bool {
    if !is_aligned(from, to) {
        return false;
    }

    let (df, dr) = deltas(from, to);
    let step_f = df.signum();
    let step_r = dr.signum();

    let mut current = from.offset(step_f, step_r);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if !position.is_empty(sq) {
            return false;
        }
        current = sq.offset(step_f, step_r);
    }

    // Aligned squares always meet; the walk cannot leave the board first.
    true
}

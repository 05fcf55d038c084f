//! Legality filter and terminal-state detection.
//!
//! A move is legal when the piece's movement pattern allows it and playing it
//! on a scratch copy does not leave the mover's own king attacked. The
//! position handed in is never mutated.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::bishop_moves::bishop_attacks_square;
use crate::moves::king_moves::king_attacks_square;
use crate::moves::knight_moves::knight_attacks_square;
use crate::moves::pawn_moves::pawn_pattern_allows;
use crate::moves::queen_moves::queen_attacks_square;
use crate::moves::rook_moves::rook_attacks_square;

/// Movement pattern of `piece` from `from` to `to`, ignoring check safety.
pub fn pattern_allows(position: &Position, piece: Piece, from: Square, to: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => pawn_pattern_allows(position, piece.color, from, to),
        PieceKind::Knight => knight_attacks_square(from, to),
        PieceKind::Bishop => bishop_attacks_square(position, from, to),
        PieceKind::Rook => rook_attacks_square(position, from, to),
        PieceKind::Queen => queen_attacks_square(position, from, to),
        PieceKind::King => king_attacks_square(from, to),
    }
}

/// Full legality of moving whatever stands on `from` to `to`.
///
/// This does not look at the side to move; the session enforces turn order.
pub fn is_legal_move(position: &Position, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    let Some(piece) = position.get(from) else {
        return false;
    };
    if position.is_occupied_by_color(to, piece.color) {
        return false;
    }
    if !pattern_allows(position, piece, from, to) {
        return false;
    }

    match apply_move(position, Move::new(from, to)) {
        Ok(next) => !is_king_in_check(&next, piece.color),
        Err(_) => false,
    }
}

/// Every destination reachable legally from `from`, in board order.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    if position.is_empty(from) {
        return Vec::new();
    }
    Square::all()
        .filter(|to| is_legal_move(position, from, *to))
        .collect()
}

/// Every legal move of the side to move.
pub fn all_legal_moves(position: &Position) -> Vec<Move> {
    legal_moves_for(position, position.side_to_move)
}

pub fn legal_moves_for(position: &Position, color: Color) -> Vec<Move> {
    let mut moves = Vec::<Move>::with_capacity(64);
    for (from, _) in position.pieces_of(color) {
        moves.extend(
            legal_destinations(position, from)
                .into_iter()
                .map(|to| Move::new(from, to)),
        );
    }
    moves
}

/// Stops at the first legal destination found.
pub fn has_any_legal_move(position: &Position, color: Color) -> bool {
    position
        .pieces_of(color)
        .any(|(from, _)| Square::all().any(|to| is_legal_move(position, from, to)))
}

#[inline]
pub fn is_checkmate(position: &Position, color: Color) -> bool {
    is_king_in_check(position, color) && !has_any_legal_move(position, color)
}

#[inline]
pub fn is_stalemate(position: &Position, color: Color) -> bool {
    !is_king_in_check(position, color) && !has_any_legal_move(position, color)
}

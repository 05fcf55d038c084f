//! Board mutation for validated moves.
//!
//! `apply_move` produces a scratch copy for speculative checks and tree walks,
//! while `make_move`/`unmake_move` mutate a position in place and hand back
//! the [`UndoState`] needed to reverse it.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{kingside_rook_home, promotion_rank, queenside_rook_home};
use crate::game_state::chess_types::*;

/// Copy `position` and play `mv` on the copy. The original is untouched.
pub fn apply_move(position: &Position, mv: Move) -> Result<Position, ChessErrors> {
    let mut next = position.clone();
    make_move(&mut next, mv)?;
    Ok(next)
}

/// Play `mv` in place without any legality checks.
///
/// Updates movement flags, places the piece (promoting a pawn that reaches
/// the far rank to a queen), records the last-move highlight and flips the
/// side to move. Fails only when the source square is empty.
pub fn make_move(position: &mut Position, mv: Move) -> Result<UndoState, ChessErrors> {
    let moved_piece = position.get(mv.from).ok_or(ChessErrors::IllegalMove {
        from: mv.from,
        to: mv.to,
    })?;
    let mover = moved_piece.color;

    let undo = UndoState {
        mv,
        moved_piece,
        captured_piece: position.get(mv.to),
        was_king_move: moved_piece.kind == PieceKind::King,
        was_rook_move: moved_piece.kind == PieceKind::Rook,
        prev_movement_flags: position.movement_flags,
    };

    update_movement_flags(position, moved_piece, mv.from);

    position.set(mv.to, Some(promoted(moved_piece, mv.to)));
    position.set(mv.from, None);
    position.last_move = Some(mv);
    position.side_to_move = mover.opposite();

    Ok(undo)
}

/// Reverse a move played by [`make_move`].
///
/// The last-move highlight is left alone; the owner of the undo history knows
/// which move is now the latest.
pub fn unmake_move(position: &mut Position, undo: &UndoState) {
    position.set(undo.mv.from, Some(undo.moved_piece));
    position.set(undo.mv.to, undo.captured_piece);
    position.movement_flags = undo.prev_movement_flags;
    position.side_to_move = undo.mover();
}

fn promoted(piece: Piece, to: Square) -> Piece {
    if piece.kind == PieceKind::Pawn && to.rank() == promotion_rank(piece.color) {
        Piece::new(piece.color, PieceKind::Queen)
    } else {
        piece
    }
}

fn update_movement_flags(position: &mut Position, piece: Piece, from: Square) {
    let color = piece.color;
    match piece.kind {
        PieceKind::King => position.flags_mut(color).king_moved = true,
        PieceKind::Rook if from == kingside_rook_home(color) => {
            position.flags_mut(color).kingside_rook_moved = true
        }
        PieceKind::Rook if from == queenside_rook_home(color) => {
            position.flags_mut(color).queenside_rook_moved = true
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::{parse_move, parse_square};

    fn mv(text: &str) -> Move {
        parse_move(text).expect("test move should parse")
    }

    #[test]
    fn apply_move_leaves_source_position_untouched() {
        let start = Position::new_game();
        let next = apply_move(&start, mv("e2-e4")).expect("pawn move should apply");

        assert_eq!(start, Position::new_game());
        assert_eq!(next.side_to_move, Color::Black);
        assert_eq!(next.last_move, Some(mv("e2-e4")));
        assert!(next.is_empty(parse_square("e2").expect("e2 should parse")));
    }

    #[test]
    fn make_then_unmake_restores_placement_and_flags() {
        let mut position =
            Position::from_fen("r3k3/8/8/8/8/8/8/4K2R w Kq - 0 1").expect("FEN should parse");
        let before = position.clone();

        let undo = make_move(&mut position, mv("h1-h8")).expect("rook move should apply");
        assert!(position.flags(Color::White).kingside_rook_moved);
        assert_eq!(undo.captured_piece, None);

        unmake_move(&mut position, &undo);
        assert!(position.same_placement(&before));
        assert_eq!(position.movement_flags, before.movement_flags);
    }

    #[test]
    fn pawn_reaching_far_rank_becomes_queen_and_unmake_restores_pawn() {
        let mut position =
            Position::from_fen("4k3/P7/8/8/8/8/7p/4K3 w - - 0 1").expect("FEN should parse");
        let before = position.clone();

        let undo = make_move(&mut position, mv("a7-a8")).expect("promotion should apply");
        assert_eq!(
            position.get(parse_square("a8").expect("a8 should parse")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );

        unmake_move(&mut position, &undo);
        assert!(position.same_placement(&before));

        make_move(&mut position, mv("a7-a8")).expect("promotion should apply");
        make_move(&mut position, mv("h2-h1")).expect("black promotion should apply");
        assert_eq!(
            position.get(parse_square("h1").expect("h1 should parse")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn unmake_leaves_highlight_to_the_caller() {
        let mut position = Position::new_game();
        make_move(&mut position, mv("e2-e4")).expect("pawn move should apply");
        let undo = make_move(&mut position, mv("d7-d5")).expect("pawn move should apply");
        assert_eq!(undo.mv, mv("d7-d5"));
        assert_eq!(undo.prev_movement_flags, [MovementFlags::default(); 2]);

        unmake_move(&mut position, &undo);
        assert_eq!(position.last_move, Some(mv("d7-d5")));
        assert_eq!(position.side_to_move, Color::Black);
    }

    #[test]
    fn empty_source_is_rejected() {
        let mut position = Position::new_game();
        let err = make_move(&mut position, mv("e4-e5")).expect_err("empty source should fail");
        assert!(matches!(err, ChessErrors::IllegalMove { .. }));
        assert_eq!(position, Position::new_game());
    }
}

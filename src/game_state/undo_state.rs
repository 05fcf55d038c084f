use crate::game_state::chess_types::*;

/// Single undo record pushed by the session for every applied move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// The piece as it stood on the source square, before any promotion.
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,

    pub was_king_move: bool,
    pub was_rook_move: bool,

    pub prev_movement_flags: [MovementFlags; 2],
}

impl UndoState {
    #[inline]
    pub fn mover(&self) -> Color {
        self.moved_piece.color
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }
}

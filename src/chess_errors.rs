//! Errors used throughout the rule engine and game session.
//!
//! `ChessErrors` is the single error type across the crate. Every variant is
//! recoverable: an operation that returns one of them has left the position
//! and the session exactly as they were before the call.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Unified error type for the rule engine and session.
///
/// - `IllegalMove` covers pattern, occupancy, turn and check-safety failures
///   as well as moves submitted after the game has ended. The caller should
///   re-prompt.
/// - `NoOpUndo` is returned when there is nothing to undo. It is informational
///   and callers are free to ignore it.
/// - `InvalidSquare`, `InvalidAlgebraic` and `InvalidFen` reject malformed
///   input before the board is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    #[error("illegal move {from}-{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("nothing to undo")]
    NoOpUndo,

    /// Payload: the raw (file, rank) indices that were supplied.
    #[error("square ({file}, {rank}) is outside the 8x8 board")]
    InvalidSquare { file: i16, rank: i16 },

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// The position does not hold exactly one king of this color.
    #[error("position must contain exactly one {0} king")]
    MissingKing(Color),
}

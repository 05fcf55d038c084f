//! Game session: an owned position plus its history.
//!
//! `GameSession` validates and applies moves, keeps the undo stack, the
//! human-readable move log and per-color capture counts, and tracks whether
//! the game has ended. There is no shared or global state; callers own the
//! session value and serialize access to it.

use tracing::{debug, info};

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{
    is_checkmate, is_legal_move, is_stalemate, legal_destinations,
};
use crate::session::game_status::GameStatus;
use crate::utils::algebraic::parse_move;

#[derive(Debug, Clone)]
pub struct GameSession {
    position: Position,
    undo_stack: Vec<UndoState>,
    move_log: Vec<String>,
    // [white, black]
    captures: [u32; 2],
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            position: Position::new_game(),
            undo_stack: Vec::new(),
            move_log: Vec::new(),
            captures: [0; 2],
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary position. The position must hold exactly one
    /// king per color; an already-finished position starts as game over.
    pub fn from_position(position: Position) -> Result<Self, ChessErrors> {
        position.validate_kings()?;
        let mut session = Self {
            position,
            ..Self::new()
        };
        session.check_game_end();
        Ok(session)
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        Self::from_position(Position::from_fen(fen)?)
    }

    /// Reinitialize everything: position, history, log, counts and status.
    pub fn new_game(&mut self) {
        *self = Self::new();
        info!("new game started");
    }

    /// Validate and play `from`-`to` for the side to move.
    ///
    /// On any failure the session is left untouched and
    /// [`ChessErrors::IllegalMove`] is returned.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        let illegal = ChessErrors::IllegalMove { from, to };

        if self.status.is_over() {
            debug!(%from, %to, status = %self.status, "move rejected: game is over");
            return Err(illegal);
        }
        if !self.position.is_occupied_by_color(from, self.position.side_to_move) {
            debug!(%from, %to, "move rejected: not the side to move");
            return Err(illegal);
        }
        if !is_legal_move(&self.position, from, to) {
            debug!(%from, %to, "move rejected by rule engine");
            return Err(illegal);
        }

        let undo = make_move(&mut self.position, Move::new(from, to))?;

        let mut entry = undo.mv.to_string();
        if let Some(captured) = undo.captured_piece {
            self.captures[undo.mover().index()] += 1;
            entry.push_str(" x");
            entry.push_str(captured.kind.name());
        }
        debug!(mover = %undo.mover(), entry = %entry, "move applied");

        self.move_log.push(entry);
        self.undo_stack.push(undo);
        self.check_game_end();
        Ok(())
    }

    /// Parse `e2-e4` / `e2e4` and apply it.
    pub fn apply_notation(&mut self, text: &str) -> Result<(), ChessErrors> {
        let mv = parse_move(text)?;
        self.apply_move(mv.from, mv.to)
    }

    /// Take back the most recent move.
    ///
    /// Returns [`ChessErrors::NoOpUndo`] when the history is empty, in which
    /// case nothing changes. A successful undo always puts the session back in
    /// progress.
    pub fn undo(&mut self) -> Result<Move, ChessErrors> {
        let Some(undo) = self.undo_stack.pop() else {
            debug!("undo requested with empty history");
            return Err(ChessErrors::NoOpUndo);
        };

        unmake_move(&mut self.position, &undo);

        if undo.is_capture() {
            let count = &mut self.captures[undo.mover().index()];
            *count = count.saturating_sub(1);
        }
        self.move_log.pop();
        self.status = GameStatus::InProgress;
        self.position.last_move = self.undo_stack.last().map(|prev| prev.mv);

        debug!(mv = %undo.mv, "move undone");
        Ok(undo.mv)
    }

    /// Evaluate the side to move for checkmate or stalemate.
    pub fn check_game_end(&mut self) -> GameStatus {
        let side = self.position.side_to_move;
        self.status = if is_checkmate(&self.position, side) {
            GameStatus::Checkmate {
                winner: side.opposite(),
            }
        } else if is_stalemate(&self.position, side) {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        };

        if self.status.is_over() {
            info!(result = %self.status, moves = self.move_log.len(), "game over");
        }
        self.status
    }

    /// Result when the game is over, otherwise whose turn it is with a check
    /// marker.
    pub fn current_status_text(&self) -> String {
        if let Some(result) = self.status.result_text() {
            return result;
        }
        let side = self.position.side_to_move;
        if is_king_in_check(&self.position, side) {
            format!("Turn: {side} (check)")
        } else {
            format!("Turn: {side}")
        }
    }

    #[inline]
    pub fn current_position(&self) -> &Position {
        &self.position
    }

    /// Legal destinations of whatever piece stands on `from`, for move hints.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.position, from)
    }

    #[inline]
    pub fn move_log(&self) -> &[String] {
        &self.move_log
    }

    /// `(white, black)` capture counts.
    #[inline]
    pub fn capture_counts(&self) -> (u32, u32) {
        (
            self.captures[Color::White.index()],
            self.captures[Color::Black.index()],
        )
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.position.last_move
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }
}

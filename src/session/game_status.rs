use std::fmt;

use crate::game_state::chess_types::Color;

/// Session state machine: in progress, or over with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    #[inline]
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Human-readable result, `None` while the game is running.
    pub fn result_text(self) -> Option<String> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Checkmate { winner } => Some(format!("Checkmate — {winner} wins")),
            GameStatus::Stalemate => Some("Stalemate — draw".to_owned()),
        }
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameStatus::InProgress => "*",
            GameStatus::Checkmate {
                winner: Color::White,
            } => "1-0",
            GameStatus::Checkmate {
                winner: Color::Black,
            } => "0-1",
            GameStatus::Stalemate => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result_text() {
            Some(text) => f.write_str(&text),
            None => f.write_str("In progress"),
        }
    }
}

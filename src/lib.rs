//! Crate root module declarations for the chess rule engine and game session.
//!
//! The board model lives in `game_state`, per-piece geometry in `moves`, the
//! legality filter and terminal-state detection in `move_generation`, and the
//! history-keeping session in `session`. `engines` and `utils` hold the random
//! mover and the notation, FEN, rendering and record-export helpers used by the
//! text front end and the tests.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod position;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod session {
    pub mod game_session;
    pub mod game_status;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod render_game_state;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_types::{Color, Move, Piece, PieceKind, Position, Square};
pub use session::game_session::GameSession;
pub use session::game_status::GameStatus;

//! Board/position model.
//!
//! `Position` owns the 8x8 grid, the side to move, the king/rook movement
//! flags and the last-move highlight. It performs no rule checks of its own:
//! `set` is the only mutation primitive and callers are responsible for
//! legality.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{back_rank, pawn_start_rank};
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Per-color movement bookkeeping kept for castling rights.
///
/// Castling itself is not part of the rule set, so these flags never affect
/// legality.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementFlags {
    pub king_moved: bool,
    pub kingside_rook_moved: bool,
    pub queenside_rook_moved: bool,
}

/// Full mutable game state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    // [rank][file], rank 0 is Black's back row.
    board: [[Option<Piece>; 8]; 8],

    pub side_to_move: Color,
    pub movement_flags: [MovementFlags; 2],

    /// Squares of the most recently completed move, for highlighting only.
    pub last_move: Option<Move>,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::White,
            movement_flags: [MovementFlags::default(); 2],
            last_move: None,
        }
    }
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// Empty board with White to move. Not a valid game position until both
    /// kings are placed.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting arrangement.
    pub fn new_game() -> Self {
        let mut position = Self::default();
        position.reset();
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Restore the standard starting arrangement, clear every flag and the
    /// last-move highlight, and hand the move to White.
    pub fn reset(&mut self) {
        *self = Self::default();
        for color in Color::ALL {
            let home = back_rank(color);
            let pawns = pawn_start_rank(color);
            for (file, kind) in BACK_ROW.iter().enumerate() {
                self.board[home as usize][file] = Some(Piece::new(color, *kind));
                self.board[pawns as usize][file] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.board[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    pub fn is_occupied_by_color(&self, square: Square, color: Color) -> bool {
        matches!(self.get(square), Some(piece) if piece.color == color)
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    #[inline]
    pub fn flags(&self, color: Color) -> &MovementFlags {
        &self.movement_flags[color.index()]
    }

    #[inline]
    pub fn flags_mut(&mut self, color: Color) -> &mut MovementFlags {
        &mut self.movement_flags[color.index()]
    }

    /// Every occupied square together with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|piece| (sq, piece)))
    }

    /// Occupied squares of one color.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    /// Compare only piece placement and side to move.
    pub fn same_placement(&self, other: &Position) -> bool {
        self.board == other.board && self.side_to_move == other.side_to_move
    }

    /// Check the exactly-one-king-per-color invariant.
    pub fn validate_kings(&self) -> Result<(), ChessErrors> {
        for color in Color::ALL {
            let kings = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessErrors::MissingKing(color));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        crate::utils::algebraic::parse_square(name).expect("test square should parse")
    }

    #[test]
    fn reset_places_standard_arrangement() {
        let position = Position::new_game();
        assert_eq!(position.side_to_move, Color::White);
        assert_eq!(position.pieces().count(), 32);
        assert_eq!(
            position.get(sq("e1")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            position.get(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            position.get(sq("a2")),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert!(position.is_empty(sq("e4")));
        assert!(position.validate_kings().is_ok());
    }

    #[test]
    fn reset_clears_flags_and_highlight() {
        let mut position = Position::new_game();
        position.flags_mut(Color::Black).king_moved = true;
        position.side_to_move = Color::Black;
        position.last_move = Some(Move::new(sq("e2"), sq("e4")));
        position.set(sq("e4"), Some(Piece::new(Color::White, PieceKind::Queen)));

        position.reset();

        assert_eq!(position, Position::new_game());
        assert_eq!(*position.flags(Color::Black), MovementFlags::default());
    }

    #[test]
    fn occupancy_queries_respect_color() {
        let position = Position::new_game();
        assert!(position.is_occupied_by_color(sq("b1"), Color::White));
        assert!(!position.is_occupied_by_color(sq("b1"), Color::Black));
        assert!(!position.is_occupied_by_color(sq("b4"), Color::White));
        assert_eq!(position.king_square(Color::Black), Some(sq("e8")));
    }

    #[test]
    fn missing_king_is_reported() {
        let mut position = Position::new_game();
        position.set(sq("e8"), None);
        assert!(matches!(
            position.validate_kings(),
            Err(ChessErrors::MissingKing(Color::Black))
        ));
    }
}

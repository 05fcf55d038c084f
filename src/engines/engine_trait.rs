//! Move-chooser abstraction used by the text front end and playout tests.
//!
//! A chooser looks at a position and proposes one legal move for the side to
//! move, or `None` when there is nothing to play.

use rand::RngCore;

use crate::game_state::chess_types::{Move, Position};

pub trait MoveChooser {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, position: &Position, rng: &mut dyn RngCore) -> Option<Move>;
}

//! Uniform random mover.
//!
//! Picks uniformly among the legal moves of the side to move. Used for
//! diagnostics, randomized playout tests and the `random` command of the
//! text front end.

use rand::prelude::IndexedRandom;
use rand::RngCore;
use tracing::debug;

use crate::engines::engine_trait::MoveChooser;
use crate::game_state::chess_types::{Move, Position};
use crate::move_generation::legal_move_generator::all_legal_moves;

#[derive(Debug, Default)]
pub struct RandomMover {
    moves_chosen: u64,
}

impl RandomMover {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves_chosen(&self) -> u64 {
        self.moves_chosen
    }
}

impl MoveChooser for RandomMover {
    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.moves_chosen = 0;
    }

    fn choose_move(&mut self, position: &Position, rng: &mut dyn RngCore) -> Option<Move> {
        let legal_moves = all_legal_moves(position);
        let picked = legal_moves.as_slice().choose(rng).copied();

        debug!(
            legal_moves = legal_moves.len(),
            picked = ?picked,
            "random mover"
        );
        if picked.is_some() {
            self.moves_chosen += 1;
        }
        picked
    }
}

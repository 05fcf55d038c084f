//! Leaf-node counting over the legal move tree.
//!
//! Used to validate the rule engine against known node counts and as the
//! workload for the Criterion bench.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Plain node count at `depth`.
pub fn perft(position: &Position, depth: u8) -> Result<usize, ChessErrors> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = all_legal_moves(position);
    if depth == 1 {
        return Ok(moves.len());
    }

    let mut nodes = 0usize;
    for mv in moves {
        let next = apply_move(position, mv)?;
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

/// Node count plus per-leaf classification of the move that reached it.
pub fn perft_detailed(position: &Position, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in all_legal_moves(position) {
        let next = apply_move(position, mv)?;

        if depth > 1 {
            total.merge(perft_detailed(&next, depth - 1)?);
            continue;
        }

        total.nodes += 1;
        if position.get(mv.to).is_some() {
            total.captures += 1;
        }
        if position.get(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn)
            && next.get(mv.to).map(|p| p.kind) == Some(PieceKind::Queen)
        {
            total.promotions += 1;
        }
        let defender = next.side_to_move;
        if is_king_in_check(&next, defender) {
            total.checks += 1;
            if !has_any_legal_move(&next, defender) {
                total.checkmates += 1;
            }
        }
    }

    Ok(total)
}

/// Per-root-move node counts, handy when hunting a divergence.
pub fn perft_divide(position: &Position, depth: u8) -> Result<Vec<(Move, usize)>, ChessErrors> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in all_legal_moves(position) {
        let next = apply_move(position, mv)?;
        out.push((mv, perft(&next, depth - 1)?));
    }
    Ok(out)
}

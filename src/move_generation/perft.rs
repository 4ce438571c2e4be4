//! Perft: count legal move sequences to a fixed depth.
//!
//! Besides the node total, leaf moves are tallied by kind so special-move
//! handling can be checked against published tables.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_legal_move};
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Node count only.
pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(game_state);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|generated| perft(&generated.game_after_move, depth - 1))
        .sum()
}

/// Node count with leaf move statistics.
pub fn perft_detailed(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generate_legal_moves(game_state) {
        if depth == 1 {
            tally_leaf(&generated.mv, &generated.game_after_move, &mut total);
        } else {
            total.merge(perft_detailed(&generated.game_after_move, depth - 1));
        }
    }
    total
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_legal_moves(game_state)
        .into_iter()
        .map(|generated| (generated.mv, perft(&generated.game_after_move, depth - 1)))
        .collect()
}

fn tally_leaf(mv: &Move, after: &GameState, counts: &mut PerftCounts) {
    counts.nodes += 1;
    if mv.is_capture() {
        counts.captures += 1;
    }
    if mv.capture_square() != mv.to {
        counts.en_passant += 1;
    }
    if mv.is_castle() {
        counts.castles += 1;
    }
    if mv.is_promotion() {
        counts.promotions += 1;
    }
    if is_king_in_check(after, after.side_to_move) {
        counts.checks += 1;
        if !has_legal_move(after) {
            counts.checkmates += 1;
        }
    }
}

//! Move ordering for alpha-beta pruning.
//!
//! Captures (most valuable victim, then least valuable attacker) and
//! promotions are tried before quiet moves. The sort is stable, so equal keys
//! keep generation order and the search stays deterministic.

use std::cmp::Reverse;

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::MaterialScorer;

const TACTICAL_BASE: i32 = 100_000;

#[inline]
fn attacker_rank(kind: PieceKind) -> i32 {
    kind.index() as i32 + 1
}

/// Higher keys are searched first; quiet moves score zero.
pub fn ordering_key(mv: &Move) -> i32 {
    let mut key = 0;
    if let Some(victim) = mv.captured_piece {
        key += TACTICAL_BASE + MaterialScorer::piece_value(victim) * 10 - attacker_rank(mv.moved_piece);
    }
    if let Some(promotion) = mv.promotion {
        key += TACTICAL_BASE + MaterialScorer::piece_value(promotion);
    }
    key
}

/// Sort anything that carries a move, best candidates first.
pub fn order_moves_by<T>(items: &mut [T], move_of: impl Fn(&T) -> &Move) {
    items.sort_by_key(|item| Reverse(ordering_key(move_of(item))));
}

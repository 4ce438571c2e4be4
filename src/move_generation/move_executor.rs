//! Move validation, disambiguation, and execution on the live board.
//!
//! A UI gesture only knows a start and a target square. `match_candidate`
//! maps that pair onto the generated legal moves; when several moves share
//! the pair (promotion choice) all of them are returned and the caller picks
//! one through `resolve_candidate`.

use log::trace;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_generator::legal_moves_from;
use crate::moves::chess_move::Move;

/// Outcome of matching a bare from/to pair against the legal moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateMatch {
    NoMatch,
    Unique(Move),
    /// Same squares, different promotion piece.
    Ambiguous(Vec<Move>),
}

/// Whether `mv` is exactly one of the legal moves of the current position.
pub fn is_legal(game_state: &GameState, mv: &Move) -> bool {
    legal_moves_from(game_state, mv.from).contains(mv)
}

pub fn match_candidate(game_state: &GameState, from: Square, to: Square) -> CandidateMatch {
    let mut matching: Vec<Move> = legal_moves_from(game_state, from)
        .into_iter()
        .filter(|mv| mv.to == to)
        .collect();

    match matching.len() {
        0 => CandidateMatch::NoMatch,
        1 => CandidateMatch::Unique(matching.remove(0)),
        _ => CandidateMatch::Ambiguous(matching),
    }
}

/// Pick the legal move for `from`/`to` with an explicit promotion choice.
///
/// `promotion` must be `Some` exactly when the move promotes; a missing or
/// superfluous choice yields `None`.
pub fn resolve_candidate(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> Option<Move> {
    legal_moves_from(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to && mv.promotion == promotion)
}

/// Validate and apply `mv` in place. On error the board is untouched.
pub fn execute(game_state: &mut GameState, mv: &Move) -> ChessResult<Move> {
    if !is_legal(game_state, mv) {
        return Err(ChessError::IllegalMove {
            from: mv.from,
            to: mv.to,
        });
    }

    apply_move_in_place(game_state, mv);
    game_state.record_position();
    trace!("executed {mv}; fen now {}", game_state.get_fen());
    Ok(*mv)
}

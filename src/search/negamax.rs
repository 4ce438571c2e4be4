//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! Scores are always relative to the side to move; each ply negates the child
//! score and swaps the window. The search is deterministic: no randomness,
//! no clock-based cutoffs, and ties keep the first move in ordered position.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_result::draw_reason;
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, GeneratedMove};
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};
use crate::search::move_ordering::order_moves_by;

const INFINITY: i32 = MATE_SCORE + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub best_score: i32,
    pub depth: u8,
    pub nodes: u64,
    pub elapsed_ms: i64,
}

struct SearchContext<'a, S: ?Sized> {
    scorer: &'a S,
    stop: &'a AtomicBool,
    nodes: u64,
}

/// Best move for `color` searching `depth` plies. A depth of 0 searches one.
pub fn select_move<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    color: Color,
    depth: u8,
    scorer: &S,
) -> ChessResult<SearchResult> {
    let never_stop = AtomicBool::new(false);
    select_move_with_stop(game_state, color, depth, scorer, &never_stop)
}

/// Like `select_move`, but aborts with `SearchCancelled` once `stop` is set.
pub fn select_move_with_stop<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    color: Color,
    depth: u8,
    scorer: &S,
    stop: &AtomicBool,
) -> ChessResult<SearchResult> {
    if game_state.side_to_move != color {
        return Err(ChessError::IllegalState(format!(
            "asked to search for {color:?} but {:?} is to move",
            game_state.side_to_move
        )));
    }

    let mut root_moves = generate_legal_moves(game_state);
    if root_moves.is_empty() {
        return Err(ChessError::IllegalState(
            "cannot search a position without legal moves".to_owned(),
        ));
    }
    order_moves_by(&mut root_moves, |generated: &GeneratedMove| &generated.mv);

    let depth = depth.max(1);
    let started = Utc::now();
    let mut ctx = SearchContext {
        scorer,
        stop,
        nodes: 1,
    };

    let mut alpha = -INFINITY;
    let beta = INFINITY;
    let mut best: Option<(Move, i32)> = None;

    for generated in &root_moves {
        let score = -negamax(&generated.game_after_move, depth - 1, -beta, -alpha, 1, &mut ctx)?;

        // Strict improvement only: the earliest move keeps a tied score.
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((generated.mv, score));
        }
        alpha = alpha.max(score);
    }

    let Some((best_move, best_score)) = best else {
        return Err(ChessError::IllegalState("search produced no move".to_owned()));
    };

    let elapsed_ms = (Utc::now() - started).num_milliseconds();
    debug!(
        "search depth {depth} nodes {} score {best_score} best {best_move} in {elapsed_ms} ms",
        ctx.nodes
    );

    Ok(SearchResult {
        best_move,
        best_score,
        depth,
        nodes: ctx.nodes,
        elapsed_ms,
    })
}

fn negamax<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    ctx: &mut SearchContext<'_, S>,
) -> ChessResult<i32> {
    if ctx.stop.load(Ordering::Relaxed) {
        return Err(ChessError::SearchCancelled);
    }
    ctx.nodes += 1;

    let mut moves = generate_legal_moves(game_state);
    if moves.is_empty() {
        return Ok(terminal_score(game_state, ply));
    }
    if draw_reason(game_state).is_some() {
        return Ok(0);
    }
    if depth == 0 {
        return Ok(ctx.scorer.score(game_state));
    }

    order_moves_by(&mut moves, |generated: &GeneratedMove| &generated.mv);
    let mut best = -INFINITY;

    for generated in &moves {
        let score = -negamax(&generated.game_after_move, depth - 1, -beta, -alpha, ply + 1, ctx)?;

        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}

/// Score for a side with no legal moves: mated or stalemated.
fn terminal_score(game_state: &GameState, ply: u8) -> i32 {
    if is_king_in_check(game_state, game_state.side_to_move) {
        -(MATE_SCORE - i32::from(ply))
    } else {
        0
    }
}

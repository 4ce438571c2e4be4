//! Engine abstraction layer used by the game session.
//!
//! Defines common input parameters and output payloads so different computer
//! players can be selected at runtime behind a single trait interface.

use std::sync::{atomic::AtomicBool, Arc};

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub depth: u8,
    /// Raised by the owner to abandon a running search.
    pub stop: Option<Arc<AtomicBool>>,
}

impl SearchParams {
    pub fn with_depth(depth: u8) -> Self {
        Self { depth, stop: None }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput>;
}

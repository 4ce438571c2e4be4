//! Default computer player: fixed-depth negamax with the standard scorer.

use std::sync::atomic::AtomicBool;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, StandardScorer};
use crate::search::negamax::select_move_with_stop;

pub struct NegamaxEngine<S: BoardScorer = StandardScorer> {
    scorer: S,
}

impl NegamaxEngine<StandardScorer> {
    pub fn new() -> Self {
        Self {
            scorer: StandardScorer,
        }
    }
}

impl Default for NegamaxEngine<StandardScorer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BoardScorer> NegamaxEngine<S> {
    pub fn with_scorer(scorer: S) -> Self {
        Self { scorer }
    }
}

impl<S: BoardScorer> Engine for NegamaxEngine<S> {
    fn name(&self) -> &str {
        "Negamax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let never_stop = AtomicBool::new(false);
        let stop = params.stop.as_deref().unwrap_or(&never_stop);

        let result = select_move_with_stop(
            game_state,
            game_state.side_to_move,
            params.depth,
            &self.scorer,
            stop,
        )?;

        Ok(EngineOutput {
            best_move: Some(result.best_move),
            score: Some(result.best_score),
            info_lines: vec![format!(
                "negamax depth {} nodes {} score {} time_ms {}",
                result.depth, result.nodes, result.best_score, result.elapsed_ms
            )],
        })
    }
}

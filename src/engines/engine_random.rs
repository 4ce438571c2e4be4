//! Lowest-difficulty engine: a uniformly random legal move.
//!
//! Seedable so tests and reproducible sessions can replay the same choices.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &SearchParams,
    ) -> ChessResult<EngineOutput> {
        let moves = legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", moves.len()));

        let picked = moves.as_slice().choose(&mut self.rng).ok_or_else(|| {
            ChessError::IllegalState("cannot pick a move in a position without legal moves".to_owned())
        })?;

        out.best_move = Some(*picked);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, SearchParams};
    use crate::errors::ChessError;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::move_executor::is_legal;

    #[test]
    fn picks_a_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::with_seed(7);
        for _ in 0..10 {
            let out = engine
                .choose_move(&game, &SearchParams::default())
                .expect("start position has moves");
            let mv = out.best_move.expect("move chosen");
            assert!(is_legal(&game, &mv));
        }
    }

    #[test]
    fn same_seed_replays_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::with_seed(42);
        let mut b = RandomEngine::with_seed(42);
        for _ in 0..5 {
            let pa = a.choose_move(&game, &SearchParams::default()).expect("move");
            let pb = b.choose_move(&game, &SearchParams::default()).expect("move");
            assert_eq!(pa.best_move, pb.best_move);
        }
    }

    #[test]
    fn finished_game_is_an_error() {
        let mated =
            GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("FEN parse");
        let err = RandomEngine::with_seed(1)
            .choose_move(&mated, &SearchParams::default())
            .expect_err("no legal moves");
        assert!(matches!(err, ChessError::IllegalState(_)));
    }
}

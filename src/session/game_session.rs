//! A game in progress, as seen by the user interface.
//!
//! `GameSession` owns the live board and is its only mutator. Human moves go
//! through `submit_gesture`/`execute`; the computer's move is searched on a
//! worker thread over a snapshot and applied here once it reports back.

use log::{debug, info, warn};

use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::game_result::{classify, GameResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator;
use crate::move_generation::move_executor::{self, match_candidate, resolve_candidate, CandidateMatch};
use crate::moves::chess_move::Move;
use crate::search::search_worker::{PendingSearch, SearchPoll};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    PlayerVsPlayer,
    PlayerVsComputer { computer: Color, depth: u8 },
}

impl GameMode {
    #[inline]
    pub fn computer_color(self) -> Option<Color> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsComputer { computer, .. } => Some(computer),
        }
    }
}

/// What happened to a from/to gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveSubmission {
    Applied { mv: Move, result: GameResult },
    /// The squares name a promotion; resubmit with one of these pieces.
    NeedsPromotionChoice(Vec<Move>),
    Rejected,
}

pub struct GameSession {
    game: GameState,
    mode: GameMode,
    initial_fen: String,
    history: Vec<Move>,
    epoch: u64,
    engine: Option<Box<dyn Engine>>,
    engine_name: String,
    pending: Option<PendingSearch>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_engine(mode, Box::new(NegamaxEngine::new()))
    }

    pub fn with_engine(mode: GameMode, engine: Box<dyn Engine>) -> Self {
        info!("new game, mode {mode:?}, computer player {}", engine.name());
        Self {
            game: GameState::new_game(),
            mode,
            initial_fen: STARTING_POSITION_FEN.to_owned(),
            history: Vec::new(),
            epoch: 0,
            engine_name: engine.name().to_owned(),
            engine: Some(engine),
            pending: None,
        }
    }

    pub fn from_fen(mode: GameMode, fen: &str) -> ChessResult<Self> {
        let game = GameState::from_fen(fen)?;
        let mut session = Self::new(mode);
        session.initial_fen = game.get_fen();
        session.game = game;
        info!("position set up from FEN {}", session.initial_fen);
        Ok(session)
    }

    /// Start over from the standard position, keeping mode and engine.
    pub fn reset(&mut self) {
        self.cancel_search();
        self.game = GameState::new_game();
        self.initial_fen = STARTING_POSITION_FEN.to_owned();
        self.history.clear();
        self.epoch += 1;
        if let Some(engine) = self.engine.as_mut() {
            engine.new_game();
        }
        info!("game reset to the starting position");
    }

    /// Replace the engine, e.g. to change difficulty between games.
    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        self.cancel_search();
        self.engine_name = engine.name().to_owned();
        self.engine = Some(engine);
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[inline]
    pub fn initial_fen(&self) -> &str {
        &self.initial_fen
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Name of the engine playing the computer side.
    #[inline]
    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    /// Advances on every board change; search results from older epochs are stale.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn arrangement(&self) -> [Option<Piece>; 64] {
        self.game.arrangement()
    }

    pub fn color_to_move(&self) -> Color {
        self.game.side_to_move
    }

    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        legal_move_generator::legal_moves_from(&self.game, square)
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        move_executor::is_legal(&self.game, mv)
    }

    pub fn classify(&self) -> GameResult {
        classify(&self.game)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode.computer_color() == Some(self.game.side_to_move)
    }

    pub fn is_search_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply a validated move to the live board.
    pub fn execute(&mut self, mv: &Move) -> ChessResult<GameResult> {
        if self.classify().is_terminal() {
            return Err(ChessError::IllegalState("the game is already over".to_owned()));
        }

        let mover = self.game.side_to_move;
        move_executor::execute(&mut self.game, mv)?;
        // Only an applied move invalidates a running search.
        self.cancel_search();
        self.history.push(*mv);
        self.epoch += 1;

        let result = self.classify();
        info!("{mover:?} played {mv} -> {result:?}");
        if result.is_terminal() {
            info!("game over after {} moves: {result:?}", self.history.len());
        }
        Ok(result)
    }

    /// Drag or click-click from `from` to `to`, with an optional promotion
    /// piece for the follow-up after `NeedsPromotionChoice`.
    pub fn submit_gesture(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> MoveSubmission {
        if self.is_computer_turn() {
            warn!("gesture {from}->{to} rejected: computer to move");
            return MoveSubmission::Rejected;
        }

        let mv = match match_candidate(&self.game, from, to) {
            CandidateMatch::NoMatch => {
                warn!("gesture {from}->{to} rejected: no legal move");
                return MoveSubmission::Rejected;
            }
            CandidateMatch::Unique(mv) => mv,
            CandidateMatch::Ambiguous(options) => {
                match resolve_candidate(&self.game, from, to, promotion) {
                    Some(mv) => mv,
                    None if promotion.is_none() => {
                        return MoveSubmission::NeedsPromotionChoice(options)
                    }
                    None => {
                        warn!("gesture {from}->{to} rejected: bad promotion {promotion:?}");
                        return MoveSubmission::Rejected;
                    }
                }
            }
        };

        match self.execute(&mv) {
            Ok(result) => MoveSubmission::Applied { mv, result },
            Err(err) => {
                warn!("gesture {from}->{to} rejected: {err}");
                MoveSubmission::Rejected
            }
        }
    }

    /// Start searching the computer's move in the background.
    pub fn start_computer_search(&mut self) -> ChessResult<()> {
        let GameMode::PlayerVsComputer { depth, .. } = self.mode else {
            return Err(ChessError::IllegalState(
                "no computer player in this game".to_owned(),
            ));
        };
        if !self.is_computer_turn() {
            return Err(ChessError::IllegalState("it is not the computer's turn".to_owned()));
        }
        if self.classify().is_terminal() {
            return Err(ChessError::IllegalState("the game is already over".to_owned()));
        }
        if self.pending.as_ref().is_some_and(|p| p.epoch() == self.epoch) {
            return Ok(());
        }
        self.cancel_search();

        let engine = self.take_engine();
        self.pending = Some(PendingSearch::spawn(engine, self.game.clone(), depth, self.epoch));
        Ok(())
    }

    /// The computer's move if its search has finished; `None` while pending
    /// or when no search is running.
    pub fn poll_computer_move(&mut self) -> ChessResult<Option<(Move, GameResult)>> {
        let Some(pending) = self.pending.as_ref() else {
            return Ok(None);
        };
        let poll = pending.try_finish();
        if matches!(poll, SearchPoll::Pending) {
            return Ok(None);
        }
        self.pending = None;
        self.finish_search(poll)
    }

    /// Block until the computer has moved, starting the search if needed.
    pub fn wait_for_computer_move(&mut self) -> ChessResult<(Move, GameResult)> {
        self.start_computer_search()?;
        let Some(pending) = self.pending.take() else {
            return Err(ChessError::IllegalState("no search running".to_owned()));
        };
        self.finish_search(pending.wait())?
            .ok_or_else(|| ChessError::IllegalState("search result was stale".to_owned()))
    }

    fn finish_search(&mut self, poll: SearchPoll) -> ChessResult<Option<(Move, GameResult)>> {
        let outcome = match poll {
            SearchPoll::Pending => return Ok(None),
            SearchPoll::Lost => {
                self.replace_lost_engine();
                return Err(ChessError::IllegalState(
                    "search worker terminated without a result".to_owned(),
                ));
            }
            SearchPoll::Finished(engine, outcome) => {
                self.engine = Some(engine);
                outcome
            }
        };

        if outcome.epoch != self.epoch {
            warn!(
                "discarding search result for epoch {} (now {})",
                outcome.epoch, self.epoch
            );
            return Ok(None);
        }

        let output = outcome.result?;
        for line in &output.info_lines {
            debug!("{line}");
        }
        let mv = output
            .best_move
            .ok_or_else(|| ChessError::IllegalState("engine returned no move".to_owned()))?;
        let result = self.execute(&mv)?;
        Ok(Some((mv, result)))
    }

    fn cancel_search(&mut self) {
        let Some(pending) = self.pending.take() else {
            return;
        };
        if let SearchPoll::Finished(engine, outcome) = pending.cancel() {
            self.engine = Some(engine);
            warn!("abandoned search for epoch {} (now {})", outcome.epoch, self.epoch);
        } else {
            self.replace_lost_engine();
        }
    }

    fn replace_lost_engine(&mut self) {
        warn!(
            "{} engine was lost with its search worker; falling back to Negamax",
            self.engine_name
        );
        let engine = NegamaxEngine::new();
        self.engine_name = engine.name().to_owned();
        self.engine = Some(Box::new(engine));
    }

    fn take_engine(&mut self) -> Box<dyn Engine> {
        self.engine
            .take()
            .unwrap_or_else(|| Box::new(NegamaxEngine::new()))
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            let _ = pending.cancel();
        }
    }
}

//! Background search on a worker thread.
//!
//! The worker owns a snapshot of the position and the engine for the
//! duration of the search and hands the engine back together with the
//! outcome over a single-value channel. Each search is tagged with the
//! position epoch it was started for so the owner can discard stale results.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    mpsc::{channel, Receiver, TryRecvError},
    Arc,
};
use std::thread;

use log::debug;

use crate::engines::engine_trait::{Engine, EngineOutput, SearchParams};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;

pub struct SearchOutcome {
    pub epoch: u64,
    pub result: ChessResult<EngineOutput>,
}

pub enum SearchPoll {
    Pending,
    Finished(Box<dyn Engine>, SearchOutcome),
    /// The worker died without reporting; its engine is gone.
    Lost,
}

pub struct PendingSearch {
    epoch: u64,
    stop: Arc<AtomicBool>,
    receiver: Receiver<(Box<dyn Engine>, SearchOutcome)>,
}

impl PendingSearch {
    pub fn spawn(mut engine: Box<dyn Engine>, snapshot: GameState, depth: u8, epoch: u64) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (tx, rx) = channel();
        let params = SearchParams {
            depth,
            stop: Some(Arc::clone(&stop)),
        };

        debug!("spawning {} search at depth {depth} for epoch {epoch}", engine.name());
        thread::spawn(move || {
            let result = engine.choose_move(&snapshot, &params);
            // The owner may have gone away; nothing to do then.
            let _ = tx.send((engine, SearchOutcome { epoch, result }));
        });

        Self {
            epoch,
            stop,
            receiver: rx,
        }
    }

    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn try_finish(&self) -> SearchPoll {
        match self.receiver.try_recv() {
            Ok((engine, outcome)) => SearchPoll::Finished(engine, outcome),
            Err(TryRecvError::Empty) => SearchPoll::Pending,
            Err(TryRecvError::Disconnected) => SearchPoll::Lost,
        }
    }

    /// Block until the worker reports.
    pub fn wait(self) -> SearchPoll {
        match self.receiver.recv() {
            Ok((engine, outcome)) => SearchPoll::Finished(engine, outcome),
            Err(_) => SearchPoll::Lost,
        }
    }

    /// Raise the stop flag and reclaim the engine once the worker unwinds.
    pub fn cancel(self) -> SearchPoll {
        self.stop.store(true, Ordering::Relaxed);
        self.wait()
    }
}

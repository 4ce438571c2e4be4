//! Error types shared by the rules engine, search, and session layers.
//!
//! Routine rejections (an illegal click, a drag onto a blocked square) are not
//! errors; they surface as `false`/`None` from the query APIs. The variants here
//! cover malformed input and contract violations by the caller.

use thiserror::Error;

use crate::game_state::chess_types::Square;

#[derive(Error, Debug)]
pub enum ChessError {
    /// Square index outside `0..=63`, including the `-1` off-board sentinel.
    #[error("invalid square index: {0} (must be 0-63)")]
    InvalidSquare(i64),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// The move is not in the legal-move set of the current position.
    #[error("illegal move from square {from} to square {to}")]
    IllegalMove { from: Square, to: Square },

    /// The caller broke an API contract (e.g. searching a finished game).
    #[error("illegal state: {0}")]
    IllegalState(String),

    #[error("search cancelled")]
    SearchCancelled,

    #[error("malformed save file: {0}")]
    SaveFile(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessError>;

//! Line-based save files for resuming a game.
//!
//! ```text
//! saved_at: 2026-10-18T09:30:00+00:00
//! mode: computer-black
//! depth: 3
//! initial_fen: rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
//! moves: e2e4 c7c5
//! ```
//!
//! The moves are replayed on load so the repetition history survives.

use std::fs;
use std::path::Path;

use chrono::{DateTime, FixedOffset, Utc};
use log::info;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::Color, game_state::GameState};
use crate::move_generation::move_executor;
use crate::session::game_session::{GameMode, GameSession, DEFAULT_SEARCH_DEPTH};
use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

#[derive(Debug, Clone)]
pub struct SavedGame {
    pub saved_at: DateTime<FixedOffset>,
    pub mode: GameMode,
    pub initial_fen: String,
    /// Long algebraic, in play order from `initial_fen`.
    pub moves: Vec<String>,
    /// The position after replaying `moves`.
    pub game_state: GameState,
}

impl SavedGame {
    pub fn capture(session: &GameSession) -> Self {
        Self {
            saved_at: Utc::now().fixed_offset(),
            mode: session.mode(),
            initial_fen: session.initial_fen().to_owned(),
            moves: session.history().iter().map(move_to_long_algebraic).collect(),
            game_state: session.game_state().clone(),
        }
    }

    pub fn to_text(&self) -> String {
        let (mode, depth) = match self.mode {
            GameMode::PlayerVsPlayer => ("pvp", DEFAULT_SEARCH_DEPTH),
            GameMode::PlayerVsComputer {
                computer: Color::White,
                depth,
            } => ("computer-white", depth),
            GameMode::PlayerVsComputer {
                computer: Color::Black,
                depth,
            } => ("computer-black", depth),
        };

        format!(
            "saved_at: {}\nmode: {mode}\ndepth: {depth}\ninitial_fen: {}\nmoves: {}\n",
            self.saved_at.to_rfc3339(),
            self.initial_fen,
            self.moves.join(" ")
        )
    }

    pub fn parse(text: &str) -> ChessResult<Self> {
        let mut saved_at = None;
        let mut mode = None;
        let mut depth = None;
        let mut initial_fen = None;
        let mut moves = None;

        for (line_no, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once(':').ok_or_else(|| {
                ChessError::SaveFile(format!("line {}: expected `key: value`", line_no + 1))
            })?;
            let value = value.trim();

            let slot = match key.trim() {
                "saved_at" => &mut saved_at,
                "mode" => &mut mode,
                "depth" => &mut depth,
                "initial_fen" => &mut initial_fen,
                "moves" => &mut moves,
                other => {
                    return Err(ChessError::SaveFile(format!(
                        "line {}: unknown key `{other}`",
                        line_no + 1
                    )))
                }
            };
            if slot.replace(value).is_some() {
                return Err(ChessError::SaveFile(format!(
                    "line {}: duplicate key `{}`",
                    line_no + 1,
                    key.trim()
                )));
            }
        }

        let saved_at = DateTime::parse_from_rfc3339(required(saved_at, "saved_at")?)
            .map_err(|e| ChessError::SaveFile(format!("bad saved_at: {e}")))?;

        let depth_text = required(depth, "depth")?;
        let depth: u8 = depth_text
            .parse()
            .map_err(|_| ChessError::SaveFile(format!("bad depth `{depth_text}`")))?;

        let mode = match required(mode, "mode")? {
            "pvp" => GameMode::PlayerVsPlayer,
            "computer-white" => GameMode::PlayerVsComputer {
                computer: Color::White,
                depth,
            },
            "computer-black" => GameMode::PlayerVsComputer {
                computer: Color::Black,
                depth,
            },
            other => return Err(ChessError::SaveFile(format!("unknown mode `{other}`"))),
        };

        let initial_fen = required(initial_fen, "initial_fen")?;
        let moves: Vec<String> = moves
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_owned)
            .collect();

        let mut game_state = GameState::from_fen(initial_fen)?;
        for (ply, text) in moves.iter().enumerate() {
            let mv = long_algebraic_to_move(text, &game_state).map_err(|e| {
                ChessError::SaveFile(format!("move {} `{text}`: {e}", ply + 1))
            })?;
            move_executor::execute(&mut game_state, &mv)?;
        }

        Ok(Self {
            saved_at,
            mode,
            initial_fen: initial_fen.to_owned(),
            moves,
            game_state,
        })
    }
}

fn required<'a>(value: Option<&'a str>, key: &str) -> ChessResult<&'a str> {
    value.ok_or_else(|| ChessError::SaveFile(format!("missing `{key}`")))
}

pub fn save_session(session: &GameSession, path: &Path) -> ChessResult<SavedGame> {
    let saved = SavedGame::capture(session);
    fs::write(path, saved.to_text())?;
    info!("saved game to {}", path.display());
    Ok(saved)
}

pub fn load_session(path: &Path) -> ChessResult<GameSession> {
    let text = fs::read_to_string(path)?;
    let saved = SavedGame::parse(&text)?;
    info!(
        "loaded game from {} (saved {})",
        path.display(),
        saved.saved_at.to_rfc3339()
    );
    let mut session = GameSession::from_fen(saved.mode, &saved.initial_fen)?;
    for text in &saved.moves {
        let mv = long_algebraic_to_move(text, session.game_state())?;
        session.execute(&mv)?;
    }
    Ok(session)
}

//! Zobrist position keys used for repetition detection.
//!
//! A key covers piece placement, side to move, castling rights, and the
//! en-passant target. Tables come from a fixed-seed RNG so keys are identical
//! across runs, which keeps repetition tests and saved games reproducible.

use std::sync::OnceLock;

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::game_state::{chess_types::*, game_state::GameState};

const ZOBRIST_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant: [u64; 64],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut rng = StdRng::seed_from_u64(ZOBRIST_SEED);

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = rng.random();
            }
        }
    }

    let side_to_move = rng.random();

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = rng.random();
    }

    let mut en_passant = [0u64; 64];
    for key in &mut en_passant {
        *key = rng.random();
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant,
    }
}

pub fn compute_position_key(game_state: &GameState) -> u64 {
    let t = tables();
    let mut key = 0u64;

    for placed in game_state.pieces() {
        let piece = placed.piece;
        key ^= t.piece_square[piece.color.index()][piece.kind.index()][placed.square as usize];
    }

    if game_state.side_to_move == Color::Black {
        key ^= t.side_to_move;
    }

    key ^= t.castling[(game_state.castling_rights & 0x0F) as usize];

    if let Some(ep) = game_state.en_passant_square {
        key ^= t.en_passant[(ep & 0x3F) as usize];
    }

    key
}

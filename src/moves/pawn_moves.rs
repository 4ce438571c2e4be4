//! Pawn capture patterns.
//!
//! Pushes depend on occupancy and are produced by the generator; only the
//! diagonal attack squares are tabulated here.

use crate::game_state::chess_types::Color;
use crate::moves::step_tables::bit_if_on_board;

pub const WHITE_PAWN_ATTACKS: [u64; 64] = build_pawn_table(1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = build_pawn_table(-1);

#[inline]
pub const fn pawn_attacks(color: Color, square: u8) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square as usize],
        Color::Black => BLACK_PAWN_ATTACKS[square as usize],
    }
}

/// Signed square delta of a single push for `color`.
#[inline]
pub const fn pawn_push_delta(color: Color) -> i8 {
    match color {
        Color::White => 8,
        Color::Black => -8,
    }
}

const fn build_pawn_table(rank_step: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        table[sq] = bit_if_on_board(file - 1, rank + rank_step)
            | bit_if_on_board(file + 1, rank + rank_step);
        sq += 1;
    }

    table
}

//! Per-kind attack dispatch.
//!
//! One match over `PieceKind` maps a piece on a square to the squares it
//! attacks given the board occupancy. Pawn pushes and castling are not
//! attacks and are handled by the generator.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, queen_attacks, rook_attacks};
use crate::moves::step_tables::{king_attacks, knight_attacks};

#[inline]
pub fn attacks_from(piece: Piece, square: Square, occupancy: u64) -> u64 {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, square),
        PieceKind::Knight => knight_attacks(square),
        PieceKind::Bishop => bishop_attacks(square, occupancy),
        PieceKind::Rook => rook_attacks(square, occupancy),
        PieceKind::Queen => queen_attacks(square, occupancy),
        PieceKind::King => king_attacks(square),
    }
}

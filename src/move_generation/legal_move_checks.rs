//! Attack and check detection.
//!
//! `is_square_attacked` is the single attack oracle shared by the legality
//! filter, castling validation, and the game-state classifier. It only looks
//! at capture patterns: pawn pushes and castling never attack.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::sliding_moves::{bishop_attacks, rook_attacks};
use crate::moves::step_tables::{king_attacks, knight_attacks};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king_sq) = game_state.king_square(color) else {
        return false;
    };
    is_square_attacked(game_state, king_sq, color.opposite())
}

/// Whether any piece of `attacker_color` attacks `square`.
///
/// Works backwards from the target: a knight of the attacker attacks the
/// square exactly when a knight standing on the square would attack it, and
/// likewise for the other kinds. Pawns use the defender's capture pattern.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    if square > 63 {
        return false;
    }

    let attackers = game_state.occupancy_by_color[attacker_color.index()];
    if attackers == 0 {
        return false;
    }
    let occupancy = game_state.occupancy_all;

    let has = |kinds: &[PieceKind], candidates: u64| -> bool {
        let mut bb = candidates & attackers;
        while bb != 0 {
            let sq = bb.trailing_zeros() as Square;
            if let Some(piece) = game_state.piece_at(sq) {
                if kinds.contains(&piece.kind) {
                    return true;
                }
            }
            bb &= bb - 1;
        }
        false
    };

    has(
        &[PieceKind::Pawn],
        pawn_attacks(attacker_color.opposite(), square),
    ) || has(&[PieceKind::Knight], knight_attacks(square))
        || has(&[PieceKind::King], king_attacks(square))
        || has(
            &[PieceKind::Bishop, PieceKind::Queen],
            bishop_attacks(square, occupancy),
        )
        || has(
            &[PieceKind::Rook, PieceKind::Queen],
            rook_attacks(square, occupancy),
        )
}

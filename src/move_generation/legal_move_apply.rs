//! Move application.
//!
//! `apply_move_in_place` performs every board update a move implies. It does
//! not check legality; callers either generated the move themselves or went
//! through the executor's validation first.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::{Move, MoveKind};

/// Scratch copy of `game_state` with `mv` applied. History is not carried.
pub fn apply_move(game_state: &GameState, mv: &Move) -> GameState {
    let mut next = game_state.scratch_copy();
    apply_move_in_place(&mut next, mv);
    next
}

pub(crate) fn apply_move_in_place(game_state: &mut GameState, mv: &Move) {
    let moving_color = game_state.side_to_move;

    if mv.is_capture() {
        game_state.remove_piece(mv.capture_square());
    }

    game_state.remove_piece(mv.from);
    let placed_kind = mv.promotion.unwrap_or(mv.moved_piece);
    game_state.put_piece(mv.to, Piece::new(moving_color, placed_kind));

    if let Some((rook_from, rook_to)) = castling_rook_squares(mv) {
        if let Some(rook) = game_state.remove_piece(rook_from) {
            game_state.put_piece(rook_to, rook);
        }
    }

    update_castling_rights(game_state, mv);

    game_state.en_passant_square = if mv.is_double_pawn_push() {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    if mv.moved_piece == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = moving_color.opposite();
}

/// Rook origin and destination for a castling move.
pub(crate) fn castling_rook_squares(mv: &Move) -> Option<(Square, Square)> {
    // Rook squares are relative to the king's home on e1/e8.
    let back_rank = mv.from - mv.from % 8;
    match mv.kind {
        MoveKind::CastleKingside => Some((back_rank + 7, back_rank + 5)),
        MoveKind::CastleQueenside => Some((back_rank, back_rank + 3)),
        _ => None,
    }
}

fn update_castling_rights(game_state: &mut GameState, mv: &Move) {
    let mut revoked: CastlingRights = 0;

    if mv.moved_piece == PieceKind::King {
        revoked |= match game_state.side_to_move {
            Color::White => CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE,
            Color::Black => CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE,
        };
    }

    // A rook leaving, or being captured on, its home square.
    for square in [mv.from, mv.to] {
        revoked |= match square {
            0 => CASTLE_WHITE_QUEENSIDE,
            7 => CASTLE_WHITE_KINGSIDE,
            56 => CASTLE_BLACK_QUEENSIDE,
            63 => CASTLE_BLACK_KINGSIDE,
            _ => 0,
        };
    }

    game_state.castling_rights &= !revoked;
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::game_state::chess_types::*;
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::{Move, MoveKind};

    #[test]
    fn double_push_sets_en_passant_and_resets_clock() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 7 1").expect("FEN parse");
        let mv = Move::new(12, 28, PieceKind::Pawn, None, None, MoveKind::Normal);
        let next = apply_move(&game, &mv);

        assert_eq!(next.en_passant_square, Some(20));
        assert_eq!(next.halfmove_clock, 0);
        assert_eq!(next.fullmove_number, 1);
        assert_eq!(next.side_to_move, Color::Black);
        assert!(next.repetition_history.is_empty());
    }

    #[test]
    fn castling_moves_rook_and_clears_both_rights() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 9").expect("FEN parse");
        let mv = Move::new(4, 2, PieceKind::King, None, None, MoveKind::CastleQueenside);
        let next = apply_move(&game, &mv);

        assert_eq!(next.piece_at(2), Some(Piece::new(Color::White, PieceKind::King)));
        assert_eq!(next.piece_at(3), Some(Piece::new(Color::White, PieceKind::Rook)));
        assert_eq!(next.piece_at(0), None);
        assert_eq!(next.castling_rights, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
        assert_eq!(next.halfmove_clock, 4);
    }

    #[test]
    fn capturing_a_home_rook_revokes_the_opponent_right() {
        let game = GameState::from_fen("r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1").expect("FEN parse");
        // Bg2xa8 along the long diagonal.
        let mv = Move::new(14, 56, PieceKind::Bishop, Some(PieceKind::Rook), None, MoveKind::Normal);
        let next = apply_move(&game, &mv);

        assert_eq!(next.castling_rights & CASTLE_BLACK_QUEENSIDE, 0);
        assert_ne!(next.castling_rights & CASTLE_BLACK_KINGSIDE, 0);
        assert_eq!(next.halfmove_clock, 0);
    }

    #[test]
    fn promotion_places_chosen_piece() {
        let game = GameState::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        let mv = Move::new(48, 56, PieceKind::Pawn, None, Some(PieceKind::Knight), MoveKind::Promotion);
        let next = apply_move(&game, &mv);
        assert_eq!(next.piece_at(56), Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(next.piece_at(48), None);
    }
}

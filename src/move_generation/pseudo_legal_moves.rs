//! Pseudo-legal move generation.
//!
//! Moves obey each piece's movement pattern and the board occupancy but may
//! leave the mover's king attacked; the legal generator filters those out.
//!
//! Output order is fixed so search results are reproducible: origins in
//! ascending square index; pawns emit push, double push, lower-file capture,
//! higher-file capture, then en passant (promotions as Queen, Rook, Bishop,
//! Knight); other pieces emit targets in ascending square index; kings then
//! emit kingside before queenside castling.

use crate::game_state::chess_rules::PROMOTION_PIECES;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::chess_move::{Move, MoveKind};
use crate::moves::movement_rules::attacks_from;
use crate::moves::pawn_moves::{pawn_attacks, pawn_push_delta};

pub fn generate_pseudo_legal_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let mut own = game_state.occupancy_by_color[game_state.side_to_move.index()];
    while own != 0 {
        let from = own.trailing_zeros() as Square;
        generate_pseudo_legal_moves_from(game_state, from, out);
        own &= own - 1;
    }
}

/// Pseudo-legal moves of the side to move's piece on `from`, if any.
pub fn generate_pseudo_legal_moves_from(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let Some(piece) = game_state.piece_at(from) else {
        return;
    };
    if piece.color != game_state.side_to_move {
        return;
    }

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::King => {
            generate_attack_moves(game_state, piece, from, out);
            generate_castling_moves(game_state, from, out);
        }
        _ => generate_attack_moves(game_state, piece, from, out),
    }
}

/// Knight, bishop, rook, queen, and plain king steps: every attacked square
/// not holding a friendly piece.
fn generate_attack_moves(game_state: &GameState, piece: Piece, from: Square, out: &mut Vec<Move>) {
    let own_occ = game_state.occupancy_by_color[piece.color.index()];
    let mut targets = attacks_from(piece, from, game_state.occupancy_all) & !own_occ;

    while targets != 0 {
        let to = targets.trailing_zeros() as Square;
        let captured = game_state.piece_at(to).map(|p| p.kind);
        out.push(Move::new(from, to, piece.kind, captured, None, MoveKind::Normal));
        targets &= targets - 1;
    }
}

fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let delta = pawn_push_delta(side);
    let enemy_occ = game_state.occupancy_by_color[side.opposite().index()];

    let one_step = (from as i8 + delta) as Square;
    if one_step < 64 && game_state.piece_at(one_step).is_none() {
        push_pawn_move(side, from, one_step, None, out);

        if square_rank(from) == side.pawn_start_rank() {
            let two_step = (one_step as i8 + delta) as Square;
            if game_state.piece_at(two_step).is_none() {
                out.push(Move::new(from, two_step, PieceKind::Pawn, None, None, MoveKind::Normal));
            }
        }
    }

    // Attack bits come out low square first, which is the lower file.
    let mut captures = pawn_attacks(side, from) & enemy_occ;
    while captures != 0 {
        let to = captures.trailing_zeros() as Square;
        let captured = game_state.piece_at(to).map(|p| p.kind);
        push_pawn_move(side, from, to, captured, out);
        captures &= captures - 1;
    }

    if let Some(ep) = game_state.en_passant_square {
        let victim_sq = (ep as i8 - delta) as Square;
        let victim_is_enemy_pawn =
            game_state.piece_at(victim_sq) == Some(Piece::new(side.opposite(), PieceKind::Pawn));
        if pawn_attacks(side, from) & (1u64 << ep) != 0
            && victim_is_enemy_pawn
            && game_state.piece_at(ep).is_none()
        {
            out.push(Move::new(
                from,
                ep,
                PieceKind::Pawn,
                Some(PieceKind::Pawn),
                None,
                MoveKind::EnPassant,
            ));
        }
    }
}

/// Emit a pawn move, expanding into the four promotions on the last rank.
fn push_pawn_move(
    side: Color,
    from: Square,
    to: Square,
    captured: Option<PieceKind>,
    out: &mut Vec<Move>,
) {
    if square_rank(to) == side.promotion_rank() {
        for promo in PROMOTION_PIECES {
            out.push(Move::new(from, to, PieceKind::Pawn, captured, Some(promo), MoveKind::Promotion));
        }
    } else {
        out.push(Move::new(from, to, PieceKind::Pawn, captured, None, MoveKind::Normal));
    }
}

struct CastlingPath {
    right: CastlingRights,
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    must_be_empty: u64,
    king_transit: Square,
    kind: MoveKind,
}

const CASTLING_PATHS: [CastlingPath; 4] = [
    CastlingPath {
        right: CASTLE_WHITE_KINGSIDE,
        king_from: 4,
        king_to: 6,
        rook_from: 7,
        must_be_empty: (1 << 5) | (1 << 6),
        king_transit: 5,
        kind: MoveKind::CastleKingside,
    },
    CastlingPath {
        right: CASTLE_WHITE_QUEENSIDE,
        king_from: 4,
        king_to: 2,
        rook_from: 0,
        must_be_empty: (1 << 1) | (1 << 2) | (1 << 3),
        king_transit: 3,
        kind: MoveKind::CastleQueenside,
    },
    CastlingPath {
        right: CASTLE_BLACK_KINGSIDE,
        king_from: 60,
        king_to: 62,
        rook_from: 63,
        must_be_empty: (1 << 61) | (1 << 62),
        king_transit: 61,
        kind: MoveKind::CastleKingside,
    },
    CastlingPath {
        right: CASTLE_BLACK_QUEENSIDE,
        king_from: 60,
        king_to: 58,
        rook_from: 56,
        must_be_empty: (1 << 57) | (1 << 58) | (1 << 59),
        king_transit: 59,
        kind: MoveKind::CastleQueenside,
    },
];

fn generate_castling_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = game_state.side_to_move;
    let enemy = side.opposite();
    let own_rook = Some(Piece::new(side, PieceKind::Rook));

    let mut checked_in_check = None;

    for path in &CASTLING_PATHS {
        if game_state.castling_rights & path.right == 0
            || path.king_from != king_from
            || game_state.piece_at(path.rook_from) != own_rook
            || game_state.occupancy_all & path.must_be_empty != 0
        {
            continue;
        }

        // Cannot castle out of check; computed once per call.
        let in_check = *checked_in_check
            .get_or_insert_with(|| is_square_attacked(game_state, king_from, enemy));
        if in_check {
            return;
        }

        if is_square_attacked(game_state, path.king_transit, enemy)
            || is_square_attacked(game_state, path.king_to, enemy)
        {
            continue;
        }

        out.push(Move::new(king_from, path.king_to, PieceKind::King, None, None, path.kind));
    }
}

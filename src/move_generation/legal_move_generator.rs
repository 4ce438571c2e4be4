//! Legal move generation.
//!
//! Every pseudo-legal move is applied to a scratch copy and dropped if the
//! mover's king is attacked afterwards. This one filter covers pins,
//! discovered checks, king steps into attacks, and en-passant exposures.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::pseudo_legal_moves::{
    generate_pseudo_legal_moves, generate_pseudo_legal_moves_from,
};
use crate::moves::chess_move::Move;

/// A legal move together with the position it produces.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
}

/// All legal moves for the side to move, in generation order.
pub fn legal_moves(game_state: &GameState) -> Vec<Move> {
    generate_legal_moves(game_state)
        .into_iter()
        .map(|generated| generated.mv)
        .collect()
}

/// Legal moves of the piece on `from`. Empty for an off-board square, an
/// empty square, or an opposing piece.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<Move> {
    if from > 63 {
        return Vec::new();
    }
    let mut pseudo = Vec::with_capacity(32);
    generate_pseudo_legal_moves_from(game_state, from, &mut pseudo);
    filter_legal(game_state, pseudo)
        .into_iter()
        .map(|generated| generated.mv)
        .collect()
}

/// Legal moves with their resulting positions, for callers that recurse.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<GeneratedMove> {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, &mut pseudo);
    filter_legal(game_state, pseudo)
}

/// Whether the side to move has at least one legal move.
pub fn has_legal_move(game_state: &GameState) -> bool {
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, &mut pseudo);
    let mover = game_state.side_to_move;
    pseudo
        .iter()
        .any(|mv| !is_king_in_check(&apply_move(game_state, mv), mover))
}

fn filter_legal(game_state: &GameState, pseudo: Vec<Move>) -> Vec<GeneratedMove> {
    let mover = game_state.side_to_move;
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        let next = apply_move(game_state, &mv);
        if is_king_in_check(&next, mover) {
            continue;
        }
        legal.push(GeneratedMove {
            mv,
            game_after_move: next,
        });
    }

    legal
}

#[cfg(test)]
mod tests {
    use super::{has_legal_move, legal_moves, legal_moves_from};
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::moves::chess_move::MoveKind;

    #[test]
    fn start_position_has_twenty_legal_moves() {
        assert_eq!(legal_moves(&GameState::new_game()).len(), 20);
    }

    #[test]
    fn black_has_twenty_replies_after_e4() {
        let game =
            GameState::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .expect("FEN parse");
        assert_eq!(game.side_to_move, Color::Black);
        assert_eq!(legal_moves(&game).len(), 20);
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
        ];
        for fen in fens {
            let game = GameState::from_fen(fen).expect("FEN parse");
            for mv in legal_moves(&game) {
                let next = apply_move(&game, &mv);
                assert!(
                    !is_king_in_check(&next, game.side_to_move),
                    "{mv} leaves the king attacked in {fen}"
                );
            }
        }
    }

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // White knight on e2 pinned by the rook on e8.
        let game = GameState::from_fen("4r1k1/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN parse");
        assert!(legal_moves_from(&game, 12).is_empty());
    }

    #[test]
    fn en_passant_exposing_the_king_on_the_rank_is_illegal() {
        // Taking e.p. would clear both pawns off the fifth rank.
        let game = GameState::from_fen("8/8/8/KPp4r/8/8/8/6k1 w - c6 0 1").expect("FEN parse");
        let moves = legal_moves_from(&game, 33);
        assert!(moves.iter().all(|m| m.kind != MoveKind::EnPassant));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn promotion_yields_four_distinct_moves() {
        let game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN parse");
        let moves = legal_moves_from(&game, 48);
        assert_eq!(moves.len(), 4);
        let mut promos: Vec<PieceKind> = moves.iter().filter_map(|m| m.promotion).collect();
        promos.dedup();
        assert_eq!(promos.len(), 4);
        assert!(moves.iter().all(|m| m.from == 48 && m.to == 56));
    }

    #[test]
    fn off_board_and_foreign_squares_yield_nothing() {
        let game = GameState::new_game();
        assert!(legal_moves_from(&game, 64).is_empty());
        assert!(legal_moves_from(&game, 255).is_empty());
        assert!(legal_moves_from(&game, 52).is_empty());
        assert!(legal_moves_from(&game, 28).is_empty());
    }

    #[test]
    fn has_legal_move_agrees_with_generation() {
        let mated =
            GameState::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("FEN parse");
        assert!(!has_legal_move(&mated));
        assert!(has_legal_move(&GameState::new_game()));
    }
}

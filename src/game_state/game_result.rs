//! Game-state classification.
//!
//! Results are derived on demand from the board; nothing here is stored.
//! Checkmate and stalemate take precedence over the draw rules.

use crate::game_state::chess_rules::{FIFTY_MOVE_HALFMOVES, REPETITION_DRAW_COUNT};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    FiftyMoveRule,
    InsufficientMaterial,
    ThreefoldRepetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    DrawByRule(DrawReason),
}

impl GameResult {
    /// Checkmate, stalemate, and rule draws end the game.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::Ongoing | GameResult::Check)
    }
}

pub fn classify(game_state: &GameState) -> GameResult {
    let in_check = is_king_in_check(game_state, game_state.side_to_move);

    if !has_legal_move(game_state) {
        return if in_check {
            GameResult::Checkmate
        } else {
            GameResult::Stalemate
        };
    }

    if let Some(reason) = draw_reason(game_state) {
        return GameResult::DrawByRule(reason);
    }

    if in_check {
        GameResult::Check
    } else {
        GameResult::Ongoing
    }
}

/// Draw rule in force for the position, ignoring mate and stalemate.
pub fn draw_reason(game_state: &GameState) -> Option<DrawReason> {
    if game_state.halfmove_clock >= FIFTY_MOVE_HALFMOVES {
        Some(DrawReason::FiftyMoveRule)
    } else if is_insufficient_material(game_state) {
        Some(DrawReason::InsufficientMaterial)
    } else if game_state.repetition_count() >= REPETITION_DRAW_COUNT {
        Some(DrawReason::ThreefoldRepetition)
    } else {
        None
    }
}

/// Neither side can ever deliver mate: bare kings, a single minor piece, or
/// bishops only, all on squares of one color.
pub fn is_insufficient_material(game_state: &GameState) -> bool {
    let mut minors = 0usize;
    let mut knights = 0usize;
    let mut bishop_square_colors = [false; 2];

    for placed in game_state.pieces() {
        match placed.piece.kind {
            PieceKind::King => {}
            PieceKind::Pawn | PieceKind::Rook | PieceKind::Queen => return false,
            PieceKind::Knight => {
                minors += 1;
                knights += 1;
            }
            PieceKind::Bishop => {
                minors += 1;
                let shade = ((square_file(placed.square) + square_rank(placed.square)) % 2) as usize;
                bishop_square_colors[shade] = true;
            }
        }
    }

    if minors <= 1 {
        return true;
    }
    knights == 0 && !(bishop_square_colors[0] && bishop_square_colors[1])
}

#[cfg(test)]
mod tests {
    use super::{classify, is_insufficient_material, DrawReason, GameResult};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::move_generation::move_executor::{execute, match_candidate, CandidateMatch};
    use crate::game_state::chess_types::Color;

    fn play_line(game: &mut GameState, line: &[(u8, u8)]) {
        for (from, to) in line {
            let CandidateMatch::Unique(mv) = match_candidate(game, *from, *to) else {
                panic!("expected a unique move {from}->{to}");
            };
            execute(game, &mv).expect("line move should execute");
        }
    }

    #[test]
    fn fools_mate_is_checkmate_with_white_to_move() {
        let mut game = GameState::new_game();
        // 1.f3 e5 2.g4 Qh4#
        play_line(&mut game, &[(13, 21), (52, 36), (14, 30), (59, 31)]);

        assert_eq!(game.side_to_move, Color::White);
        assert!(legal_moves(&game).is_empty());
        assert_eq!(classify(&game), GameResult::Checkmate);
        assert!(classify(&game).is_terminal());
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN parse");
        assert!(legal_moves(&game).is_empty());
        assert_eq!(classify(&game), GameResult::Stalemate);
    }

    #[test]
    fn check_is_not_terminal() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").expect("FEN parse");
        assert_eq!(classify(&game), GameResult::Ongoing);
        let game = GameState::from_fen("R3k3/8/8/8/8/8/8/4K3 b - - 0 1").expect("FEN parse");
        assert_eq!(classify(&game), GameResult::Check);
        assert!(!GameResult::Check.is_terminal());
    }

    #[test]
    fn fifty_move_rule_draws() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80").expect("FEN parse");
        assert_eq!(
            classify(&game),
            GameResult::DrawByRule(DrawReason::FiftyMoveRule)
        );
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80").expect("FEN parse");
        assert_eq!(classify(&game), GameResult::Ongoing);
    }

    #[test]
    fn insufficient_material_cases() {
        let cases = [
            ("4k3/8/8/8/8/8/8/4K3 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/4KN2 w - - 0 1", true),
            ("4k3/8/8/8/8/8/8/4KB2 w - - 0 1", true),
            // c8 and f1 are both light squares.
            ("2b1k3/8/8/8/8/8/8/4KB2 w - - 0 1", true),
            ("4kb2/8/8/8/8/8/8/4KB2 w - - 0 1", false),
            ("4k3/8/8/8/8/8/8/3NKN2 w - - 0 1", false),
            ("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1", false),
        ];
        for (fen, expected) in cases {
            let game = GameState::from_fen(fen).expect("FEN parse");
            assert_eq!(is_insufficient_material(&game), expected, "{fen}");
        }

        let bare = GameState::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN parse");
        assert_eq!(
            classify(&bare),
            GameResult::DrawByRule(DrawReason::InsufficientMaterial)
        );
    }

    #[test]
    fn threefold_repetition_by_knight_shuffle() {
        let mut game = GameState::new_game();
        let shuffle = [(6, 21), (62, 45), (21, 6), (45, 62)];
        play_line(&mut game, &shuffle);
        assert_eq!(classify(&game), GameResult::Ongoing);
        play_line(&mut game, &shuffle);
        assert_eq!(
            classify(&game),
            GameResult::DrawByRule(DrawReason::ThreefoldRepetition)
        );
    }

    #[test]
    fn mate_takes_precedence_over_fifty_move_rule() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 100 60").expect("FEN parse");
        assert_eq!(classify(&game), GameResult::Checkmate);
    }
}

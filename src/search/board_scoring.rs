//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static position
//! scoring to `BoardScorer`.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::search::piece_square_tables::piece_square_bonus;

pub const MATE_SCORE: i32 = 30000;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 0,
        }
    }

    #[inline]
    fn material_balance_white_minus_black(game_state: &GameState) -> i32 {
        let mut score = 0i32;

        for piece in ALL_PIECE_KINDS {
            let value = Self::piece_value(piece);
            let white_count = game_state.piece_bitboard(Color::White, piece).count_ones() as i32;
            let black_count = game_state.piece_bitboard(Color::Black, piece).count_ones() as i32;
            score += (white_count - black_count) * value;
        }

        score
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let white_minus_black = Self::material_balance_white_minus_black(game_state);
        match game_state.side_to_move {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        }
    }
}

/// Material, piece-square bonuses, and legal-move mobility.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl StandardScorer {
    const MOBILITY_WEIGHT: i32 = 5;

    fn positional_term(game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|placed| {
                let bonus = piece_square_bonus(placed.piece, placed.square);
                match placed.piece.color {
                    Color::White => bonus,
                    Color::Black => -bonus,
                }
            })
            .sum()
    }

    /// Legal-move count of the side to move minus that of the opponent.
    fn mobility_term(game_state: &GameState) -> i32 {
        let own = legal_moves(game_state).len() as i32;

        // Hand the move to the opponent; any en-passant right belonged to us.
        let mut flipped = game_state.scratch_copy();
        flipped.side_to_move = game_state.side_to_move.opposite();
        flipped.en_passant_square = None;
        let theirs = legal_moves(&flipped).len() as i32;

        (own - theirs) * Self::MOBILITY_WEIGHT
    }
}

impl BoardScorer for StandardScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        let material = MaterialScorer::material_balance_white_minus_black(game_state);
        let positional = Self::positional_term(game_state);
        let white_minus_black = material + positional;
        let relative = match game_state.side_to_move {
            Color::White => white_minus_black,
            Color::Black => -white_minus_black,
        };
        relative + Self::mobility_term(game_state)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoardScorer, MaterialScorer, StandardScorer};
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_is_balanced() {
        let game = GameState::new_game();
        assert_eq!(MaterialScorer.score(&game), 0);
        assert_eq!(StandardScorer.score(&game), 0);
    }

    #[test]
    fn material_score_is_relative_to_side_to_move() {
        let white = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 w - - 0 1").expect("FEN parse");
        let black = GameState::from_fen("4k3/8/8/8/8/8/8/3QK3 b - - 0 1").expect("FEN parse");
        assert_eq!(MaterialScorer.score(&white), 900);
        assert_eq!(MaterialScorer.score(&black), -900);
    }

    #[test]
    fn standard_scorer_is_symmetric_under_color_flip() {
        // Same position with colors and board mirrored.
        let white = GameState::from_fen("4k3/8/8/8/3N4/8/PP6/4K3 w - - 0 1").expect("FEN parse");
        let black = GameState::from_fen("4k3/pp6/8/3n4/8/8/8/4K3 b - - 0 1").expect("FEN parse");
        assert_eq!(StandardScorer.score(&white), StandardScorer.score(&black));
        assert!(StandardScorer.score(&white) > 0);
    }

    #[test]
    fn score_negates_when_the_move_passes() {
        let black = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1").expect("FEN parse");
        let mut white = black.clone();
        white.side_to_move = black.side_to_move.opposite();
        assert!(StandardScorer.score(&white) > 0);
        assert_eq!(StandardScorer.score(&white), -StandardScorer.score(&black));
    }
}

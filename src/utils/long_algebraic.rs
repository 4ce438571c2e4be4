//! Long algebraic move notation (`e2e4`, `e7e8q`) for console I/O.
//!
//! Text only carries squares and an optional promotion letter; the full
//! `Move` is recovered from the legal moves of the position.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_executor::resolve_candidate;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Squares and promotion choice as typed, before matching against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn move_to_long_algebraic(mv: &Move) -> String {
    mv.to_string()
}

pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<MoveText> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        Some(&ch) => Some(char_to_promotion(char::from(ch))?),
        None => None,
    };

    Ok(MoveText {
        from,
        to,
        promotion,
    })
}

/// The legal move `long_algebraic` names in `game_state`.
pub fn long_algebraic_to_move(long_algebraic: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = parse_long_algebraic(long_algebraic)?;
    resolve_candidate(game_state, text.from, text.to, text.promotion).ok_or(
        ChessError::IllegalMove {
            from: text.from,
            to: text.to,
        },
    )
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessError::InvalidAlgebraic(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic, parse_long_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::moves::chess_move::MoveKind;

    #[test]
    fn round_trip_simple_move() {
        let game = GameState::new_game();
        let mv = long_algebraic_to_move("e2e4", &game).expect("move should parse");
        assert!(mv.is_double_pawn_push());
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");
    }

    #[test]
    fn round_trip_promotion() {
        let game = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN parse");
        let mv = long_algebraic_to_move("a7a8Q", &game).expect("move should parse");
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(move_to_long_algebraic(&mv), "a7a8q");
    }

    #[test]
    fn promotion_letter_is_required_on_the_last_rank() {
        let game = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN parse");
        let err = long_algebraic_to_move("a7a8", &game).expect_err("missing promotion");
        assert!(matches!(err, ChessError::IllegalMove { from: 48, to: 56 }));
        assert_eq!(
            parse_long_algebraic("a7a8").expect("text parses").promotion,
            None
        );
    }

    #[test]
    fn detects_castling_and_en_passant() {
        let castle = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN parse");
        let mv = long_algebraic_to_move("e1g1", &castle).expect("castle should parse");
        assert_eq!(mv.kind, MoveKind::CastleKingside);

        let ep = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN parse");
        let mv = long_algebraic_to_move("e5d6", &ep).expect("en passant should parse");
        assert_eq!(mv.kind, MoveKind::EnPassant);
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "e2", "e2e", "e2e4qq", "z2e4", "e2e9", "e7e8k", "é2e4"] {
            assert!(parse_long_algebraic(bad).is_err(), "{bad}");
        }
    }
}

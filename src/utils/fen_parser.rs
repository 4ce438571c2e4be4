//! FEN-to-GameState parser.
//!
//! Builds a fully populated board from a Forsyth-Edwards Notation string:
//! placement, side to move, rights, en-passant target, and clocks. The parsed
//! position seeds the repetition history.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_square = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock '{halfmove_part}'")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number '{fullmove_part}'")))?;
    if game_state.fullmove_number == 0 {
        // Some tools emit 0; normalise to the first move.
        game_state.fullmove_number = 1;
    }

    if let Some(ep) = game_state.en_passant_square {
        check_en_passant_square(&game_state, ep, en_passant_part)?;
    }
    drop_unbacked_castling_rights(&mut game_state);
    game_state.record_position();

    Ok(game_state)
}

fn invalid(reason: &str) -> ChessError {
    ChessError::InvalidFen(reason.to_owned())
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            game_state.put_piece(make_square(file, board_rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("side to move '{side_part}'"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;
    for ch in castling_part.chars() {
        rights |= match ch {
            'K' => CASTLE_WHITE_KINGSIDE,
            'Q' => CASTLE_WHITE_QUEENSIDE,
            'k' => CASTLE_BLACK_KINGSIDE,
            'q' => CASTLE_BLACK_QUEENSIDE,
            _ => return Err(invalid(&format!("castling rights character '{ch}'"))),
        };
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)?;
    let rank = square_rank(square);
    if rank != 2 && rank != 5 {
        return Err(invalid(&format!("en-passant square '{en_passant_part}'")));
    }
    Ok(Some(square))
}

/// The target must sit just behind a pawn of the side that did not move,
/// with both it and the pawn's start square empty.
fn check_en_passant_square(game_state: &GameState, ep: Square, text: &str) -> ChessResult<()> {
    let mover = game_state.side_to_move;
    let pusher = mover.opposite();
    let (expected_rank, pawn_sq, origin_sq) = match mover {
        Color::White => (5, ep - 8, ep + 8),
        Color::Black => (2, ep + 8, ep - 8),
    };

    if square_rank(ep) != expected_rank {
        return Err(invalid(&format!("en-passant square '{text}' with {mover:?} to move")));
    }
    if game_state.piece_at(ep).is_some() || game_state.piece_at(origin_sq).is_some() {
        return Err(invalid(&format!("en-passant square '{text}' is not behind a double push")));
    }
    if game_state.piece_at(pawn_sq) != Some(Piece::new(pusher, PieceKind::Pawn)) {
        return Err(invalid(&format!("en-passant square '{text}' has no pawn to capture")));
    }
    Ok(())
}

/// A right without its king and rook on their home squares can never be used.
fn drop_unbacked_castling_rights(game_state: &mut GameState) {
    let homes = [
        (CASTLE_WHITE_KINGSIDE, Color::White, 4, 7),
        (CASTLE_WHITE_QUEENSIDE, Color::White, 4, 0),
        (CASTLE_BLACK_KINGSIDE, Color::Black, 60, 63),
        (CASTLE_BLACK_QUEENSIDE, Color::Black, 60, 56),
    ];

    for (right, color, king_sq, rook_sq) in homes {
        let king_home = game_state.piece_at(king_sq) == Some(Piece::new(color, PieceKind::King));
        let rook_home = game_state.piece_at(rook_sq) == Some(Piece::new(color, PieceKind::Rook));
        if !(king_home && rook_home) {
            game_state.castling_rights &= !right;
        }
    }
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
        assert_eq!(game_state.en_passant_square, None);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.piece_at(3),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            game_state.piece_at(59),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    fn rejects_malformed_fields() {
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkx - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 x").is_err());
    }

    #[test]
    fn en_passant_square_must_follow_a_double_push() {
        // White to move needs a rank-6 target.
        assert!(parse_fen("4k3/8/8/8/8/8/3PK3/8 w - e3 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1").is_err());
        // No black pawn on d5.
        assert!(parse_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1").is_err());
        // d7 still occupied, so no pawn came from there.
        assert!(parse_fen("4k3/3p4/8/3pP3/8/8/8/4K3 w - d6 0 1").is_err());

        let game = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        assert_eq!(game.en_passant_square, Some(43));
        let game = parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
            .expect("FEN should parse");
        assert_eq!(game.en_passant_square, Some(20));
    }

    #[test]
    fn castling_rights_without_home_pieces_are_dropped() {
        let game_state =
            parse_fen("4k3/8/8/8/8/8/8/4K2R w KQkq - 0 1").expect("FEN should parse");
        assert_eq!(game_state.castling_rights, CASTLE_WHITE_KINGSIDE);
    }
}

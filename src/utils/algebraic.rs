//! Square conversions between indices and coordinates such as `e4`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert a coordinate (for example: "e4") to a square index.
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(square.to_owned()));
    }

    Ok((rank - b'1') * 8 + (file - b'a'))
}

/// Convert a square index (`0..=63`) to a coordinate (for example: "e4").
pub fn square_to_algebraic(square: Square) -> ChessResult<String> {
    if square > 63 {
        return Err(ChessError::InvalidSquare(i64::from(square)));
    }
    Ok(square_name(square))
}

/// Coordinate name for a square already known to be on the board.
pub fn square_name(square: Square) -> String {
    let file_char = char::from(b'a' + (square % 8));
    let rank_char = char::from(b'1' + (square / 8) % 8);
    format!("{file_char}{rank_char}")
}

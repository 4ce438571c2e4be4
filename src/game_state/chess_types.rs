//! Core value types for pieces, colors, squares, and castling rights.
//!
//! Squares are `rank * 8 + file` indices with `0 == a1` and `63 == h8`. Piece
//! kinds form a closed enum; movement rules are looked up per kind rather than
//! through per-piece objects.

pub use crate::game_state::game_state::GameState;

use crate::errors::{ChessError, ChessResult};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank (0-based) pawns of this color start on.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank (0-based) pawns of this color promote on.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

pub const ALL_PIECE_KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is_color(self, color: Color) -> bool {
        self.color == color
    }
}

/// A piece together with the square it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub square: Square,
}

/// Board square index (`0..=63`).
pub type Square = u8;

/// Raw index used by screen-mapping code for "no square".
pub const NO_SQUARE: i64 = -1;

/// Convert a raw (possibly sentinel) index into a checked square.
pub fn square_from_index(index: i64) -> ChessResult<Square> {
    if (0..64).contains(&index) {
        Ok(index as Square)
    } else {
        Err(ChessError::InvalidSquare(index))
    }
}

#[inline]
pub const fn square_file(square: Square) -> u8 {
    square % 8
}

#[inline]
pub const fn square_rank(square: Square) -> u8 {
    square / 8
}

#[inline]
pub const fn make_square(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights =
    CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE | CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_and_out_of_range_indices_are_rejected() {
        assert!(matches!(
            square_from_index(NO_SQUARE),
            Err(ChessError::InvalidSquare(-1))
        ));
        assert!(square_from_index(64).is_err());
        assert_eq!(square_from_index(0).expect("a1 is valid"), 0);
        assert_eq!(square_from_index(63).expect("h8 is valid"), 63);
    }

    #[test]
    fn square_helpers_agree() {
        let e4 = make_square(4, 3);
        assert_eq!(e4, 28);
        assert_eq!(square_file(e4), 4);
        assert_eq!(square_rank(e4), 3);
    }
}

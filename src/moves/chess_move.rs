//! The `Move` value type.
//!
//! A move carries everything needed to apply and describe it: both squares,
//! the moving piece, what it captures, the promotion choice, and a kind tag
//! for the special moves. A bare from/to pair cannot express promotion or
//! tell castling and en passant apart, so UI gestures are matched against
//! generated moves to recover the full value.

use std::fmt;

use crate::game_state::chess_types::{PieceKind, Square};
use crate::utils::algebraic::square_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    CastleKingside,
    CastleQueenside,
    EnPassant,
    Promotion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub moved_piece: PieceKind,
    pub captured_piece: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    pub const fn new(
        from: Square,
        to: Square,
        moved_piece: PieceKind,
        captured_piece: Option<PieceKind>,
        promotion: Option<PieceKind>,
        kind: MoveKind,
    ) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            promotion,
            kind,
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub const fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::CastleKingside | MoveKind::CastleQueenside)
    }

    /// Pawn advancing two ranks from its start square.
    #[inline]
    pub const fn is_double_pawn_push(&self) -> bool {
        matches!(self.moved_piece, PieceKind::Pawn) && self.from.abs_diff(self.to) == 16
    }

    /// Square of the piece this move captures; differs from `to` for en passant.
    #[inline]
    pub const fn capture_square(&self) -> Square {
        match self.kind {
            MoveKind::EnPassant => {
                // The captured pawn shares the mover's origin rank and the target file.
                (self.from / 8) * 8 + self.to % 8
            }
            _ => self.to,
        }
    }
}

/// Long algebraic form, e.g. `e2e4` or `e7e8q`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", square_name(self.from), square_name(self.to))?;
        if let Some(promo) = self.promotion {
            let ch = match promo {
                PieceKind::Knight => 'n',
                PieceKind::Bishop => 'b',
                PieceKind::Rook => 'r',
                _ => 'q',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

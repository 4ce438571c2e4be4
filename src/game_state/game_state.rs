//! The board model.
//!
//! `GameState` owns a 64-entry piece array, the turn/state flags, the move
//! clocks, and the repetition history. Occupancy bitboards are kept alongside
//! the array so attack lookups stay cheap; every placement change goes through
//! `put_piece`/`remove_piece` to keep the two in sync.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::game_state::zobrist::compute_position_key;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    squares: [Option<Piece>; 64],

    // Occupancy caches.
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    // Keys of every position reached since the game (or FEN) started,
    // including the current one.
    pub repetition_history: Vec<u64>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            squares: [None; 64],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,

            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,

            halfmove_clock: 0,
            fullmove_number: 1,

            repetition_history: Vec::new(),
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    pub fn new_game() -> Self {
        parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse")
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let game_state = parse_fen(fen)?;
        game_state.validate()?;
        Ok(game_state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    /// Read-only snapshot of the placement, indexed by square.
    #[inline]
    pub fn arrangement(&self) -> [Option<Piece>; 64] {
        self.squares
    }

    pub fn pieces(&self) -> impl Iterator<Item = PlacedPiece> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, piece)| {
                piece.map(|piece| PlacedPiece {
                    piece,
                    square: sq as Square,
                })
            })
    }

    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        self.remove_piece(square);
        let mask = 1u64 << square;
        self.squares[square as usize] = Some(piece);
        self.occupancy_by_color[piece.color.index()] |= mask;
        self.occupancy_all |= mask;
    }

    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        let removed = self.squares[square as usize].take()?;
        let mask = 1u64 << square;
        self.occupancy_by_color[removed.color.index()] &= !mask;
        self.occupancy_all &= !mask;
        Some(removed)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.squares
            .iter()
            .position(|p| *p == Some(king))
            .map(|sq| sq as Square)
    }

    /// Bitboard of squares holding `color`'s pieces of `kind`.
    pub fn piece_bitboard(&self, color: Color, kind: PieceKind) -> u64 {
        let target = Some(Piece::new(color, kind));
        let mut bb = 0u64;
        let mut occ = self.occupancy_by_color[color.index()];
        while occ != 0 {
            let sq = occ.trailing_zeros() as usize;
            if self.squares[sq] == target {
                bb |= 1u64 << sq;
            }
            occ &= occ - 1;
        }
        bb
    }

    #[inline]
    pub fn position_key(&self) -> u64 {
        compute_position_key(self)
    }

    /// Append the current position to the repetition history.
    pub fn record_position(&mut self) {
        let key = self.position_key();
        self.repetition_history.push(key);
    }

    /// How many times the current position has occurred, counting itself.
    pub fn repetition_count(&self) -> usize {
        let key = self.position_key();
        let seen = self
            .repetition_history
            .iter()
            .filter(|k| **k == key)
            .count();
        seen.max(1)
    }

    /// Copy of the position without the repetition history, for move
    /// simulation inside generation and search.
    pub fn scratch_copy(&self) -> Self {
        Self {
            squares: self.squares,
            occupancy_by_color: self.occupancy_by_color,
            occupancy_all: self.occupancy_all,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            repetition_history: Vec::new(),
        }
    }

    /// Check the playability invariants of a loaded position.
    pub fn validate(&self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let kings = self.piece_bitboard(color, PieceKind::King).count_ones();
            if kings != 1 {
                return Err(ChessError::InvalidFen(format!(
                    "{color:?} must have exactly one king, found {kings}"
                )));
            }
        }

        let back_ranks = 0xFF00_0000_0000_00FFu64;
        let pawns = self.piece_bitboard(Color::White, PieceKind::Pawn)
            | self.piece_bitboard(Color::Black, PieceKind::Pawn);
        if pawns & back_ranks != 0 {
            return Err(ChessError::InvalidFen(
                "pawns may not stand on the first or last rank".to_owned(),
            ));
        }

        if is_king_in_check(self, self.side_to_move.opposite()) {
            return Err(ChessError::InvalidFen(
                "side not to move is in check".to_owned(),
            ));
        }

        Ok(())
    }
}

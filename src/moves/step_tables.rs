//! Fixed-offset attack tables for knights and kings.
//!
//! Each table is built at compile time from a `(file, rank)` offset list, so
//! the movement rule for a stepping piece is pure data.

pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub const KING_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

pub const KNIGHT_ATTACKS: [u64; 64] = build_step_table(&KNIGHT_OFFSETS);
pub const KING_ATTACKS: [u64; 64] = build_step_table(&KING_OFFSETS);

#[inline]
pub const fn knight_attacks(square: u8) -> u64 {
    KNIGHT_ATTACKS[square as usize]
}

#[inline]
pub const fn king_attacks(square: u8) -> u64 {
    KING_ATTACKS[square as usize]
}

const fn build_step_table(offsets: &[(i32, i32); 8]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let file = (sq % 8) as i32;
        let rank = (sq / 8) as i32;
        let mut attacks = 0u64;
        let mut i = 0usize;

        while i < offsets.len() {
            attacks |= bit_if_on_board(file + offsets[i].0, rank + offsets[i].1);
            i += 1;
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

pub(crate) const fn bit_if_on_board(file: i32, rank: i32) -> u64 {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return 0;
    }
    1u64 << ((rank as usize) * 8 + (file as usize))
}

#[cfg(test)]
mod tests {
    use super::{king_attacks, knight_attacks};

    #[test]
    fn knight_from_d4_has_eight_targets_and_from_a1_two() {
        assert_eq!(knight_attacks(27).count_ones(), 8);
        assert_eq!(knight_attacks(0).count_ones(), 2);
        assert_eq!(knight_attacks(0), (1u64 << 10) | (1u64 << 17));
    }

    #[test]
    fn king_from_corner_and_centre() {
        assert_eq!(king_attacks(0).count_ones(), 3);
        assert_eq!(king_attacks(63).count_ones(), 3);
        assert_eq!(king_attacks(28).count_ones(), 8);
    }
}

//! Pre-computed pawn geometry tables.
//!
//! This module contains:
//! - Pawn attack tables (constant, per color)
//! - Forward rank masks (everything strictly ahead of a rank, per color)
//! - Forward file, pawn attack span and passed pawn masks (per color and square)
//!
//! All tables are built at compile time, so lookups are plain array reads.

use crate::bitboard::{Bitboard, adjacent_files_bb, file_bb};
use crate::types::{Color, file_of, rank_of};

/// Pre-computed pawn attacks for White (attacking north-east and north-west).
pub static WHITE_PAWN_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq);

        let mut result = 0u64;
        result |= (bb.0 << 9) & Bitboard::NOT_FILE_A.0; // North-East
        result |= (bb.0 << 7) & Bitboard::NOT_FILE_H.0; // North-West

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Pre-computed pawn attacks for Black (attacking south-east and south-west).
pub static BLACK_PAWN_ATTACKS: [Bitboard; 64] = {
    let mut attacks = [Bitboard::EMPTY; 64];
    let mut sq = 0u8;
    while sq < 64 {
        let bb = Bitboard::from_square(sq);

        let mut result = 0u64;
        result |= (bb.0 >> 7) & Bitboard::NOT_FILE_A.0; // South-East
        result |= (bb.0 >> 9) & Bitboard::NOT_FILE_H.0; // South-West

        attacks[sq as usize] = Bitboard(result);
        sq += 1;
    }
    attacks
};

/// Bits of every rank strictly in front of `rank` for colour index `c`.
const fn forward_ranks_mask(c: usize, rank: u8) -> u64 {
    if c == 0 {
        // White: ranks above
        if rank == 7 { 0 } else { !0u64 << (8 * (rank + 1)) }
    } else {
        // Black: ranks below
        if rank == 0 { 0 } else { !0u64 >> (8 * (8 - rank)) }
    }
}

/// FORWARD_RANKS[color][rank]: all ranks strictly in front of `rank`
/// from `color`'s point of view.
pub static FORWARD_RANKS: [[Bitboard; 8]; 2] = {
    let mut masks = [[Bitboard::EMPTY; 8]; 2];
    let mut c = 0usize;
    while c < 2 {
        let mut rank = 0u8;
        while rank < 8 {
            masks[c][rank as usize] = Bitboard(forward_ranks_mask(c, rank));
            rank += 1;
        }
        c += 1;
    }
    masks
};

/// FORWARD_FILE[color][sq]: squares strictly ahead of `sq` on its own file.
pub static FORWARD_FILE: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard::EMPTY; 64]; 2];
    let mut c = 0usize;
    while c < 2 {
        let mut sq = 0u8;
        while sq < 64 {
            let ahead = forward_ranks_mask(c, rank_of(sq));
            masks[c][sq as usize] = Bitboard(ahead & file_bb(file_of(sq)).0);
            sq += 1;
        }
        c += 1;
    }
    masks
};

/// PAWN_ATTACK_SPAN[color][sq]: every square a pawn on `sq` could ever
/// attack while advancing (adjacent files, all ranks ahead).
pub static PAWN_ATTACK_SPAN: [[Bitboard; 64]; 2] = {
    let mut masks = [[Bitboard::EMPTY; 64]; 2];
    let mut c = 0usize;
    while c < 2 {
        let mut sq = 0u8;
        while sq < 64 {
            let ahead = forward_ranks_mask(c, rank_of(sq));
            masks[c][sq as usize] = Bitboard(ahead & adjacent_files_bb(file_of(sq)).0);
            sq += 1;
        }
        c += 1;
    }
    masks
};

/// Get pawn attacks for a given color and square.
#[inline(always)]
pub fn pawn_attacks(sq: u8, c: Color) -> Bitboard {
    match c {
        Color::White => WHITE_PAWN_ATTACKS[sq as usize],
        Color::Black => BLACK_PAWN_ATTACKS[sq as usize],
    }
}

/// All ranks strictly in front of `rank` for `c`.
#[inline(always)]
pub fn forward_ranks_bb(c: Color, rank: u8) -> Bitboard {
    FORWARD_RANKS[c.idx()][rank as usize]
}

/// Squares strictly ahead of `sq` on the same file, for `c`.
#[inline(always)]
pub fn forward_file_bb(c: Color, sq: u8) -> Bitboard {
    FORWARD_FILE[c.idx()][sq as usize]
}

/// Squares a pawn of `c` on `sq` can attack now or after advancing.
#[inline(always)]
pub fn pawn_attack_span(c: Color, sq: u8) -> Bitboard {
    PAWN_ATTACK_SPAN[c.idx()][sq as usize]
}

/// Squares that must be free of enemy pawns for a pawn of `c` on `sq`
/// to be passed.
#[inline(always)]
pub fn passed_pawn_mask(c: Color, sq: u8) -> Bitboard {
    pawn_attack_span(c, sq) | forward_file_bb(c, sq)
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod attacks_tests;

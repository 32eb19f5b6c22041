//! Zobrist keys for the pawn fingerprint.
//!
//! The pawn fingerprint is the XOR of one random value per (color, square)
//! pawn placement, seeded with a non-zero `no_pawns` value. It ignores every
//! other piece, the side to move, castling and the move counters, so two
//! positions with the same pawns always share a fingerprint.
//!
//! XOR makes the key incremental: adding or removing a pawn is one XOR,
//! reducing the update from O(64) to O(1) per board change.

use crate::bitboard::Bitboard;
use crate::types::Color;

/// Pre-computed random values for pawn hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for a pawn on each square, indexed by [color][square].
    pub pawns: [[u64; 64]; 2],
    /// Fingerprint of a board without pawns. Keeps the empty configuration
    /// from hashing to zero, which is what a freshly allocated table slot holds.
    pub no_pawns: u64,
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using a simple PRNG with fixed seed.
    /// Uses xorshift64 for fast, reproducible random numbers.
    pub const fn new() -> Self {
        // Simple xorshift64 PRNG
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x123456789ABCDEF0u64; // Fixed seed

        let mut pawns = [[0u64; 64]; 2];
        let mut color = 0;
        while color < 2 {
            let mut sq = 0;
            while sq < 64 {
                state = xorshift64(state);
                pawns[color][sq] = state;
                sq += 1;
            }
            color += 1;
        }

        state = xorshift64(state);
        let no_pawns = state;

        ZobristKeys { pawns, no_pawns }
    }

    /// Get the Zobrist key for a pawn of `color` on `sq`.
    #[inline(always)]
    pub fn pawn_key(&self, color: Color, sq: u8) -> u64 {
        self.pawns[color.idx()][sq as usize]
    }

    /// Fingerprint of a full pawn configuration, computed from scratch.
    pub fn pawn_fingerprint(&self, white: Bitboard, black: Bitboard) -> u64 {
        let mut key = self.no_pawns;
        for sq in white {
            key ^= self.pawn_key(Color::White, sq);
        }
        for sq in black {
            key ^= self.pawn_key(Color::Black, sq);
        }
        key
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;

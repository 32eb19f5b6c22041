//! The cached result for one pawn configuration.

use chess_core::{Bitboard, Color};

use crate::score::Score;

/// Index into `Entry::shelter` for the king on its current square.
pub(crate) const SHELTER_ACTUAL: usize = 0;
/// Index into `Entry::shelter` for the king after castling short.
pub(crate) const SHELTER_KING_SIDE: usize = 1;
/// Index into `Entry::shelter` for the king after castling long.
pub(crate) const SHELTER_QUEEN_SIDE: usize = 2;
/// Index into `Entry::shelter` for the king-to-pawn distance term.
pub(crate) const KING_PAWN_DISTANCE: usize = 3;

/// Pawn-structure information for one fingerprint.
///
/// Everything except the king-safety fields is a pure function of the pawn
/// placement and is valid while `key` matches the position's pawn key. The
/// king-safety fields additionally depend on the king square and castling
/// rights and are refreshed through `refresh_king_safety`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Entry {
    pub(crate) key: u64,
    pub(crate) scores: [Score; 2],
    pub(crate) passed_pawns: [Bitboard; 2],
    pub(crate) pawn_attacks: [Bitboard; 2],
    pub(crate) pawn_attacks_span: [Bitboard; 2],
    pub(crate) outpost_squares: [Bitboard; 2],
    /// Bit `f` set when the side has no pawn on file `f`.
    pub(crate) semiopen_files: [u8; 2],
    pub(crate) pawn_span: [u8; 2],
    /// Pawn counts per side on [light, dark] squares.
    pub(crate) pawns_on_squares: [[u8; 2]; 2],
    pub(crate) king_squares: [Option<u8>; 2],
    pub(crate) castling_rights: [u8; 2],
    pub(crate) shelter: [[Score; 4]; 2],
}

impl Entry {
    /// Pawn fingerprint this entry was computed for.
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Structural score of `c`'s pawns, from `c`'s point of view.
    #[inline]
    pub fn pawn_score(&self, c: Color) -> Score {
        self.scores[c.idx()]
    }

    /// Combined structural score, always White minus Black.
    #[inline]
    pub fn score(&self) -> Score {
        self.scores[0] - self.scores[1]
    }

    /// Squares attacked by `c`'s pawns.
    #[inline]
    pub fn pawn_attacks(&self, c: Color) -> Bitboard {
        self.pawn_attacks[c.idx()]
    }

    /// Frontmost passed pawns of `c`.
    #[inline]
    pub fn passed_pawns(&self, c: Color) -> Bitboard {
        self.passed_pawns[c.idx()]
    }

    /// Number of passed pawns on the board, both sides.
    #[inline]
    pub fn passed_count(&self) -> u32 {
        (self.passed_pawns[0] | self.passed_pawns[1]).popcount()
    }

    /// Squares `c`'s pawns attack now or could attack after advancing.
    #[inline]
    pub fn pawn_attacks_span(&self, c: Color) -> Bitboard {
        self.pawn_attacks_span[c.idx()]
    }

    /// Squares on ranks 3-6 where `c`'s pieces can never be chased away by
    /// an enemy pawn.
    #[inline]
    pub fn outpost_squares(&self, c: Color) -> Bitboard {
        self.outpost_squares[c.idx()]
    }

    /// True when `c` has no pawn on file `f`.
    #[inline]
    pub fn semiopen_file(&self, c: Color, f: u8) -> bool {
        self.semiopen_files[c.idx()] & (1 << f) != 0
    }

    /// Distance between `c`'s outermost pawn files (0 with fewer than two files).
    #[inline]
    pub fn pawn_span(&self, c: Color) -> u8 {
        self.pawn_span[c.idx()]
    }

    /// How many of `c`'s pawns stand on squares of the same shade as `sq`.
    #[inline]
    pub fn pawns_on_same_color_squares(&self, c: Color, sq: u8) -> u8 {
        let shade = Bitboard::DARK_SQUARES.contains(sq) as usize;
        self.pawns_on_squares[c.idx()][shade]
    }
}

//! King shelter and pawn storm evaluation, cached inside the pawn entry.
//!
//! The cached value depends on the king square and castling rights as well as
//! the pawns, so it has its own freshness check. Use is two-phase: call
//! `Entry::refresh_king_safety` (which may recompute), then read with the pure
//! `Entry::king_safety`.
//!
//! Four scenarios are cached per side: the king where it stands, the king on
//! its short-castle square, the king on its long-castle square, and the
//! king-to-nearest-pawn distance term. The read picks the best shelter among
//! the scenarios still reachable with the current castling rights.

use chess_core::{
    Color, KING_SIDE, PieceKind, Position, QUEEN_SIDE, backmost_sq, distance, file_bb, file_of,
    forward_ranks_bb, frontmost_sq, rank_bb, rank_of, relative_rank, relative_square,
};
use tracing::trace;

use crate::entry::{
    Entry, KING_PAWN_DISTANCE, SHELTER_ACTUAL, SHELTER_KING_SIDE, SHELTER_QUEEN_SIDE,
};
use crate::score::Score;

/// Shelter value with all pawns in front of the king and no enemy pawn in sight.
pub const MAX_SAFETY_BONUS: i32 = 258;

/// Endgame penalty per square between the king and its nearest pawn.
pub const KING_PAWN_DISTANCE_PENALTY: i32 = 16;

/// Weakness of our pawn shelter by [distance from edge][relative rank of our pawn].
/// Rank 0 means no pawn on the file.
#[rustfmt::skip]
const SHELTER_WEAKNESS: [[i32; 8]; 4] = [
    [ 99, 20, 26, 54, 85,  92, 108, 0],
    [117,  1, 27, 71, 94, 104, 118, 0],
    [104,  4, 51, 76, 82, 102,  97, 0],
    [ 80, 12, 43, 65, 88,  91, 115, 0],
];

/// Danger of enemy pawns marching on our king by
/// [blocking state][distance from edge][relative rank of their pawn].
#[rustfmt::skip]
const STORM_DANGER: [[[i32; 8]; 4]; 4] = [
    // No friendly pawn
    [
        [ 0,   65, 126, 36, 30, 0, 0, 0],
        [ 0,   55, 135, 36, 23, 0, 0, 0],
        [ 0,   47, 116, 45, 26, 0, 0, 0],
        [ 0,   62, 127, 57, 34, 0, 0, 0],
    ],
    // Unblocked
    [
        [21,   45,  93, 50, 19, 0, 0, 0],
        [23,   24, 105, 41, 13, 0, 0, 0],
        [23,   36, 101, 38, 20, 0, 0, 0],
        [30,   19, 110, 41, 27, 0, 0, 0],
    ],
    // Blocked by our pawn
    [
        [ 0,    0,  81, 14,  4, 0, 0, 0],
        [ 0,    0, 169, 30,  3, 0, 0, 0],
        [ 0,    0, 168, 24,  5, 0, 0, 0],
        [ 0,    0, 162, 26, 10, 0, 0, 0],
    ],
    // Blocked by our king
    [
        [ 0, -283, -298, 57, 29, 0, 0, 0],
        [ 0,   63,  137, 42, 18, 0, 0, 0],
        [ 0,   67,  145, 49, 33, 0, 0, 0],
        [ 0,   62,  126, 53, 21, 0, 0, 0],
    ],
];

/// How the enemy pawn on a shelter file relates to our defenders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Blocking {
    NoFriendlyPawn,
    Unblocked,
    BlockedByPawn,
    BlockedByKing,
}

/// Shelter minus storm for a king of `us` standing on `ksq`.
///
/// Looks at the king's file and its two neighbours (shifted inward on the
/// edge files). The result may be negative.
pub fn shelter_storm(pos: &Position, us: Color, ksq: u8) -> i32 {
    let them = us.other();
    let king_rank = rank_of(ksq);
    let king_file = file_of(ksq);

    let zone = forward_ranks_bb(us, king_rank) | rank_bb(king_rank);
    let ours = pos.pieces(us, PieceKind::Pawn) & zone;
    let theirs = pos.pieces(them, PieceKind::Pawn) & zone;

    let mut safety = MAX_SAFETY_BONUS;
    let center = king_file.clamp(1, 6);

    for f in center - 1..=center + 1 {
        let rk_us =
            backmost_sq(us, ours & file_bb(f)).map_or(0, |s| relative_rank(us, rank_of(s)));
        let rk_them =
            frontmost_sq(them, theirs & file_bb(f)).map_or(0, |s| relative_rank(us, rank_of(s)));

        let blocking = if f == king_file && rk_them == relative_rank(us, king_rank) + 1 {
            Blocking::BlockedByKing
        } else if rk_us == 0 {
            Blocking::NoFriendlyPawn
        } else if rk_them == rk_us + 1 {
            Blocking::BlockedByPawn
        } else {
            Blocking::Unblocked
        };

        let edge = f.min(7 - f) as usize;
        safety -= SHELTER_WEAKNESS[edge][rk_us as usize]
            + STORM_DANGER[blocking as usize][edge][rk_them as usize];
    }

    safety
}

impl Entry {
    /// True when the cached king safety of `us` can be used for `pos`: the
    /// king has not moved and `pos` has no castling right the cache lacks.
    pub fn king_safety_is_fresh(&self, pos: &Position, us: Color) -> bool {
        let u = us.idx();
        let rights = pos.castling.for_side(us);
        pos.king_sq(us) == self.king_squares[u] && self.castling_rights[u] & rights == rights
    }

    /// Recompute `us`'s king safety if the cache is stale. Returns whether a
    /// recompute happened. A side without a king is never refreshed.
    pub fn refresh_king_safety(&mut self, pos: &Position, us: Color) -> bool {
        let Some(ksq) = pos.king_sq(us) else {
            return false;
        };
        if self.king_safety_is_fresh(pos, us) {
            return false;
        }
        self.do_king_safety(pos, us, ksq);
        true
    }

    fn do_king_safety(&mut self, pos: &Position, us: Color, ksq: u8) {
        let u = us.idx();
        let rights = pos.castling.for_side(us);
        self.king_squares[u] = Some(ksq);
        self.castling_rights[u] = rights;

        let min_distance = pos
            .pieces(us, PieceKind::Pawn)
            .map(|p| distance(ksq, p))
            .min()
            .unwrap_or(0);

        let shelter = &mut self.shelter[u];
        *shelter = [Score::ZERO; 4];
        shelter[KING_PAWN_DISTANCE] =
            Score::new(0, -KING_PAWN_DISTANCE_PENALTY * min_distance as i32);

        // Once the king has left its first four ranks, only the distance term applies.
        if relative_rank(us, rank_of(ksq)) <= 3 {
            shelter[SHELTER_ACTUAL] = Score::new(shelter_storm(pos, us, ksq), 0);
            if rights & KING_SIDE != 0 {
                let g1 = relative_square(us, 6);
                shelter[SHELTER_KING_SIDE] = Score::new(shelter_storm(pos, us, g1), 0);
            }
            if rights & QUEEN_SIDE != 0 {
                let c1 = relative_square(us, 2);
                shelter[SHELTER_QUEEN_SIDE] = Score::new(shelter_storm(pos, us, c1), 0);
            }
        }

        trace!(
            side = ?us,
            king = ksq,
            rights,
            min_distance,
            shelter = shelter[SHELTER_ACTUAL].mg,
            "king safety recomputed"
        );
    }

    /// King safety of `us`: the best shelter among the king's square and the
    /// castling destinations `pos` still allows, plus the distance term.
    ///
    /// Pure read. Call `refresh_king_safety` first.
    pub fn king_safety(&self, pos: &Position, us: Color) -> Score {
        if pos.king_sq(us).is_none() {
            return Score::ZERO;
        }
        debug_assert!(
            self.king_safety_is_fresh(pos, us),
            "king safety read without refresh"
        );

        let shelter = &self.shelter[us.idx()];
        let rights = pos.castling.for_side(us);
        let mut best = shelter[SHELTER_ACTUAL];
        if rights & KING_SIDE != 0 {
            best = best.max_by_mg(shelter[SHELTER_KING_SIDE]);
        }
        if rights & QUEEN_SIDE != 0 {
            best = best.max_by_mg(shelter[SHELTER_QUEEN_SIDE]);
        }
        best + shelter[KING_PAWN_DISTANCE]
    }
}

#[cfg(test)]
#[path = "king_safety_tests.rs"]
mod king_safety_tests;

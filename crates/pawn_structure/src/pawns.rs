//! Pawn structure classification and scoring.
//!
//! Every pawn is classified from the two pawn bitboards alone, so the result
//! can be cached per pawn fingerprint. A single colour-parameterized routine
//! handles both sides; "up", "ahead" and "behind" are always relative to the
//! side being evaluated.

use chess_core::{
    Bitboard, Color, PieceKind, Position, adjacent_files_bb, backmost_sq, file_of,
    forward_file_bb, forward_ranks_bb, frontmost_sq, passed_pawn_mask, pawn_attack_span,
    pawn_attacks, rank_bb, rank_distance, rank_of, relative_rank,
};

use crate::entry::Entry;
use crate::score::Score;

const fn s(mg: i32, eg: i32) -> Score {
    Score::new(mg, eg)
}

/// Doubled pawn penalty by file.
#[rustfmt::skip]
pub const DOUBLED: [Score; 8] = [
    s(13, 43), s(20, 48), s(23, 48), s(23, 48),
    s(23, 48), s(23, 48), s(20, 48), s(13, 43),
];

/// Isolated pawn penalty by [opposed][file].
#[rustfmt::skip]
pub const ISOLATED: [[Score; 8]; 2] = [
    [
        s(37, 45), s(54, 52), s(60, 52), s(60, 52),
        s(60, 52), s(60, 52), s(54, 52), s(37, 45),
    ],
    [
        s(25, 30), s(36, 35), s(40, 35), s(40, 35),
        s(40, 35), s(40, 35), s(36, 35), s(25, 30),
    ],
];

/// Backward pawn penalty by [opposed][file].
#[rustfmt::skip]
pub const BACKWARD: [[Score; 8]; 2] = [
    [
        s(50, 52), s(63, 56), s(69, 56), s(69, 56),
        s(69, 56), s(69, 56), s(63, 56), s(50, 52),
    ],
    [
        s(40, 38), s(49, 41), s(53, 41), s(53, 41),
        s(53, 41), s(53, 41), s(49, 41), s(40, 38),
    ],
];

/// Lever bonus by relative rank.
#[rustfmt::skip]
pub const LEVER: [Score; 8] = [
    s(0, 0), s(0, 0), s(0, 0), s(0, 0),
    s(20, 20), s(40, 40), s(0, 0), s(0, 0),
];

/// Penalty for a pawn that is neither isolated, backward nor supported.
pub const UNSUPPORTED: Score = s(20, 10);

/// Bonus per central square attacked by two of our pawns at once.
pub const CENTER_BIND: Score = s(16, 0);

/// Central squares (d/e files) on the relative 5th to 7th ranks, per side.
const CENTER_BIND_MASK: [Bitboard; 2] = [
    Bitboard(
        (Bitboard::FILE_D.0 | Bitboard::FILE_E.0)
            & (Bitboard::RANK_5.0 | Bitboard::RANK_6.0 | Bitboard::RANK_7.0),
    ),
    Bitboard(
        (Bitboard::FILE_D.0 | Bitboard::FILE_E.0)
            & (Bitboard::RANK_4.0 | Bitboard::RANK_3.0 | Bitboard::RANK_2.0),
    ),
];

/// Outposts are only tracked on ranks 3 to 6.
const OUTPOST_MASK: Bitboard =
    Bitboard(Bitboard::RANK_3.0 | Bitboard::RANK_4.0 | Bitboard::RANK_5.0 | Bitboard::RANK_6.0);

/// Connected pawn bonus by [opposed][phalanx][more than one supporter][relative rank].
///
/// Built from a per-rank seed. A phalanx adds half the step to the next
/// rank, opposition halves the value, a second supporter adds half again.
pub struct ConnectedBonus([[[[Score; 8]; 2]; 2]; 2]);

impl ConnectedBonus {
    const SEED: [i32; 8] = [0, 6, 15, 10, 57, 75, 135, 258];

    pub const fn new() -> Self {
        let mut table = [[[[Score::ZERO; 8]; 2]; 2]; 2];
        let mut opposed = 0;
        while opposed < 2 {
            let mut phalanx = 0;
            while phalanx < 2 {
                let mut apex = 0;
                while apex < 2 {
                    // Relative ranks 2..7; pawns never stand on the 1st or 8th.
                    let mut r = 1;
                    while r < 7 {
                        let step = if phalanx == 1 {
                            (Self::SEED[r + 1] - Self::SEED[r]) / 2
                        } else {
                            0
                        };
                        let mut v = (Self::SEED[r] + step) >> opposed;
                        if apex == 1 {
                            v += v / 2;
                        }
                        table[opposed][phalanx][apex][r] = Score::new(3 * v / 2, v);
                        r += 1;
                    }
                    apex += 1;
                }
                phalanx += 1;
            }
            opposed += 1;
        }
        ConnectedBonus(table)
    }

    #[inline(always)]
    pub fn get(&self, opposed: bool, phalanx: bool, apex: bool, rank: u8) -> Score {
        self.0[opposed as usize][phalanx as usize][apex as usize][rank as usize]
    }
}

/// Built once at compile time, read-only afterwards.
pub static CONNECTED: ConnectedBonus = ConnectedBonus::new();

/// Classification of a single pawn.
///
/// The bitboard fields hold the pawns responsible for each feature; the
/// booleans are derived from them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PawnFlags {
    /// Own pawns on adjacent files, any rank.
    pub neighbours: Bitboard,
    /// Own pawns strictly ahead on the same file.
    pub doubled: Bitboard,
    /// Enemy pawns strictly ahead on the same file.
    pub opposed: Bitboard,
    /// Enemy pawns this pawn can capture right now.
    pub lever: Bitboard,
    /// Own neighbours on the same rank.
    pub phalanx: Bitboard,
    /// Own neighbours on the rank directly behind.
    pub supported: Bitboard,
    pub passed: bool,
    pub connected: bool,
    pub isolated: bool,
    pub backward: bool,
}

impl PawnFlags {
    /// Classify the pawn of `us` on `sq` against both pawn sets.
    pub fn classify(us: Color, sq: u8, ours: Bitboard, theirs: Bitboard) -> Self {
        debug_assert!(ours.contains(sq), "no pawn of {us:?} on square {sq}");
        debug_assert!(
            (1..=6).contains(&rank_of(sq)),
            "pawn on back rank square {sq}"
        );

        let them = us.other();
        let rank = rank_of(sq);

        let neighbours = ours & adjacent_files_bb(file_of(sq));
        let doubled = ours & forward_file_bb(us, sq);
        let opposed = theirs & forward_file_bb(us, sq);
        let passed = (theirs & passed_pawn_mask(us, sq)).is_empty();
        let lever = theirs & pawn_attacks(sq, us);
        let phalanx = neighbours & rank_bb(rank);
        let supported = neighbours & rank_bb(rank).shift_down(us);
        let connected = !(supported | phalanx).is_empty();
        let isolated = neighbours.is_empty();

        // A passed, isolated, lever or connected pawn is never backward, nor is
        // one with an own pawn behind it on an adjacent file. Otherwise find the
        // nearest pawn ahead on the adjacent files: if an enemy pawn stands on
        // that rank or the next one, advancing walks into a capture.
        let backward = if passed
            || isolated
            || !lever.is_empty()
            || connected
            || !(ours & pawn_attack_span(them, sq)).is_empty()
        {
            false
        } else {
            let span = pawn_attack_span(us, sq);
            let ahead = span & (ours | theirs);
            debug_assert!(!ahead.is_empty(), "backward candidate without pawns ahead");
            backmost_sq(us, ahead).is_some_and(|nearest| {
                let b = span & rank_bb(rank_of(nearest));
                !((b | b.shift_up(us)) & theirs).is_empty()
            })
        };

        debug_assert!(
            !opposed.is_empty() || passed || !(pawn_attack_span(us, sq) & theirs).is_empty()
        );

        PawnFlags {
            neighbours,
            doubled,
            opposed,
            lever,
            phalanx,
            supported,
            passed,
            connected,
            isolated,
            backward,
        }
    }

    /// Structural score of this pawn from `us`'s point of view.
    pub fn score(&self, us: Color, sq: u8) -> Score {
        let f = file_of(sq) as usize;
        let rr = relative_rank(us, rank_of(sq));
        let opposed = !self.opposed.is_empty();
        let mut score = Score::ZERO;

        if self.isolated {
            score -= ISOLATED[opposed as usize][f];
        } else if self.backward {
            score -= BACKWARD[opposed as usize][f];
        } else if self.supported.is_empty() {
            score -= UNSUPPORTED;
        }

        if self.connected {
            score += CONNECTED.get(
                opposed,
                !self.phalanx.is_empty(),
                self.supported.more_than_one(),
                rr,
            );
        }

        // Closer doubling hurts more
        if let Some(front) = frontmost_sq(us, self.doubled) {
            score -= DOUBLED[f] / rank_distance(sq, front) as i32;
        }

        if !self.lever.is_empty() {
            score += LEVER[rr as usize];
        }

        score
    }

    /// Squares of `us`'s attack span that this pawn can still contest, i.e.
    /// the squares to strike from the opponent's outposts.
    fn outpost_exclusion(&self, us: Color, sq: u8, theirs: Bitboard) -> Bitboard {
        let them = us.other();
        let span = pawn_attack_span(us, sq);
        // Span squares behind the rank just past the blocking enemy pawn on our file.
        let up_to_opposer =
            |o: u8| span & forward_ranks_bb(them, rank_of(o).wrapping_add(rank_step(us)));

        if self.backward {
            let blockers = span & theirs;
            match (backmost_sq(us, self.opposed), backmost_sq(us, blockers)) {
                (Some(o), Some(b))
                    if relative_rank(us, rank_of(o)) < relative_rank(us, rank_of(b)) =>
                {
                    up_to_opposer(o)
                }
                (_, Some(b)) => span & forward_ranks_bb(them, rank_of(b)),
                (_, None) => span,
            }
        } else if let Some(o) = backmost_sq(us, self.opposed) {
            up_to_opposer(o)
        } else {
            span
        }
    }
}

/// One rank toward `c`'s promotion rank, as a wrapping offset on a rank index.
#[inline(always)]
fn rank_step(c: Color) -> u8 {
    match c {
        Color::White => 1,
        Color::Black => u8::MAX, // -1
    }
}

/// Evaluate the pawns of `us`, filling `us`'s fields of `e` (and the
/// opponent's outpost squares). Returns the structural score for `us`.
pub fn evaluate_side(us: Color, ours: Bitboard, theirs: Bitboard, e: &mut Entry) -> Score {
    debug_assert!((ours & theirs).is_empty(), "pawn sets overlap");

    let them = us.other();
    let u = us.idx();
    let mut score = Score::ZERO;

    e.passed_pawns[u] = Bitboard::EMPTY;
    e.pawn_attacks_span[u] = Bitboard::EMPTY;
    e.semiopen_files[u] = 0xFF;
    e.outpost_squares[them.idx()] = Bitboard::ALL;
    e.pawn_attacks[u] = ours.pawn_attacks_bb(us);

    let dark = (ours & Bitboard::DARK_SQUARES).popcount() as u8;
    e.pawns_on_squares[u] = [ours.popcount() as u8 - dark, dark];

    // King safety depends on this pawn structure, force a refresh.
    e.king_squares[u] = None;
    e.castling_rights[u] = 0;
    e.shelter[u] = [Score::ZERO; 4];

    for sq in ours {
        e.semiopen_files[u] &= !(1 << file_of(sq));
        e.pawn_attacks_span[u] |= pawn_attack_span(us, sq);

        let flags = PawnFlags::classify(us, sq, ours, theirs);

        // Only the frontmost passer on a file counts.
        if flags.passed && flags.doubled.is_empty() {
            e.passed_pawns[u].set(sq);
        }

        score += flags.score(us, sq);
        e.outpost_squares[them.idx()] &= !flags.outpost_exclusion(us, sq, theirs);
    }

    e.outpost_squares[them.idx()] &= OUTPOST_MASK;

    let occupied = !e.semiopen_files[u];
    e.pawn_span[u] = if occupied != 0 {
        (7 - occupied.leading_zeros() as u8) - occupied.trailing_zeros() as u8
    } else {
        0
    };

    let bind = ours.shift_up_right(us) & ours.shift_up_left(us) & CENTER_BIND_MASK[u];
    score += CENTER_BIND * bind.popcount() as i32;

    score
}

/// Compute a full entry for `pos`, overwriting every pawn-derived field of `e`.
pub fn compute_entry(pos: &Position, e: &mut Entry) {
    let white = pos.pieces(Color::White, PieceKind::Pawn);
    let black = pos.pieces(Color::Black, PieceKind::Pawn);

    e.key = pos.pawn_key();
    e.scores[Color::White.idx()] = evaluate_side(Color::White, white, black, e);
    e.scores[Color::Black.idx()] = evaluate_side(Color::Black, black, white, e);
}

#[cfg(test)]
#[path = "pawns_tests.rs"]
mod pawns_tests;

//! Tapered evaluation score: a middlegame and an endgame component.

use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A (middlegame, endgame) pair in centipawns.
///
/// Arithmetic is component-wise. Division truncates toward zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Score {
    pub mg: i32,
    pub eg: i32,
}

impl Score {
    pub const ZERO: Score = Score { mg: 0, eg: 0 };

    #[inline(always)]
    pub const fn new(mg: i32, eg: i32) -> Self {
        Score { mg, eg }
    }

    /// The better of two scores, comparing middlegame values only.
    /// Ties keep `self`.
    #[inline]
    pub fn max_by_mg(self, other: Score) -> Score {
        if other.mg > self.mg { other } else { self }
    }
}

impl Add for Score {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Score::new(self.mg + rhs.mg, self.eg + rhs.eg)
    }
}

impl AddAssign for Score {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.mg += rhs.mg;
        self.eg += rhs.eg;
    }
}

impl Sub for Score {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Score::new(self.mg - rhs.mg, self.eg - rhs.eg)
    }
}

impl SubAssign for Score {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.mg -= rhs.mg;
        self.eg -= rhs.eg;
    }
}

impl Neg for Score {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self::Output {
        Score::new(-self.mg, -self.eg)
    }
}

impl Mul<i32> for Score {
    type Output = Self;
    #[inline(always)]
    fn mul(self, rhs: i32) -> Self::Output {
        Score::new(self.mg * rhs, self.eg * rhs)
    }
}

impl Div<i32> for Score {
    type Output = Self;
    #[inline(always)]
    fn div(self, rhs: i32) -> Self::Output {
        Score::new(self.mg / rhs, self.eg / rhs)
    }
}

//! Exact rational arithmetic
//!
//! Division results are kept as reduced fractions so a quotient like 7/14 is
//! carried forward exactly and "is this a whole number" never depends on
//! floating-point rounding.

use std::fmt;
use std::ops::{Mul, Sub};

/// A reduced fraction with a positive denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i64,
    denom: i64,
}

const fn gcd(mut a: i64, mut b: i64) -> i64 {
    a = a.abs();
    b = b.abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Fraction {
    /// A whole number
    #[inline]
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self {
            numer: value,
            denom: 1,
        }
    }

    /// Build `numer / denom` in lowest terms
    ///
    /// Returns `None` when `denom` is zero.
    #[must_use]
    pub const fn new(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            None
        } else {
            Some(Self::reduced(numer, denom))
        }
    }

    // Caller guarantees `denom != 0`.
    const fn reduced(numer: i64, denom: i64) -> Self {
        let sign = if denom < 0 { -1 } else { 1 };
        let divisor = gcd(numer, denom);
        Self {
            numer: sign * numer / divisor,
            denom: sign * denom / divisor,
        }
    }

    #[inline]
    #[must_use]
    pub const fn numer(self) -> i64 {
        self.numer
    }

    #[inline]
    #[must_use]
    pub const fn denom(self) -> i64 {
        self.denom
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.denom == 1
    }

    /// The whole-number value, if there is no fractional part
    #[inline]
    #[must_use]
    pub const fn to_integer(self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numer)
        } else {
            None
        }
    }

    /// `self / rhs`, or `None` if `rhs` is zero
    #[must_use]
    pub const fn checked_div(self, rhs: Self) -> Option<Self> {
        Self::new(self.numer * rhs.denom, self.denom * rhs.numer)
    }
}

impl Sub for Fraction {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::reduced(
            self.numer * rhs.denom - rhs.numer * self.denom,
            self.denom * rhs.denom,
        )
    }
}

impl Mul for Fraction {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduced(self.numer * rhs.numer, self.denom * rhs.denom)
    }
}

impl From<i64> for Fraction {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

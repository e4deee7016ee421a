//! Operators and operator assignments
//!
//! A group is reduced by applying three binary operators left to right:
//! `((a op1 b) op2 c) op3 d`. The triple `(op1, op2, op3)` is an
//! [`Assignment`]; the set of triples tried is a [`SearchSpace`].

use super::Fraction;
use std::fmt;

/// One of the three puzzle operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Subtract,
    Multiply,
    Divide,
}

type BinaryFn = fn(Fraction, Fraction) -> Option<Fraction>;

// Indexed by `Operator as usize`.
const APPLY: [BinaryFn; 3] = [
    |lhs, rhs| Some(lhs - rhs),
    |lhs, rhs| Some(lhs * rhs),
    Fraction::checked_div,
];

impl Operator {
    /// All operators, in enumeration order
    pub const ALL: [Self; 3] = [Self::Subtract, Self::Multiply, Self::Divide];

    /// Display symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator, returning `None` on division by zero
    ///
    /// # Examples
    /// ```
    /// use numeric_core::core::{Fraction, Operator};
    ///
    /// let seven = Fraction::integer(7);
    /// let half = Operator::Divide.apply(seven, Fraction::integer(14)).unwrap();
    /// assert_eq!(half, Fraction::new(1, 2).unwrap());
    /// assert!(Operator::Divide.apply(seven, Fraction::integer(0)).is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn apply(self, lhs: Fraction, rhs: Fraction) -> Option<Fraction> {
        APPLY[self as usize](lhs, rhs)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An ordered choice of operators for the three reduction steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment([Operator; 3]);

impl Assignment {
    #[must_use]
    pub const fn new(ops: [Operator; 3]) -> Self {
        Self(ops)
    }

    #[inline]
    #[must_use]
    pub const fn ops(&self) -> &[Operator; 3] {
        &self.0
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "({a}, {b}, {c})")
    }
}

use Operator::{Divide as D, Multiply as M, Subtract as S};

static PERMUTATIONS: [Assignment; 6] = [
    Assignment([S, M, D]),
    Assignment([S, D, M]),
    Assignment([M, S, D]),
    Assignment([M, D, S]),
    Assignment([D, S, M]),
    Assignment([D, M, S]),
];

const fn with_repetition() -> [Assignment; 27] {
    let mut out = [Assignment([S, S, S]); 27];
    let mut i = 0;
    while i < 27 {
        out[i] = Assignment([
            Operator::ALL[i / 9],
            Operator::ALL[(i / 3) % 3],
            Operator::ALL[i % 3],
        ]);
        i += 1;
    }
    out
}

static WITH_REPETITION: [Assignment; 27] = with_repetition();

/// Which operator assignments the reducer tries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchSpace {
    /// Each operator used exactly once: 6 assignments
    #[default]
    Permutations,
    /// Each slot chosen independently: 27 assignments
    WithRepetition,
}

impl SearchSpace {
    /// Assignments in the fixed order they are evaluated
    ///
    /// The order decides which assignment is reported when several reach the
    /// same minimal value.
    #[must_use]
    pub fn assignments(self) -> &'static [Assignment] {
        match self {
            Self::Permutations => &PERMUTATIONS,
            Self::WithRepetition => &WITH_REPETITION,
        }
    }
}

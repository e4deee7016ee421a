//! Evaluation of a single operator assignment against a group

use crate::core::{Assignment, Fraction, Group, Number};
use std::fmt;

/// How one assignment fared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Whole number in 1-26
    Valid(Number),
    /// Step `step` (1-3) divided by zero
    DivisionByZero { step: usize },
    /// Final value has a fractional part
    Fractional(Fraction),
    /// Whole number outside 1-26
    OutOfRange(i64),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Valid(n) => write!(f, "valid ({n})"),
            Self::DivisionByZero { step } => write!(f, "division by zero at step {step}"),
            Self::Fractional(v) => write!(f, "not whole ({v})"),
            Self::OutOfRange(v) => write!(f, "out of range ({v})"),
        }
    }
}

/// One assignment applied to one group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub assignment: Assignment,
    /// Value after each step; `None` from the step that divided by zero on
    pub steps: [Option<Fraction>; 3],
    pub outcome: Outcome,
}

impl Evaluation {
    /// The decoded number, if this assignment is valid
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<Number> {
        match self.outcome {
            Outcome::Valid(n) => Some(n),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self.outcome, Outcome::Valid(_))
    }
}

/// Compute `((a op1 b) op2 c) op3 d` exactly
///
/// Intermediate values may be fractional; only the final value has to be a
/// whole number in 1-26.
///
/// # Examples
/// ```
/// use numeric_core::core::{Assignment, Group, Operator::*};
/// use numeric_core::reducer::{Outcome, evaluate};
///
/// let hand = Group::from_letters("HAND").unwrap();
/// let eval = evaluate(&hand, Assignment::new([Subtract, Divide, Multiply]));
/// assert!(matches!(eval.outcome, Outcome::Valid(n) if n.value() == 2));
/// ```
#[must_use]
pub fn evaluate(group: &Group, assignment: Assignment) -> Evaluation {
    let [first, rest @ ..] =
        (*group.numbers()).map(|n| Fraction::integer(i64::from(n.value())));
    let mut steps = [None; 3];
    let mut acc = first;

    for (i, (op, operand)) in assignment.ops().iter().zip(rest).enumerate() {
        match op.apply(acc, operand) {
            Some(value) => {
                steps[i] = Some(value);
                acc = value;
            }
            None => {
                return Evaluation {
                    assignment,
                    steps,
                    outcome: Outcome::DivisionByZero { step: i + 1 },
                };
            }
        }
    }

    let outcome = match acc.to_integer() {
        None => Outcome::Fractional(acc),
        Some(whole) => Number::new(whole).map_or(Outcome::OutOfRange(whole), Outcome::Valid),
    };

    Evaluation {
        assignment,
        steps,
        outcome,
    }
}

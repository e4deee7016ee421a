//! Group reduction
//!
//! Tries every assignment in a [`SearchSpace`] against a [`Group`] and keeps
//! the smallest valid result: the group's numeric core.

mod evaluate;
mod observer;

pub use evaluate::{Evaluation, Outcome, evaluate};
pub use observer::{LogObserver, NoopObserver, Observer, TraceRecorder};

use crate::core::{Assignment, Group, Number, SearchSpace};

/// The numeric core of a group and the assignment that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Core {
    value: Number,
    assignment: Assignment,
}

impl Core {
    #[inline]
    #[must_use]
    pub const fn value(&self) -> Number {
        self.value
    }

    /// First assignment, in search order, that reached the core value
    #[inline]
    #[must_use]
    pub const fn assignment(&self) -> Assignment {
        self.assignment
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.value.letter()
    }
}

/// Find the numeric core of a group
///
/// Returns `None` when no assignment gives a whole number in 1-26.
///
/// # Examples
/// ```
/// use numeric_core::core::{Group, SearchSpace};
/// use numeric_core::reducer::reduce;
///
/// let hand = Group::from_letters("HAND").unwrap();
/// let core = reduce(&hand, SearchSpace::Permutations).unwrap();
/// assert_eq!(core.value().value(), 2);
/// assert_eq!(core.letter(), 'B');
/// ```
#[must_use]
pub fn reduce(group: &Group, space: SearchSpace) -> Option<Core> {
    reduce_with(group, space, &mut NoopObserver)
}

/// [`reduce`], reporting every evaluation to `observer`
pub fn reduce_with<O: Observer + ?Sized>(
    group: &Group,
    space: SearchSpace,
    observer: &mut O,
) -> Option<Core> {
    let mut best: Option<Core> = None;

    for &assignment in space.assignments() {
        let evaluation = evaluate(group, assignment);
        observer.observe(group, &evaluation);

        if let Some(value) = evaluation.value()
            && best.is_none_or(|b| value < b.value)
        {
            best = Some(Core { value, assignment });
        }
    }

    best
}

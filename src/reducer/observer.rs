//! Observers for the group search
//!
//! The reducer reports every evaluated assignment to an [`Observer`]. Plain
//! decoding uses [`NoopObserver`] or [`LogObserver`]; the `analyze` command
//! collects the full search with [`TraceRecorder`].

use super::Evaluation;
use crate::core::Group;
use log::trace;

/// Receives each assignment as it is evaluated
pub trait Observer {
    fn observe(&mut self, group: &Group, evaluation: &Evaluation);
}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn observe(&mut self, group: &Group, evaluation: &Evaluation) {
        (**self).observe(group, evaluation);
    }
}

/// Ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl Observer for NoopObserver {
    #[inline]
    fn observe(&mut self, _group: &Group, _evaluation: &Evaluation) {}
}

/// Emits one `trace` record per evaluation
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&mut self, group: &Group, evaluation: &Evaluation) {
        trace!(
            "{} {} -> {}",
            group.letters(),
            evaluation.assignment,
            evaluation.outcome
        );
    }
}

/// Keeps every evaluation in the order it was made
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    evaluations: Vec<Evaluation>,
}

impl TraceRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    #[must_use]
    pub fn into_evaluations(self) -> Vec<Evaluation> {
        self.evaluations
    }
}

impl Observer for TraceRecorder {
    fn observe(&mut self, _group: &Group, evaluation: &Evaluation) {
        self.evaluations.push(*evaluation);
    }
}

//! Collection of the rewrites performed by an algorithm.

use log::trace;
use std::fmt::Debug;

/// A sink for the steps of an algorithm, such as the [`Step`](crate::Step)s of the
/// [`RealField`](crate::RealField) simplifier.
///
/// Implemented for `()`, which discards every step and is what
/// [`ExpressionField::simplify`](crate::ExpressionField::simplify) uses, and for `Vec<S>`, which
/// keeps them in order.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}

/// Wraps another collector, logging each step at `trace` level before forwarding it.
#[derive(Debug)]
pub struct Logged<C> {
    inner: C,
}

impl<C> Logged<C> {
    /// Wraps the given collector.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    /// Returns the wrapped collector.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<S: Debug, C: StepCollector<S>> StepCollector<S> for Logged<C> {
    fn push(&mut self, step: S) {
        trace!("step: {:?}", step);
        self.inner.push(step);
    }
}

//! Recording the rewrites performed while putting a tree in canonical form.

/// Possible canonicalization steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `b + a = a + b`
    /// `b * a = a * b`
    SwapOperands,

    /// `a + (b + c) = a + b + c`
    /// `a * (b * c) = a * b * c`
    MergeSameTypeChildren,

    /// `+(a) = a`
    /// `*(a) = a`
    SquashUnaryHierarchy,
}

/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is implemented for the unit type `()`, which discards every step, and for
/// [`Vec`], which records them in order.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
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

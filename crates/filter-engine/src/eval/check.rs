use crate::predicate::Check;
use std::borrow::Borrow;

impl<V> Check<V> {
    /// Compare a field value against the compiled constant.
    ///
    /// `A` is the borrowed form of the field, so a `Check<String>` can test a
    /// `&str` without allocating. Floats use IEEE semantics: `NaN` matches
    /// nothing.
    pub fn test<A>(&self, actual: &A) -> bool
    where
        V: Borrow<A>,
        A: PartialOrd + ?Sized,
    {
        match self {
            Check::Equals(expected) => actual == Borrow::<A>::borrow(expected),
            Check::GreaterOrEqual(bound) => actual >= Borrow::<A>::borrow(bound),
            Check::LessOrEqual(bound) => actual <= Borrow::<A>::borrow(bound),
            Check::In(candidates) => candidates
                .iter()
                .any(|c| actual == Borrow::<A>::borrow(c)),
        }
    }
}

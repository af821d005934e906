//! The context that adds nothing.
//!
//! Running a capability in `Identity` gives the bare arithmetic result, so
//! tests use it as the baseline every other context is compared against.

use super::TypeConstructor;

/// Exactly one value, with no absence and no failure.
///
/// ```rust
/// use optikon::typeclass::{Functor, Identity};
///
/// let total = Identity::new(39).fmap(|n| n + 3);
/// assert_eq!(total.into_inner(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Identity<A>(pub(super) A);

impl<A> Identity<A> {
    /// Puts `value` into the context.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Takes the value back out.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

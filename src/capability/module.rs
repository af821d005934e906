//! Capability modules: one operation each, written only against `fmap`.

use std::fmt;

use super::combined::Combined;
use crate::typeclass::Functor;

/// A capability module adding one operation over any mappable context
/// holding an `A`.
///
/// Implementations may only use [`Functor::fmap`] (and other capabilities),
/// so the operation works unchanged for `Option`, `Result`, `Identity`,
/// `Box` or any other [`Functor`]. The concrete context is chosen by the
/// caller of [`Capability::apply`].
///
/// # Examples
///
/// ```rust
/// use optikon::capability::{AddOne, Capability};
/// use optikon::typeclass::Identity;
///
/// assert_eq!(AddOne.apply(Some(1)), Some(2));
/// assert_eq!(AddOne.apply(None::<i32>), None);
/// assert_eq!(AddOne.apply(Identity::new(41)), Identity::new(42));
/// ```
pub trait Capability<A> {
    /// Runs the operation inside `context`.
    fn apply<F>(&self, context: F) -> F
    where
        F: Functor<Inner = A, WithType<A> = F>;

    /// Combines this capability with `next`; the result runs `self` first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optikon::capability::{AddOne, AddTwo, Capability};
    ///
    /// let add_three = AddOne.then(AddTwo);
    /// assert_eq!(add_three.apply(Some(1)), Some(4));
    /// ```
    fn then<Next>(self, next: Next) -> Combined<Self, Next>
    where
        Self: Sized,
        Next: Capability<A>,
    {
        Combined::new(self, next)
    }
}

/// Adds one to the value in the context.
///
/// Arithmetic wraps on overflow, so every `i32` is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddOne;

impl Capability<i32> for AddOne {
    #[inline]
    fn apply<F>(&self, context: F) -> F
    where
        F: Functor<Inner = i32, WithType<i32> = F>,
    {
        context.fmap(|value| value.wrapping_add(1))
    }
}

/// Adds two to the value in the context.
///
/// Arithmetic wraps on overflow, so every `i32` is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AddTwo;

impl Capability<i32> for AddTwo {
    #[inline]
    fn apply<F>(&self, context: F) -> F
    where
        F: Functor<Inner = i32, WithType<i32> = F>,
    {
        context.fmap(|value| value.wrapping_add(2))
    }
}

/// A capability built from a plain function `A -> A`.
///
/// # Examples
///
/// ```rust
/// use optikon::capability::{Capability, Lifted};
/// use optikon::compose;
///
/// let add_one = |n: i32| n + 1;
/// let double = |n: i32| n * 2;
///
/// let double_then_add = Lifted::new(compose!(add_one, double));
/// assert_eq!(double_then_add.apply(Some(5)), Some(11));
/// ```
#[derive(Clone, Copy)]
pub struct Lifted<G> {
    function: G,
}

impl<G> Lifted<G> {
    /// Wraps `function` as a capability.
    #[must_use]
    pub const fn new(function: G) -> Self {
        Self { function }
    }
}

impl<A, G> Capability<A> for Lifted<G>
where
    G: Fn(A) -> A,
{
    #[inline]
    fn apply<F>(&self, context: F) -> F
    where
        F: Functor<Inner = A, WithType<A> = F>,
    {
        context.fmap(&self.function)
    }
}

impl<G> fmt::Debug for Lifted<G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Lifted").finish_non_exhaustive()
    }
}

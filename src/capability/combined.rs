//! Structural union of two capabilities.

use super::module::Capability;
use crate::typeclass::Functor;

/// Two capabilities combined into one.
///
/// `apply` runs `first` and feeds its result to `second`. Neither
/// constituent knows about the other; `Combined` only holds both. Nesting
/// combines any number of them, and because each step is a plain `fmap`,
/// the grouping does not change the result.
///
/// # Examples
///
/// ```rust
/// use optikon::capability::{AddOne, AddTwo, Capability, Combined};
///
/// let add_three = Combined::new(AddOne, AddTwo);
/// assert_eq!(add_three.apply(Some(-3)), Some(0));
///
/// let add_six = add_three.then(add_three);
/// assert_eq!(add_six.apply(Some(0)), Some(6));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Combined<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Combined<First, Second> {
    /// Combines `first` and `second`; `first` runs first.
    #[must_use]
    pub const fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }

    /// Returns the capability that runs first.
    pub const fn first(&self) -> &First {
        &self.first
    }

    /// Returns the capability that runs second.
    pub const fn second(&self) -> &Second {
        &self.second
    }

    /// Splits the combination back into its constituents.
    pub fn into_parts(self) -> (First, Second) {
        (self.first, self.second)
    }
}

impl<A, First, Second> Capability<A> for Combined<First, Second>
where
    First: Capability<A>,
    Second: Capability<A>,
{
    #[inline]
    fn apply<F>(&self, context: F) -> F
    where
        F: Functor<Inner = A, WithType<A> = F>,
    {
        self.second.apply(self.first.apply(context))
    }
}

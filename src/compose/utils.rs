//! Combinators used alongside [`compose!`](crate::compose!).

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// `compose!(identity, f)` and `compose!(f, identity)` both behave as `f`.
/// Mapping it over a functor must give the functor back unchanged.
///
/// # Examples
///
/// ```
/// use optikon::compose::identity;
/// use optikon::typeclass::Functor;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(Some(4).fmap(identity), Some(4));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

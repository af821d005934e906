//! The combined capability set used by the demo entry point.

use super::combined::Combined;
use super::module::{AddOne, AddTwo, Capability};
use crate::typeclass::Functor;

/// The union of the [`AddOne`] and [`AddTwo`] capability modules, plus
/// `add_three` defined in terms of both.
///
/// Every operation takes the context explicitly and is generic over it, so
/// the concrete [`Functor`] is picked at the call site.
///
/// # Examples
///
/// ```rust
/// use optikon::capability::App;
/// use optikon::typeclass::Identity;
///
/// let app = App::new();
/// assert_eq!(app.add_three(Some(1)), Some(4));
/// assert_eq!(app.add_three(Identity::new(-3)), Identity::new(0));
///
/// let failed: Result<i32, &str> = Err("timeout");
/// assert_eq!(app.add_three(failed), Err("timeout"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct App {
    service_one: AddOne,
    service_two: AddTwo,
}

impl App {
    /// Creates the capability set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            service_one: AddOne,
            service_two: AddTwo,
        }
    }

    /// Adds one inside `context`.
    #[inline]
    pub fn add_one<F>(&self, context: F) -> F
    where
        F: Functor<Inner = i32, WithType<i32> = F>,
    {
        self.service_one.apply(context)
    }

    /// Adds two inside `context`.
    #[inline]
    pub fn add_two<F>(&self, context: F) -> F
    where
        F: Functor<Inner = i32, WithType<i32> = F>,
    {
        self.service_two.apply(context)
    }

    /// Adds three inside `context`: `add_one` followed by `add_two`.
    #[inline]
    pub fn add_three<F>(&self, context: F) -> F
    where
        F: Functor<Inner = i32, WithType<i32> = F>,
    {
        self.add_two(self.add_one(context))
    }

    /// Returns `add_three` as a standalone capability that can be combined
    /// further.
    #[must_use]
    pub const fn add_three_capability(&self) -> Combined<AddOne, AddTwo> {
        Combined::new(self.service_one, self.service_two)
    }
}

/// Runs `block` with the combined capability set in scope.
///
/// # Examples
///
/// ```rust
/// use optikon::capability::app;
///
/// let result = app(|app| app.add_three(Some(1)));
/// assert_eq!(result, Some(4));
/// ```
pub fn app<R, B>(block: B) -> R
where
    B: FnOnce(&App) -> R,
{
    block(&App::new())
}

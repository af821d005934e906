//! Lens optics for focusing on struct fields.
//!
//! A Lens provides get/set access to a field within a larger structure.
//! Lenses compose, so a chain of them reaches arbitrarily deep fields
//! without hand-written traversal of the intermediate levels.
//!
//! # Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Examples
//!
//! ```
//! use optikon::optics::Lens;
//! use optikon::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Street { number: i32, name: String }
//!
//! let number_lens = lens!(Street, number);
//!
//! let street = Street { number: 221, name: "Baker Street".to_string() };
//! assert_eq!(*number_lens.get(&street), 221);
//!
//! let updated = number_lens.set(street.clone(), 222);
//! assert_eq!(updated.number, 222);
//! assert_eq!(street.number, 221);
//! ```

use std::marker::PhantomData;

use super::optional::LensPrismComposition;
use super::prism::Prism;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// `set` and `modify` consume the source and return a new value; the caller
/// keeps an unchanged original by passing a clone.
pub trait Lens<S, A> {
    /// Gets a reference to the focused field. Never fails.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Returns a new source with the focused field replaced by `value`.
    ///
    /// All other fields are carried over unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// Equivalent to `set(source, function(get(&source).clone()))`.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::Lens;
    /// use optikon::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Street { number: i32, name: String }
    ///
    /// let number_lens = lens!(Street, number);
    /// let street = Street { number: 10, name: "High Street".to_string() };
    /// let next_door = number_lens.modify(street, |number| number + 2);
    /// assert_eq!(next_door.number, 12);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Modifies the focused field by applying a function to a reference.
    ///
    /// Unlike [`Lens::modify`] this does not require `A: Clone`.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::Lens;
    /// use optikon::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Company { name: String }
    ///
    /// let name_lens = lens!(Company, name);
    /// let company = Company { name: "arrow".to_string() };
    /// let shouted = name_lens.modify_ref(company, |name| name.to_uppercase());
    /// assert_eq!(shouted.name, "ARROW");
    /// ```
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// Composition is associative: `a.compose(b).compose(c)` and
    /// `a.compose(b.compose(c))` get and set the same field.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::Lens;
    /// use optikon::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Street { number: i32, name: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { city: String, street: Street }
    ///
    /// let address_street_name = lens!(Address, street).compose(lens!(Street, name));
    ///
    /// let address = Address {
    ///     city: "London".to_string(),
    ///     street: Street { number: 221, name: "Baker Street".to_string() },
    /// };
    ///
    /// assert_eq!(*address_street_name.get(&address), "Baker Street");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Composes this lens with a prism, producing an
    /// [`Optional`](super::Optional) that focuses on one variant of the
    /// field's value.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::{Lens, Optional};
    /// use optikon::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outcome { Done(String), Pending }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Request { outcome: Outcome }
    ///
    /// let done_body = lens!(Request, outcome).compose_prism(prism!(Outcome, Done));
    ///
    /// let finished = Request { outcome: Outcome::Done("ok".to_string()) };
    /// assert_eq!(done_body.get_option(&finished), Some(&"ok".to_string()));
    ///
    /// let waiting = Request { outcome: Outcome::Pending };
    /// assert_eq!(done_body.get_option(&waiting), None);
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }
}

/// A lens implemented using getter and setter functions.
///
/// The `lens!` macro and `#[derive(Lenses)]` both generate a `FunctionLens`.
///
/// # Example
///
/// ```
/// use optikon::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Street { number: i32, name: String }
///
/// let number_lens = FunctionLens::new(
///     |street: &Street| &street.number,
///     |street: Street, number: i32| Street { number, ..street },
/// );
///
/// let street = Street { number: 4, name: "Privet Drive".to_string() };
/// assert_eq!(*number_lens.get(&street), 4);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// `first` focuses on an intermediate structure `A`, `second` focuses on a
/// field within `A`. Setting clones the intermediate, updates it through
/// `second` and writes it back through `first`.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        let intermediate = self.first.get(source);
        self.second.get(intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a lens for a struct field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optikon::optics::Lens;
/// use optikon::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Street { number: i32, name: String }
///
/// let number_lens = lens!(Street, number);
/// let street = Street { number: 1, name: "Main".to_string() };
///
/// let updated = number_lens.set(street, 100);
/// assert_eq!(updated, Street { number: 100, name: "Main".to_string() });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

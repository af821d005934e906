//! Optional optics for focusing on values that may or may not be present.
//!
//! An Optional is what a Lens and a Prism compose into: a field whose value
//! is one variant of an enum, or a field inside one variant's payload.
//!
//! # Laws
//!
//! When the element is present:
//!
//! 1. **`GetOptionSet` Law**: `optional.set(source.clone(), optional.get_option(&source).unwrap().clone()) == source`
//! 2. **`SetGetOption` Law**: `optional.get_option(&optional.set(source, value)) == Some(&value)`

use std::marker::PhantomData;

use super::lens::Lens;
use super::prism::Prism;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Returns a reference to the focused element, or `None` if absent.
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Sets the focused element to a new value.
    ///
    /// A source without the element is returned unchanged, so
    /// `get_option(&set(s, v))` is `get_option(&s).map(|_| &v)`.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused element if present.
    ///
    /// Returns `None` when the element is absent.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let maybe_value = self.get_option(&source).cloned();
        maybe_value.map(|value| {
            let new_value = function(value);
            self.set(source, new_value)
        })
    }

    /// Modifies the focused element if present, otherwise returns the source unchanged.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
        S: Clone,
    {
        self.modify_option(source.clone(), function)
            .unwrap_or(source)
    }

    /// Returns `true` if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with a prism to focus on a nested variant.
    fn compose<B, P>(self, other: P) -> ComposedOptional<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, other)
    }
}

/// The result of composing a Lens with a Prism.
///
/// `set` writes through the lens only when the field already holds the
/// prism's variant.
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates a new `LensPrismComposition`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
    A: 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a B> {
        let intermediate = self.lens.get(source);
        self.prism.preview(intermediate)
    }

    fn set(&self, source: S, value: B) -> S {
        if self.prism.preview(self.lens.get(&source)).is_none() {
            return source;
        }
        let new_intermediate = self.prism.review(value);
        self.lens.set(source, new_intermediate)
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// The result of composing a Prism with a Lens into the variant's payload.
///
/// A source in another variant has no payload to update, so `set` returns
/// it unchanged.
pub struct PrismLensComposition<P, L, A> {
    prism: P,
    lens: L,
    _marker: PhantomData<A>,
}

impl<P, L, A> PrismLensComposition<P, L, A> {
    /// Creates a new `PrismLensComposition`.
    #[must_use]
    pub const fn new(prism: P, lens: L) -> Self {
        Self {
            prism,
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P, L> Optional<S, B> for PrismLensComposition<P, L, A>
where
    P: Prism<S, A>,
    L: Lens<A, B>,
    A: Clone + 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.prism
            .preview(source)
            .map(|payload| self.lens.get(payload))
    }

    fn set(&self, source: S, value: B) -> S {
        match self.prism.preview(&source).cloned() {
            Some(payload) => self.prism.review(self.lens.set(payload, value)),
            None => source,
        }
    }
}

impl<P: Clone, L: Clone, A> Clone for PrismLensComposition<P, L, A> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P: std::fmt::Debug, L: std::fmt::Debug, A> std::fmt::Debug for PrismLensComposition<P, L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PrismLensComposition")
            .field("prism", &self.prism)
            .field("lens", &self.lens)
            .finish()
    }
}

/// The result of composing an Optional with a Prism.
///
/// `set` only writes when both the outer element and the inner variant are
/// present.
pub struct ComposedOptional<O1, O2, A> {
    first: O1,
    second: O2,
    _marker: PhantomData<A>,
}

impl<O1, O2, A> ComposedOptional<O1, O2, A> {
    /// Creates a new `ComposedOptional`.
    #[must_use]
    pub const fn new(first: O1, second: O2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O1, O2> Optional<S, B> for ComposedOptional<O1, O2, A>
where
    O1: Optional<S, A>,
    O2: Prism<A, B>,
    A: 'static,
{
    fn get_option<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.preview(intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        let inner_present = self
            .first
            .get_option(&source)
            .is_some_and(|intermediate| self.second.preview(intermediate).is_some());
        if !inner_present {
            return source;
        }
        let new_intermediate = self.second.review(value);
        self.first.set(source, new_intermediate)
    }
}

impl<O1: Clone, O2: Clone, A> Clone for ComposedOptional<O1, O2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O1: std::fmt::Debug, O2: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O1, O2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

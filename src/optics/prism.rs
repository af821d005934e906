//! Prism optics for focusing on enum variants.
//!
//! A Prism gives match/construct access to one variant of a closed tagged
//! union. Matching is total: a source in another variant yields `None`.
//!
//! # Laws
//!
//! 1. **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(&value)`
//! 2. **ReviewPreview Law**: if `prism.preview(&source) == Some(value)` then
//!    `prism.review(value.clone()) == source`
//!
//! # Examples
//!
//! ```
//! use optikon::optics::Prism;
//! use optikon::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Reply {
//!     Body(String),
//!     Empty,
//! }
//!
//! let body_prism = prism!(Reply, Body);
//!
//! let reply = Reply::Body("hello".to_string());
//! assert_eq!(body_prism.preview(&reply), Some(&"hello".to_string()));
//! assert_eq!(body_prism.preview(&Reply::Empty), None);
//!
//! assert_eq!(body_prism.review("again".to_string()), Reply::Body("again".to_string()));
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::optional::PrismLensComposition;

/// A Prism focuses on a single variant of an enum.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the variant)
pub trait Prism<S, A> {
    /// Returns a reference to the payload if `source` is the focused variant.
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A>;

    /// Wraps a payload back into the enum. Never fails.
    fn review(&self, value: A) -> S;

    /// Extracts the payload by value if `source` is the focused variant.
    fn preview_owned(&self, source: S) -> Option<A>;

    /// Modifies the payload if the source is the focused variant.
    ///
    /// Returns `None` when the variant does not match.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::Prism;
    /// use optikon::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Reply { Body(String), Empty }
    ///
    /// let body_prism = prism!(Reply, Body);
    ///
    /// let shouted = body_prism.modify_option(Reply::Body("hi".to_string()), |body| body.to_uppercase());
    /// assert_eq!(shouted, Some(Reply::Body("HI".to_string())));
    ///
    /// assert_eq!(body_prism.modify_option(Reply::Empty, |body| body.to_uppercase()), None);
    /// ```
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview_owned(source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the payload if the source is the focused variant, otherwise
    /// returns the source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::Prism;
    /// use optikon::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Reply { Body(String), Empty }
    ///
    /// let body_prism = prism!(Reply, Body);
    /// assert_eq!(body_prism.modify_or_identity(Reply::Empty, |body| body + "!"), Reply::Empty);
    /// ```
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        S: Clone,
    {
        self.modify_option(source.clone(), function)
            .unwrap_or(source)
    }

    /// Composes this prism with another prism to focus on a nested variant.
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::Prism;
    /// use optikon::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Failure { Http(u16), Timeout }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outcome { Done(String), Failed(Failure) }
    ///
    /// let http_status = prism!(Outcome, Failed).compose(prism!(Failure, Http));
    ///
    /// assert_eq!(http_status.preview(&Outcome::Failed(Failure::Http(503))), Some(&503));
    /// assert_eq!(http_status.preview(&Outcome::Failed(Failure::Timeout)), None);
    /// assert_eq!(http_status.review(404), Outcome::Failed(Failure::Http(404)));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }

    /// Composes this prism with a lens into the variant's payload, producing
    /// an [`Optional`](super::Optional).
    ///
    /// # Example
    ///
    /// ```
    /// use optikon::optics::{Optional, Prism};
    /// use optikon::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Page { title: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Reply { Page(Page), Empty }
    ///
    /// let page_title = prism!(Reply, Page).compose_lens(lens!(Page, title));
    ///
    /// let reply = Reply::Page(Page { title: "Home".to_string() });
    /// assert_eq!(page_title.get_option(&reply), Some(&"Home".to_string()));
    /// assert_eq!(page_title.get_option(&Reply::Empty), None);
    /// ```
    fn compose_lens<B, L>(self, lens: L) -> PrismLensComposition<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        PrismLensComposition::new(self, lens)
    }
}

/// A prism implemented using preview, review, and `preview_owned` functions.
///
/// The `prism!` macro and `#[derive(Prisms)]` both generate a `FunctionPrism`.
///
/// # Example
///
/// ```
/// use optikon::optics::{Prism, FunctionPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Reply { Body(String), Empty }
///
/// let body_prism = FunctionPrism::new(
///     |reply: &Reply| match reply {
///         Reply::Body(body) => Some(body),
///         Reply::Empty => None,
///     },
///     Reply::Body,
///     |reply: Reply| match reply {
///         Reply::Body(body) => Some(body),
///         Reply::Empty => None,
///     },
/// );
///
/// assert_eq!(body_prism.preview(&Reply::Body("x".to_string())), Some(&"x".to_string()));
/// ```
pub struct FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    preview_function: Pr,
    review_function: Re,
    preview_owned_function: PrOwned,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, Pr, Re, PrOwned> FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    /// Creates a new `FunctionPrism` from preview, review, and `preview_owned` functions.
    #[must_use]
    pub const fn new(
        preview_function: Pr,
        review_function: Re,
        preview_owned_function: PrOwned,
    ) -> Self {
        Self {
            preview_function,
            review_function,
            preview_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> Prism<S, A> for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }

    fn preview_owned(&self, source: S) -> Option<A> {
        (self.preview_owned_function)(source)
    }
}

impl<S, A, Pr, Re, PrOwned> Clone for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A> + Clone,
    Re: Fn(A) -> S + Clone,
    PrOwned: Fn(S) -> Option<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            preview_owned_function: self.preview_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re, PrOwned> std::fmt::Debug for FunctionPrism<S, A, Pr, Re, PrOwned>
where
    Pr: Fn(&S) -> Option<&A>,
    Re: Fn(A) -> S,
    PrOwned: Fn(S) -> Option<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// `first` focuses on an intermediate enum `A`, `second` on a variant of it.
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism from an outer and an inner prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
    A: 'static,
{
    fn preview<'a>(&self, source: &'a S) -> Option<&'a B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(intermediate))
    }

    fn review(&self, value: B) -> S {
        let intermediate = self.second.review(value);
        self.first.review(intermediate)
    }

    fn preview_owned(&self, source: S) -> Option<B> {
        self.first
            .preview_owned(source)
            .and_then(|intermediate| self.second.preview_owned(intermediate))
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// Creates a prism for a single-field tuple variant.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// Unit variants are covered by `#[derive(Prisms)]`, which focuses them on `()`.
///
/// # Example
///
/// ```
/// use optikon::optics::Prism;
/// use optikon::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Maybe<T> {
///     Just(T),
///     Nothing,
/// }
///
/// let just_prism = prism!(Maybe<i32>, Just);
///
/// assert_eq!(just_prism.preview(&Maybe::Just(42)), Some(&42));
/// assert_eq!(just_prism.preview(&Maybe::Nothing), None);
/// assert_eq!(just_prism.review(100), Maybe::Just(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                $enum_type::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match *source {
                $enum_type::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                <$enum_type>::$variant(ref value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => Some(value),
                #[allow(unreachable_patterns)]
                _ => None,
            },
        )
    };
}

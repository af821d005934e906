//! Naming a context independently of what it holds.
//!
//! A capability has to return "the same context it was given", whether that
//! is `Option<i32>`, `Result<i32, E>` or `Box<i32>`. Rust has no
//! higher-kinded types, so each context states which type it currently
//! holds (`Inner`) and what it becomes when it holds something else
//! (`WithType<B>`). A capability then asks for `WithType<A> = F`: mapping
//! an `A` to an `A` gives back exactly `F`.
//!
//! ```rust
//! use optikon::typeclass::TypeConstructor;
//!
//! fn emptied<F>(_context: F) -> F::WithType<String>
//! where
//!     F: TypeConstructor,
//!     F::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let nothing: Option<String> = emptied(Some(1));
//! assert_eq!(nothing, None);
//! ```

/// A context applied to `Inner`, able to name itself applied to any `B`.
///
/// Implementations must satisfy `WithType<Inner> == Self`.
pub trait TypeConstructor {
    /// The type currently held.
    type Inner;

    /// This context holding a `B` instead.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

// The error type rides along unchanged.
impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Box<T> {
    type Inner = T;
    type WithType<B> = Box<B>;
}

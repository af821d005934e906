//! Derive macros for optikon optics.
//!
//! This crate generates optics (Lens and Prism) accessors for Rust types so
//! that no per-field traversal code has to be written by hand.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optikon::optics::Lens;
//! use optikon_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Street {
//!     number: i32,
//!     name: String,
//! }
//!
//! // Generated methods:
//! // - Street::number_lens() -> impl Lens<Street, i32>
//! // - Street::name_lens() -> impl Lens<Street, String>
//!
//! let street = Street { number: 221, name: "Baker Street".to_string() };
//! assert_eq!(*Street::number_lens().get(&street), 221);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optikon::optics::Prism;
//! use optikon_derive::Prisms;
//!
//! #[derive(Clone, Prisms)]
//! enum NetworkError {
//!     Http(String),
//!     Timeout,
//! }
//!
//! // Generated methods:
//! // - NetworkError::http_prism() -> impl Prism<NetworkError, String>
//! // - NetworkError::timeout_prism() -> impl Prism<NetworkError, ()>
//!
//! let error = NetworkError::Http("404".to_string());
//! assert_eq!(NetworkError::http_prism().preview(&error), Some(&"404".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating Lens implementations for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// # Requirements
///
/// - The struct must have named fields (tuple and unit structs are rejected)
/// - The struct should implement `Clone` so lenses can be composed
///
/// # Generics
///
/// Generic structs are supported; call the method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(*lens.get(&container), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism implementations for enum variants.
///
/// Generates one method per variant named `{variant_name_snake_case}_prism()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `Timeout`): `impl Prism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Http(HttpError)`): `impl Prism<Enum, HttpError>`
///
/// Variants with several fields (tuple or named) are rejected with a compile
/// error; wrap their fields in a struct and use a single-field variant.
///
/// # Example
///
/// ```rust,ignore
/// use optikon::optics::Prism;
/// use optikon_derive::Prisms;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum NetworkResult {
///     Success(String),
///     Timeout,
/// }
///
/// let success = NetworkResult::Success("body".to_string());
/// assert!(NetworkResult::success_prism().preview(&success).is_some());
/// assert_eq!(NetworkResult::timeout_prism().preview(&success), None);
/// assert_eq!(NetworkResult::timeout_prism().review(()), NetworkResult::Timeout);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}

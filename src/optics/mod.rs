//! Optics for immutable data manipulation.
//!
//! Optics are composable accessors for immutable data structures. They
//! focus on one part of a value and read or rebuild it without touching
//! the rest, however deep the part sits.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens  . Lens  = Lens
//! Prism . Prism = Prism
//! Lens  . Prism = Optional
//! Prism . Lens  = Optional
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`Prism`]: Focus on a variant of an enum (preview/review access)
//! - [`Optional`]: Focus on a value that may or may not exist
//!
//! Accessors are normally generated with `#[derive(Lenses)]` and
//! `#[derive(Prisms)]`; the [`lens!`](crate::lens) and
//! [`prism!`](crate::prism) macros and the `Function*` constructors cover
//! types that cannot carry a derive.
//!
//! # Example with Lens
//!
//! ```
//! use optikon::optics::Lens;
//! use optikon::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String, zip: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Company { name: String, address: Address }
//!
//! let company_city = lens!(Company, address).compose(lens!(Address, city));
//!
//! let company = Company {
//!     name: "Kategory".to_string(),
//!     address: Address { city: "Tokyo".to_string(), zip: "100-0001".to_string() },
//! };
//!
//! assert_eq!(*company_city.get(&company), "Tokyo");
//!
//! let moved = company_city.set(company.clone(), "Osaka".to_string());
//! assert_eq!(moved.address.city, "Osaka");
//! assert_eq!(moved.address.zip, "100-0001");
//! assert_eq!(company.address.city, "Tokyo");
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use optikon::optics::Prism;
//! use optikon::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Reply { Body(String), Empty }
//!
//! let body_prism = prism!(Reply, Body);
//!
//! assert_eq!(body_prism.preview(&Reply::Body("ok".to_string())), Some(&"ok".to_string()));
//! assert_eq!(body_prism.preview(&Reply::Empty), None);
//! assert_eq!(body_prism.review("ok".to_string()), Reply::Body("ok".to_string()));
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetPut Law**: `lens.set(source, lens.get(&source).clone()) == source`
//! 2. **PutGet Law**: `lens.get(&lens.set(source, value)) == &value`
//! 3. **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! # Prism Laws
//!
//! 1. **PreviewReview Law**: `prism.preview(&prism.review(value)) == Some(&value)`
//! 2. **ReviewPreview Law**: if `prism.preview(&source)` is `Some(value)` then
//!    `prism.review(value.clone()) == source`

mod lens;
mod optional;
mod prism;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;

pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;

pub use optional::ComposedOptional;
pub use optional::LensPrismComposition;
pub use optional::Optional;
pub use optional::PrismLensComposition;

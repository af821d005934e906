//! Capability composition over mappable contexts.
//!
//! A capability module is a unit defining exactly one operation, written
//! generically over any [`Functor`](crate::typeclass::Functor) and using
//! only `fmap`. Modules are combined explicitly:
//!
//! - [`Capability`]: the module trait, with [`Capability::then`] for combining
//! - [`AddOne`], [`AddTwo`]: the two constituent modules
//! - [`Lifted`]: a module made from a plain function
//! - [`Combined`]: the structural union of two modules
//! - [`App`]: the combined set exposing `add_one`, `add_two` and `add_three`
//! - [`app`]: runs a block with an [`App`] in scope
//!
//! The concrete context is only named where an operation is invoked.
//!
//! # Examples
//!
//! ```rust
//! use optikon::capability::{AddOne, AddTwo, App, Capability};
//! use optikon::typeclass::Identity;
//!
//! let add_three = AddOne.then(AddTwo);
//!
//! assert_eq!(add_three.apply(Some(1)), Some(4));
//! assert_eq!(add_three.apply(None::<i32>), None);
//! assert_eq!(add_three.apply(Identity::new(-3)), Identity::new(0));
//! assert_eq!(App::new().add_three(Some(1)), add_three.apply(Some(1)));
//! ```

mod app;
mod combined;
mod module;

pub use app::{App, app};
pub use combined::Combined;
pub use module::{AddOne, AddTwo, Capability, Lifted};

//! Type class traits for mappable contexts.
//!
//! This module provides the single abstraction the capability layer is
//! built on:
//!
//! - [`Functor`]: Mapping over container values
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate HKT
//! behavior, so `Functor` can talk about "the same container holding a
//! different type" without naming the container.
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: Trait for emulating higher-kinded types
//! - [`Identity`]: Identity wrapper type (identity functor)
//!
//! # Examples
//!
//! ```rust
//! use optikon::typeclass::{Functor, Identity};
//!
//! let present: Option<i32> = Some(1);
//! assert_eq!(present.fmap(|n| n + 3), Some(4));
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fmap(|n| n + 3), None);
//!
//! assert_eq!(Identity::new(1).fmap(|n| n * 10), Identity::new(10));
//! ```

mod functor;
mod higher;
mod identity;

pub use functor::Functor;
pub use higher::TypeConstructor;
pub use identity::Identity;

static_assertions::assert_impl_all!(Option<i32>: Functor);
static_assertions::assert_impl_all!(Result<i32, String>: Functor);
static_assertions::assert_impl_all!(Box<i32>: Functor);
static_assertions::assert_impl_all!(Identity<i32>: Functor);

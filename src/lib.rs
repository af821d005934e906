//! # optikon
//!
//! Composable optics over immutable data, plus capability modules written
//! against an abstract mappable context.
//!
//! ## Overview
//!
//! - **Type Classes**: `Functor` over a GAT-based type constructor
//! - **Function Composition**: the `compose!` macro and `identity`
//! - **Optics**: Lens, Prism and Optional, with composition across kinds
//! - **Derives**: `#[derive(Lenses)]` and `#[derive(Prisms)]` generate one
//!   optic per field or variant
//! - **Capabilities**: `AddOne`, `AddTwo` and their combination, generic over
//!   any `Functor`
//! - **Model**: nested employee records and a network result hierarchy
//!
//! ## Feature Flags
//!
//! - `typeclass`: `Functor` and its instances
//! - `compose`: function composition utilities
//! - `optics`: Lens, Prism, Optional
//! - `derive`: the `Lenses` and `Prisms` derive macros
//! - `capability`: capability modules (requires `typeclass` and `compose`)
//! - `model`: the illustrative data types (requires `derive`)
//! - `demo`: the `optikon` binary
//! - `serde`: `Serialize`/`Deserialize` for the model types
//! - `full`: enable everything
//!
//! ## Example
//!
//! ```rust
//! use optikon::prelude::*;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Street {
//!     number: i32,
//!     name: String,
//! }
//!
//! let street = Street { number: 1, name: "Main".to_string() };
//! let renumbered = Street::number_lens().modify(street, |number| number + 1);
//! assert_eq!(renumbered.number, 2);
//!
//! let result = app(|app| app.add_three(Some(1)));
//! assert_eq!(result, Some(4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

// Derive output names `::optikon::optics`, which must resolve inside this crate too.
extern crate self as optikon;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optikon::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::{Lenses, Prisms};

    #[cfg(feature = "capability")]
    pub use crate::capability::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "capability")]
pub mod capability;

#[cfg(feature = "model")]
pub mod model;

#[cfg(feature = "derive")]
pub use optikon_derive::{Lenses, Prisms};

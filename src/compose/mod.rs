//! Function composition utilities.
//!
//! - [`compose!`]: Compose functions right-to-left (mathematical composition)
//! - [`identity`]: The identity function, the unit of composition
//!
//! These are the vocabulary the functor laws are stated in
//! (`fa.fmap(compose!(g, f)) == fa.fmap(f).fmap(g)`), and they let plain
//! functions be chained the same way capability modules are.
//!
//! # Examples
//!
//! ```
//! use optikon::compose;
//! use optikon::compose::identity;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn add_two(x: i32) -> i32 { x + 2 }
//!
//! let add_three = compose!(add_two, add_one);
//! assert_eq!(add_three(1), 4);
//!
//! let unchanged = compose!(identity, add_one);
//! assert_eq!(unchanged(1), add_one(1));
//! ```

mod compose_macro;
mod utils;

pub use utils::identity;

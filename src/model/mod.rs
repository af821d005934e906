//! Illustrative data: nested immutable records and a closed result hierarchy.
//!
//! Every record derives [`Lenses`](crate::Lenses) and both enums derive
//! [`Prisms`](crate::Prisms), so deep reads and rebuilds go through
//! composed optics instead of hand-written traversal.
//!
//! # Examples
//!
//! ```rust
//! use optikon::model::{Address, Company, Employee, Street};
//! use optikon::optics::Lens;
//!
//! let employee = Employee::new(
//!     "John Doe",
//!     Company::new(
//!         "Kategory",
//!         Address::new("Functional city", Street::new(42, "lambda street")),
//!     ),
//! );
//!
//! let street_name = Employee::company_street_name_lens();
//! let capitalized = street_name.modify(employee.clone(), |name| name.to_uppercase());
//!
//! assert_eq!(capitalized.company.address.street.name, "LAMBDA STREET");
//! assert_eq!(employee.company.address.street.name, "lambda street");
//! ```

mod network;
mod records;

pub use network::{HttpError, NetworkError, NetworkResult, Success};
pub use records::{Address, Company, Db, Employee, Street};

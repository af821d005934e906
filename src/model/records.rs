//! Nested immutable records.
//!
//! Construction never fails; fields are unconstrained.

use std::collections::BTreeMap;

use crate::Lenses;
use crate::optics::Lens;

/// A street: house number and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Street {
    /// House number.
    pub number: i32,
    /// Street name.
    pub name: String,
}

impl Street {
    /// Creates a street.
    pub fn new(number: i32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
        }
    }
}

/// An address: a city and a street within it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Address {
    /// City name.
    pub city: String,
    /// Street within the city.
    pub street: Street,
}

impl Address {
    /// Creates an address.
    pub fn new(city: impl Into<String>, street: Street) -> Self {
        Self {
            city: city.into(),
            street,
        }
    }
}

/// A company and where it is located.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Company {
    /// Company name.
    pub name: String,
    /// Registered address.
    pub address: Address,
}

impl Company {
    /// Creates a company.
    pub fn new(name: impl Into<String>, address: Address) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }
}

/// An employee and the company they work for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    /// Employee name.
    pub name: String,
    /// Employer.
    pub company: Company,
}

impl Employee {
    /// Creates an employee.
    pub fn new(name: impl Into<String>, company: Company) -> Self {
        Self {
            name: name.into(),
            company,
        }
    }

    /// Lens from an employee to the name of their company's street.
    #[must_use]
    pub fn company_street_name_lens() -> impl Lens<Self, String> + Clone {
        Self::company_lens()
            .compose(Company::address_lens())
            .compose(Address::street_lens())
            .compose(Street::name_lens())
    }
}

/// A keyed table of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Lenses)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Db {
    /// Rows by key.
    pub content: BTreeMap<i32, String>,
}

impl Db {
    /// Creates a table from existing rows.
    pub const fn new(content: BTreeMap<i32, String>) -> Self {
        Self { content }
    }
}

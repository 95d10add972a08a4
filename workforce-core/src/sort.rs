//! Sort keys and directions for employee listings.
//!
//! Only a closed set of document attributes may be used as a sort or page
//! key. Any other requested field is rejected with [`InvalidSortField`] at
//! the transport boundary before it ever reaches the store.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Sort direction for listing results.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A to Z, 0 to 9, earliest to latest).
    Asc,
    /// Descending order (Z to A, 9 to 0, latest to earliest).
    Desc,
}

/// Closed enumeration of document attributes that may be used as sort keys.
///
/// Each variant carries the underlying document attribute name via
/// [`SortField::attribute`]. No other attribute is ever a valid sort key.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// The store-assigned primary key.
    Id,
    /// The employee's name.
    Name,
    /// The employee's age.
    Age,
}

impl SortField {
    /// Returns the document attribute name this sort key maps to.
    pub fn attribute(&self) -> &'static str {
        match self {
            SortField::Id => "_id",
            SortField::Name => "name",
            SortField::Age => "age",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Id => write!(f, "id"),
            SortField::Name => write!(f, "name"),
            SortField::Age => write!(f, "age"),
        }
    }
}

/// Request-validation error for a sort key outside the closed enumeration.
///
/// This is a transport-level rejection, not a store fault: it should be
/// raised while parsing request parameters, before any store call is made.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid sort field: {0}")]
pub struct InvalidSortField(pub String);

impl FromStr for SortField {
    type Err = InvalidSortField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "name" => Ok(SortField::Name),
            "age" => Ok(SortField::Age),
            other => Err(InvalidSortField(other.to_string())),
        }
    }
}

/// Sort specification for listing results.
///
/// Couples a whitelisted [`SortField`] with a [`SortDirection`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    /// The field to sort by.
    pub field: SortField,
    /// The sort direction.
    pub direction: SortDirection,
}

impl Sort {
    /// Creates a new sort specification.
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Ascending sort on the given field.
    pub fn asc(field: SortField) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    /// Descending sort on the given field.
    pub fn desc(field: SortField) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields_case_insensitively() {
        assert_eq!("id".parse::<SortField>().unwrap(), SortField::Id);
        assert_eq!("NAME".parse::<SortField>().unwrap(), SortField::Name);
        assert_eq!("Age".parse::<SortField>().unwrap(), SortField::Age);
    }

    #[test]
    fn rejects_fields_outside_the_enumeration() {
        let err = "email".parse::<SortField>().unwrap_err();

        assert_eq!(err, InvalidSortField("email".to_string()));
    }

    #[test]
    fn maps_to_document_attribute_names() {
        assert_eq!(SortField::Id.attribute(), "_id");
        assert_eq!(SortField::Name.attribute(), "name");
        assert_eq!(SortField::Age.attribute(), "age");
    }
}

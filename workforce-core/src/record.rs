//! Wire representation of an employee.
//!
//! [`EmployeeRecord`] is the shape exchanged with the transport layer. It is
//! structurally isomorphic to the persisted [`EmployeeDocument`](crate::document::EmployeeDocument);
//! the [`EmployeeMapper`](crate::mapper::EmployeeMapper) converts between the two at the
//! service boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee as seen on the wire.
///
/// `id` is server-assigned: absent (or ignored) on create, authoritative on
/// read, update, and delete. All other optional fields keep their
/// absent-value semantics through the service: a missing `age` stays
/// missing, it is never defaulted.
///
/// # Example
///
/// ```ignore
/// use workforce_core::record::EmployeeRecord;
///
/// let record = EmployeeRecord {
///     id: None,
///     name: "Alice".to_string(),
///     age: Some(30),
///     date_of_birth: None,
///     email: "alice@example.com".to_string(),
/// };
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Opaque string identifier assigned by the store. Read-only on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Full name of the employee.
    pub name: String,
    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    /// Calendar date of birth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    /// Contact email address.
    pub email: String,
}

//! Persisted representation of an employee.
//!
//! [`EmployeeDocument`] is the shape written to and read from the document
//! store. It carries the same fields as the wire record; the only difference
//! is that the identifier serializes under the store's `_id` key and is
//! omitted entirely when the store has not assigned one yet.

use bson::{Bson, de::deserialize_from_bson, ser::serialize_to_bson};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

/// Name of the collection all employee documents live in.
pub const COLLECTION_NAME: &str = "employees";

/// An employee as stored in the document store.
///
/// The `id` is the primary key: assigned by the store on first insert,
/// immutable thereafter. Documents are mutated in place by full overwrite;
/// there is no soft delete and no versioning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeDocument {
    /// Store-assigned opaque string primary key.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
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

impl EmployeeDocument {
    /// Converts this document to a BSON value for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_bson(&self) -> StoreResult<Bson> {
        Ok(serialize_to_bson(self)?)
    }

    /// Creates a document from a BSON value read back from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_bson(bson: Bson) -> StoreResult<Self> {
        Ok(deserialize_from_bson(bson)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bson_round_trip_preserves_all_fields() {
        let document = EmployeeDocument {
            id: Some("64f0c3".to_string()),
            name: "Alice".to_string(),
            age: Some(30),
            date_of_birth: NaiveDate::from_ymd_opt(1995, 1, 20),
            email: "alice@example.com".to_string(),
        };

        let restored = EmployeeDocument::from_bson(document.to_bson().unwrap()).unwrap();

        assert_eq!(restored, document);
    }

    #[test]
    fn id_serializes_under_store_key() {
        let document = EmployeeDocument {
            id: Some("64f0c3".to_string()),
            name: "Alice".to_string(),
            age: None,
            date_of_birth: None,
            email: "alice@example.com".to_string(),
        };

        let bson = document.to_bson().unwrap();
        let map = bson.as_document().unwrap();

        assert_eq!(map.get("_id"), Some(&Bson::String("64f0c3".to_string())));
        assert!(map.get("id").is_none());
    }

    #[test]
    fn unassigned_id_is_absent_from_bson() {
        let document = EmployeeDocument {
            id: None,
            name: "Alice".to_string(),
            age: None,
            date_of_birth: None,
            email: "alice@example.com".to_string(),
        };

        let bson = document.to_bson().unwrap();

        assert!(bson.as_document().unwrap().get("_id").is_none());
    }
}

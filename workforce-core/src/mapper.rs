//! Conversion between the wire and persisted employee shapes.
//!
//! The two shapes are structurally isomorphic, so the mapper is a pure,
//! allocation-only, field-by-field move in both directions. No validation
//! and no defaulting happen here: an absent field on input stays absent on
//! output. Because both shapes are statically known, a shape mismatch is
//! impossible by construction, which is why neither direction returns a
//! `Result`.

use crate::{document::EmployeeDocument, record::EmployeeRecord};

/// Stateless bidirectional converter between [`EmployeeRecord`] and
/// [`EmployeeDocument`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmployeeMapper;

impl EmployeeMapper {
    /// Converts a wire record into a persistable document.
    pub fn to_document(&self, record: EmployeeRecord) -> EmployeeDocument {
        EmployeeDocument {
            id: record.id,
            name: record.name,
            age: record.age,
            date_of_birth: record.date_of_birth,
            email: record.email,
        }
    }

    /// Converts a persisted document into a wire record.
    pub fn to_record(&self, document: EmployeeDocument) -> EmployeeRecord {
        EmployeeRecord {
            id: document.id,
            name: document.name,
            age: document.age,
            date_of_birth: document.date_of_birth,
            email: document.email,
        }
    }
}

//! Convenient re-exports of commonly used types from workforce.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use workforce::prelude::*;
//! ```
//!
//! This provides access to:
//! - The employee record, document, and mapper
//! - The service and its status payloads
//! - The store contract and builder trait
//! - Sort and page types
//! - Error types

pub use workforce_core::{
    document::EmployeeDocument,
    error::{StoreError, StoreResult},
    mapper::EmployeeMapper,
    page::{Page, PageRequest},
    record::EmployeeRecord,
    service::{DeleteReceipt, EmployeeCount, EmployeeService, RecordStream},
    sort::{InvalidSortField, Sort, SortDirection, SortField},
    store::{DocumentStream, EmployeeStore, StoreBuilder},
};

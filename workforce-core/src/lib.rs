//! Core of the workforce project: a reactive, single-resource employee
//! directory over a pluggable document store.
//!
//! This crate provides:
//!
//! - **Data model** ([`record`], [`document`]) - The wire and persisted employee shapes
//! - **Mapper** ([`mapper`]) - Explicit field-by-field conversion between the two shapes
//! - **Store abstraction** ([`store`]) - The async repository contract backends implement
//! - **Service** ([`service`]) - The orchestration layer exposing the nine employee operations
//! - **Sorting and paging** ([`sort`], [`page`]) - Whitelisted sort keys and windowed results
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use workforce_core::{mapper::EmployeeMapper, record::EmployeeRecord, service::EmployeeService};
//!
//! let service = EmployeeService::new(store, EmployeeMapper);
//! let created = service
//!     .create(EmployeeRecord {
//!         id: None,
//!         name: "Alice".to_string(),
//!         age: Some(30),
//!         date_of_birth: None,
//!         email: "alice@example.com".to_string(),
//!     })
//!     .await?;
//!
//! assert!(created.id.is_some());
//! ```

#[allow(unused_extern_crates)]
extern crate self as workforce_core;

pub mod document;
pub mod error;
pub mod mapper;
pub mod page;
pub mod record;
pub mod service;
pub mod sort;
pub mod store;

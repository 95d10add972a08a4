//! In-memory employee store backend for workforce.
//!
//! This crate provides a thread-safe, in-memory implementation of the
//! `EmployeeStore` trait. It uses async-aware read-write locks for
//! concurrent access and is ideal for development and testing.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using an async-aware RwLock
//! - **Type-erased storage** - Stores documents as BSON, like the persistent backends
//! - **Full listing support** - Sorted and windowed streams over the collection
//!
//! # Quick Start
//!
//! ```ignore
//! use workforce_core::{mapper::EmployeeMapper, record::EmployeeRecord, service::EmployeeService};
//! use workforce_memory::InMemoryStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = EmployeeService::new(InMemoryStore::new(), EmployeeMapper);
//!
//!     let created = service
//!         .create(EmployeeRecord {
//!             id: None,
//!             name: "Alice".to_string(),
//!             age: Some(30),
//!             date_of_birth: None,
//!             email: "alice@example.com".to_string(),
//!         })
//!         .await?;
//!
//!     assert!(created.id.is_some());
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as workforce_memory;

pub mod compare;
pub mod store;

pub use store::{InMemoryStore, InMemoryStoreBuilder};

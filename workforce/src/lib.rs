//! Main workforce crate: a reactive employee directory over pluggable
//! document backends.
//!
//! This crate is the primary entry point for users of the workforce project.
//! It re-exports the core types and provides convenient access to the
//! storage backends.
//!
//! # Features
//!
//! - **Nine employee operations** - create, read, update, delete, name lookup,
//!   count, sorted listing, and paged listing, all non-blocking
//! - **Multiple backends** - in-memory and MongoDB implementations of the
//!   store contract
//! - **Empty is not an error** - absence surfaces as `Option::None` or an
//!   empty stream, never as a fault
//!
//! # Quick Start
//!
//! ```ignore
//! use workforce::{memory::InMemoryStore, prelude::*};
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
//!     // The store assigned an id; everything else round-trips untouched.
//!     let fetched = service
//!         .get_by_id(created.id.as_deref().unwrap())
//!         .await?;
//!     assert_eq!(fetched, Some(created));
//!
//!     Ok(())
//! }
//! ```
//!
//! # Listings
//!
//! Multi-value results are lazy streams; sorted and paged listings accept
//! only the whitelisted sort keys of [`sort::SortField`]:
//!
//! ```ignore
//! use futures::TryStreamExt;
//! use workforce::{memory::InMemoryStore, prelude::*};
//!
//! # async fn example(service: EmployeeService<InMemoryStore>) -> Result<(), Box<dyn std::error::Error>> {
//! let by_age = service
//!     .get_all_sorted(SortDirection::Asc, SortField::Age)
//!     .await?
//!     .try_collect::<Vec<_>>()
//!     .await?;
//!
//! let page = service
//!     .get_all_paged(0, 25, SortDirection::Desc, SortField::Name)
//!     .await?;
//! assert!(page.items.len() <= 25);
//! # Ok(()) }
//! ```
//!
//! # Backends
//!
//! - [`memory`] - Fast in-memory storage for development and testing
//! - [`mongodb`] - Persistent MongoDB backend (requires the `mongodb` feature)

pub mod prelude;

pub use workforce_core::{document, error, mapper, page, record, service, sort, store};

// Re-export BSON types for convenience
pub use bson;

/// In-memory storage backend implementations.
pub mod memory {
    pub use workforce_memory::{InMemoryStore, InMemoryStoreBuilder};
}

/// MongoDB storage backend implementations.
///
/// This module is only available when the `mongodb` feature is enabled.
#[cfg(feature = "mongodb")]
pub mod mongodb {
    pub use workforce_mongodb::{MongoDbStore, MongoDbStoreBuilder};
}

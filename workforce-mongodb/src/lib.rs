//! MongoDB backend implementation for workforce.
//!
//! This crate provides a MongoDB-based implementation of the `EmployeeStore`
//! trait, the backend the employee directory was designed around. All
//! operations go through the official async driver and stay non-blocking
//! end to end.
//!
//! To use this backend, include the `mongodb` feature in your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! workforce = { version = "x.y.z", features = ["mongodb"] }
//! ```
//!
//! # Connection
//!
//! The store needs a MongoDB connection string and a database name, provided
//! through the builder.
//!
//! # Example
//!
//! ```ignore
//! use workforce_core::store::StoreBuilder;
//! use workforce_mongodb::MongoDbStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = MongoDbStore::builder("mongodb://localhost:27017", "workforce")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as workforce_mongodb;

pub mod store;

pub use store::{MongoDbStore, MongoDbStoreBuilder};

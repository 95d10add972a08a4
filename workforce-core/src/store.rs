//! Storage abstraction for the employee collection.
//!
//! This module defines the [`EmployeeStore`] trait, the narrow contract the
//! service layer consumes. Implementations provide the actual persistence
//! (in-memory, MongoDB, ...) and must be thread-safe and non-blocking: every
//! method suspends only at I/O and returns either a deferred single value or
//! a lazy stream of documents.
//!
//! Documents cross this boundary as raw [`Bson`] values keyed by the `_id`
//! field; the typed decode happens one layer up in the service.

use async_trait::async_trait;
use bson::Bson;
use futures::stream::BoxStream;
use std::fmt::Debug;

use crate::{error::StoreResult, page::PageRequest, sort::Sort};

/// A lazy, cancellable stream of BSON documents read from the store.
///
/// Items are yielded on demand; dropping the stream cancels any in-flight
/// backend work.
pub type DocumentStream = BoxStream<'static, StoreResult<Bson>>;

/// Reactive repository primitives over the single employee collection.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access
/// from multiple async tasks. The exact concurrency model is
/// implementation-specific; the store itself provides whatever discipline
/// concurrent writers to the same document need.
///
/// # Absence
///
/// "Not found" is a first-class outcome, never an error: single-value
/// lookups return `Ok(None)` and listings return an empty stream.
#[async_trait]
pub trait EmployeeStore: Send + Sync + Debug {
    /// Upserts a document by its `_id` field.
    ///
    /// When the document carries no `_id`, the store assigns a fresh opaque
    /// string id. Returns the stored document including its `_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the value is not
    /// a BSON document or the write fails.
    async fn save(&self, document: Bson) -> StoreResult<Bson>;

    /// Fetches a document by primary key.
    ///
    /// Returns `Ok(None)` when no document has the given id.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Bson>>;

    /// Streams the entire collection in backend-natural order.
    async fn find_all(&self) -> StoreResult<DocumentStream>;

    /// Streams the entire collection ordered by the given sort key.
    ///
    /// Documents that compare equal on the sort key appear in backend-natural
    /// order; callers needing a stable secondary key must not rely on it.
    async fn find_all_sorted(&self, sort: Sort) -> StoreResult<DocumentStream>;

    /// Streams the requested window of the collection, ordered by the
    /// request's sort key.
    async fn find_all_paged(&self, request: &PageRequest) -> StoreResult<DocumentStream>;

    /// Counts all documents in the collection.
    async fn count(&self) -> StoreResult<u64>;

    /// Deletes a document by primary key.
    ///
    /// Returns the number of documents removed: 1 when the id was present,
    /// 0 when it was not. A miss is not an error.
    async fn delete_by_id(&self, id: &str) -> StoreResult<u64>;

    /// Fetches the first document whose `field` exactly equals `value`.
    ///
    /// Returns `Ok(None)` when nothing matches. "First" follows
    /// backend-natural iteration order.
    async fn find_first_by_field(&self, field: &str, value: Bson) -> StoreResult<Option<Bson>>;
}

#[async_trait]
impl<S> EmployeeStore for &S
where
    S: EmployeeStore,
{
    async fn save(&self, document: Bson) -> StoreResult<Bson> {
        (*self).save(document).await
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Bson>> {
        (*self).find_by_id(id).await
    }

    async fn find_all(&self) -> StoreResult<DocumentStream> {
        (*self).find_all().await
    }

    async fn find_all_sorted(&self, sort: Sort) -> StoreResult<DocumentStream> {
        (*self).find_all_sorted(sort).await
    }

    async fn find_all_paged(&self, request: &PageRequest) -> StoreResult<DocumentStream> {
        (*self).find_all_paged(request).await
    }

    async fn count(&self) -> StoreResult<u64> {
        (*self).count().await
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        (*self).delete_by_id(id).await
    }

    async fn find_first_by_field(&self, field: &str, value: Bson) -> StoreResult<Option<Bson>> {
        (*self)
            .find_first_by_field(field, value)
            .await
    }
}

/// Factory trait for creating store instances.
///
/// Backends expose a builder carrying their connection configuration;
/// `build` performs any connection setup and fails with
/// [`StoreError::Initialization`](crate::error::StoreError::Initialization)
/// when the backend cannot be reached.
#[async_trait]
pub trait StoreBuilder {
    type Store: EmployeeStore;

    async fn build(self) -> StoreResult<Self::Store>;
}

//! In-memory employee store implementation.
//!
//! This module provides a simple but complete in-memory backend that keeps
//! employee documents as BSON values in a HashMap behind an async-aware
//! read-write lock.

use async_trait::async_trait;
use bson::Bson;
use futures::{StreamExt, stream};
use mea::rwlock::RwLock;
use std::{collections::HashMap, sync::Arc};
use uuid::Uuid;

use workforce_core::{
    error::{StoreError, StoreResult},
    page::PageRequest,
    sort::{Sort, SortDirection},
    store::{DocumentStream, EmployeeStore, StoreBuilder},
};

use crate::compare::Comparable;

type EmployeeMap = HashMap<String, Bson>;

/// Thread-safe in-memory employee store.
///
/// Documents are BSON values indexed by their string `_id`; ids are assigned
/// as UUID v4 strings on first save. Listings operate on a snapshot taken
/// under the read lock, so a stream never observes writes made after the
/// operation started.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state:
/// multiple clones share the same underlying data and can be used from any
/// number of async tasks.
///
/// # Performance
///
/// Sorting and name lookup scan the whole collection (no indexing). Fine for
/// development and tests; use the MongoDB backend for real datasets.
///
/// # Example
///
/// ```ignore
/// use workforce_memory::InMemoryStore;
/// use workforce_core::store::EmployeeStore;
/// use bson::{Bson, doc};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = InMemoryStore::new();
///
///     let saved = store
///         .save(Bson::Document(doc! { "name": "Alice", "email": "alice@example.com" }))
///         .await?;
///
///     assert!(saved.as_document().unwrap().get_str("_id").is_ok());
///     Ok(())
/// }
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// The employee collection: document id -> document
    documents: Arc<RwLock<EmployeeMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory employee store.
    pub fn new() -> Self {
        Self {
            documents: Arc::new(RwLock::new(EmployeeMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    ///
    /// Exists for symmetry with backends that need real connection setup.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }

    fn require_document(value: &Bson) -> StoreResult<&bson::Document> {
        value
            .as_document()
            .ok_or_else(|| StoreError::InvalidDocument("expected a BSON document".to_string()))
    }

    /// Snapshots the collection and sorts it by the given key.
    async fn sorted_snapshot(&self, sort: Sort) -> Vec<Bson> {
        let mut snapshot = self
            .documents
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        let attribute = sort.field.attribute();

        snapshot.sort_by(|a, b| {
            // A missing sort field compares as Null; equal keys keep the
            // snapshot's iteration order, which is not guaranteed.
            let left = a
                .as_document()
                .and_then(|doc| doc.get(attribute))
                .map(Comparable::from)
                .unwrap_or(Comparable::Null);
            let right = b
                .as_document()
                .and_then(|doc| doc.get(attribute))
                .map(Comparable::from)
                .unwrap_or(Comparable::Null);

            match sort.direction {
                SortDirection::Asc => left.compare(&right),
                SortDirection::Desc => right.compare(&left),
            }
        });

        snapshot
    }

    fn into_stream(documents: Vec<Bson>) -> DocumentStream {
        stream::iter(documents.into_iter().map(Ok)).boxed()
    }
}

#[async_trait]
impl EmployeeStore for InMemoryStore {
    async fn save(&self, document: Bson) -> StoreResult<Bson> {
        let mut body = Self::require_document(&document)?.clone();

        let id = match body.get("_id") {
            Some(Bson::String(id)) => id.clone(),
            Some(other) => {
                return Err(StoreError::InvalidDocument(format!(
                    "non-string _id: {other}"
                )));
            }
            None => {
                let id = Uuid::new_v4().simple().to_string();
                body.insert("_id".to_string(), Bson::String(id.clone()));
                id
            }
        };

        let stored = Bson::Document(body);
        self.documents
            .write()
            .await
            .insert(id, stored.clone());

        Ok(stored)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Bson>> {
        Ok(self
            .documents
            .read()
            .await
            .get(id)
            .cloned())
    }

    async fn find_all(&self) -> StoreResult<DocumentStream> {
        let snapshot = self
            .documents
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();

        Ok(Self::into_stream(snapshot))
    }

    async fn find_all_sorted(&self, sort: Sort) -> StoreResult<DocumentStream> {
        Ok(Self::into_stream(self.sorted_snapshot(sort).await))
    }

    async fn find_all_paged(&self, request: &PageRequest) -> StoreResult<DocumentStream> {
        let window = self
            .sorted_snapshot(request.sort)
            .await
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.per_page as usize)
            .collect::<Vec<_>>();

        Ok(Self::into_stream(window))
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.documents.read().await.len() as u64)
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        Ok(match self.documents.write().await.remove(id) {
            Some(_) => 1,
            None => 0,
        })
    }

    async fn find_first_by_field(&self, field: &str, value: Bson) -> StoreResult<Option<Bson>> {
        let target = Comparable::from(&value);

        Ok(self
            .documents
            .read()
            .await
            .values()
            .find(|doc| {
                doc.as_document()
                    .and_then(|body| body.get(field))
                    .is_some_and(|candidate| Comparable::from(candidate) == target)
            })
            .cloned())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// No configuration today; implements [`StoreBuilder`] so callers can treat
/// all backends uniformly.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBuilder for InMemoryStoreBuilder {
    type Store = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// Always succeeds.
    async fn build(self) -> StoreResult<Self::Store> {
        Ok(InMemoryStore::new())
    }
}

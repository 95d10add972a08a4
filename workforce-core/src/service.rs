//! The employee service: one store operation per request.
//!
//! [`EmployeeService`] orchestrates non-blocking repository calls against an
//! [`EmployeeStore`], applying the [`EmployeeMapper`] at the boundary so that
//! callers only ever see wire-shaped [`EmployeeRecord`] values. Each
//! operation opens a single logical unit of work; dependent steps (fetch,
//! then save) compose sequentially, independent reads (page window and
//! total count) run concurrently.
//!
//! Absence is a first-class outcome everywhere: a missing id produces
//! `Ok(None)` or an empty stream, never an error. The service performs no
//! local recovery; every store fault propagates unchanged to the caller,
//! which decides the user-visible behavior. Dropping a returned future
//! cancels any in-flight store call; writes already committed are not
//! rolled back.

use bson::Bson;
use futures::{StreamExt, TryStreamExt, future::try_join, stream::BoxStream};
use serde::{Deserialize, Serialize};

use crate::{
    document::EmployeeDocument,
    error::StoreResult,
    mapper::EmployeeMapper,
    page::{Page, PageRequest},
    record::EmployeeRecord,
    sort::{Sort, SortDirection, SortField},
    store::{DocumentStream, EmployeeStore},
};

/// A lazy, cancellable stream of wire-shaped employee records.
///
/// Each item is decoded from the store on demand; a decode failure surfaces
/// as an `Err` item and leaves the rest of the stream consumable.
pub type RecordStream = BoxStream<'static, StoreResult<EmployeeRecord>>;

/// Status payload returned by a successful delete.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeleteReceipt {
    /// Number of documents removed, stringly for the wire ("1").
    #[serde(rename = "deleteCount")]
    pub delete_count: String,
    /// Always `"deleted"`.
    pub status: String,
}

/// Status payload returned by the collection count operation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeCount {
    /// Total number of employee documents. Zero is a valid count.
    #[serde(rename = "totalEmployees")]
    pub total_employees: u64,
}

/// Orchestrates employee CRUD, lookup, sort, and page operations over a
/// store handle.
///
/// Construction is explicit: the service takes its [`EmployeeStore`] handle
/// and [`EmployeeMapper`] as parameters, no process-wide registry involved.
/// The service holds no per-request state, so a single instance can serve
/// any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct EmployeeService<S: EmployeeStore> {
    store: S,
    mapper: EmployeeMapper,
}

impl<S: EmployeeStore> EmployeeService<S> {
    /// Creates a new service over the given store and mapper.
    pub fn new(store: S, mapper: EmployeeMapper) -> Self {
        Self { store, mapper }
    }

    /// Creates a new employee.
    ///
    /// Any id supplied on the record is ignored; the store assigns one. The
    /// returned record carries the assigned id and is otherwise field-equal
    /// to the input.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`](crate::error::StoreError) if the insert fails.
    pub async fn create(&self, record: EmployeeRecord) -> StoreResult<EmployeeRecord> {
        tracing::debug!(name = %record.name, "creating employee");

        let mut document = self.mapper.to_document(record);
        document.id = None;

        let saved = self.store.save(document.to_bson()?).await?;

        Ok(self
            .mapper
            .to_record(EmployeeDocument::from_bson(saved)?))
    }

    /// Fetches an employee by id.
    ///
    /// Returns `Ok(None)` when the id is not present.
    pub async fn get_by_id(&self, employee_id: &str) -> StoreResult<Option<EmployeeRecord>> {
        match self.store.find_by_id(employee_id).await? {
            Some(bson) => Ok(Some(
                self.mapper
                    .to_record(EmployeeDocument::from_bson(bson)?),
            )),
            None => Ok(None),
        }
    }

    /// Streams the entire collection as wire records.
    ///
    /// Yields nothing when the collection is empty.
    pub async fn get_all(&self) -> StoreResult<RecordStream> {
        let documents = self.store.find_all().await?;

        Ok(Self::decode_stream(documents, self.mapper))
    }

    /// Updates an employee by id.
    ///
    /// This is a partial field overwrite of a full record: `name`, `email`,
    /// `age`, and `date_of_birth` are always overwritten with the
    /// caller-provided values, including overwriting a present field with an
    /// absent one. There is no merge-if-present behavior.
    ///
    /// Returns `Ok(None)` without writing anything when the id is not
    /// present. No document is created for an unknown id, and the caller
    /// cannot distinguish this from any other no-op.
    pub async fn update(
        &self,
        employee_id: &str,
        record: EmployeeRecord,
    ) -> StoreResult<Option<EmployeeRecord>> {
        let Some(existing) = self.store.find_by_id(employee_id).await? else {
            return Ok(None);
        };

        tracing::debug!(id = %employee_id, "updating employee");

        let mut document = EmployeeDocument::from_bson(existing)?;
        document.name = record.name;
        document.email = record.email;
        document.age = record.age;
        document.date_of_birth = record.date_of_birth;

        let saved = self.store.save(document.to_bson()?).await?;

        Ok(Some(
            self.mapper
                .to_record(EmployeeDocument::from_bson(saved)?),
        ))
    }

    /// Deletes an employee by id.
    ///
    /// Returns a [`DeleteReceipt`] when a document was removed, `Ok(None)`
    /// when the id matched nothing. A miss is not an error.
    pub async fn delete(&self, employee_id: &str) -> StoreResult<Option<DeleteReceipt>> {
        let removed = self.store.delete_by_id(employee_id).await?;

        if removed == 0 {
            return Ok(None);
        }

        tracing::debug!(id = %employee_id, removed, "deleted employee");

        Ok(Some(DeleteReceipt {
            delete_count: removed.to_string(),
            status: "deleted".to_string(),
        }))
    }

    /// Fetches the first employee whose name exactly matches.
    ///
    /// Returns `Ok(None)` when no employee has that name.
    pub async fn get_by_name(&self, name: &str) -> StoreResult<Option<EmployeeRecord>> {
        match self
            .store
            .find_first_by_field("name", Bson::String(name.to_string()))
            .await?
        {
            Some(bson) => Ok(Some(
                self.mapper
                    .to_record(EmployeeDocument::from_bson(bson)?),
            )),
            None => Ok(None),
        }
    }

    /// Counts all employees.
    pub async fn total_employees(&self) -> StoreResult<EmployeeCount> {
        let total_employees = self.store.count().await?;

        Ok(EmployeeCount { total_employees })
    }

    /// Streams the entire collection ordered by the chosen field and
    /// direction.
    ///
    /// Records that compare equal on the sort field appear in whatever order
    /// the store's natural iteration yields; callers needing a stable
    /// secondary key must not rely on it.
    pub async fn get_all_sorted(
        &self,
        direction: SortDirection,
        field: SortField,
    ) -> StoreResult<RecordStream> {
        let documents = self
            .store
            .find_all_sorted(Sort::new(field, direction))
            .await?;

        Ok(Self::decode_stream(documents, self.mapper))
    }

    /// Fetches one page of the ordered collection together with the total
    /// element count.
    ///
    /// The windowed fetch and the count are independent reads issued
    /// concurrently and combined once both complete; under concurrent
    /// writers the total may reflect a collection state that changed between
    /// the two reads. An empty collection yields a page with empty content
    /// and a total of zero.
    pub async fn get_all_paged(
        &self,
        page_index: u64,
        page_size: u64,
        direction: SortDirection,
        field: SortField,
    ) -> StoreResult<Page<EmployeeRecord>> {
        let request = PageRequest::new(page_index, page_size, Sort::new(field, direction));

        let window = async {
            self.store
                .find_all_paged(&request)
                .await?
                .try_collect::<Vec<Bson>>()
                .await
        };
        let (documents, total) = try_join(window, self.store.count()).await?;

        let items = documents
            .into_iter()
            .map(|bson| {
                EmployeeDocument::from_bson(bson).map(|document| self.mapper.to_record(document))
            })
            .collect::<StoreResult<Vec<EmployeeRecord>>>()?;

        Ok(Page::builder(items)
            .with_request(page_index, page_size)
            .with_total(total)
            .build())
    }

    /// Lazily decodes a store document stream into wire records.
    fn decode_stream(documents: DocumentStream, mapper: EmployeeMapper) -> RecordStream {
        documents
            .map(move |item| {
                item.and_then(EmployeeDocument::from_bson)
                    .map(|document| mapper.to_record(document))
            })
            .boxed()
    }
}

use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use futures::{StreamExt, TryStreamExt};
use mongodb::{
    Client, Collection as MongoCollection,
    options::{ClientOptions, FindOptions},
};

use workforce_core::{
    document::COLLECTION_NAME,
    error::{StoreError, StoreResult},
    page::PageRequest,
    sort::{Sort, SortDirection},
    store::{DocumentStream, EmployeeStore, StoreBuilder},
};

/// MongoDB-backed employee store.
///
/// Documents live in the `employees` collection with an opaque hex string
/// `_id` assigned on first save. Listings drive the MongoDB cursor lazily,
/// so dropping a stream abandons the server-side query.
#[derive(Debug)]
pub struct MongoDbStore {
    client: Client,
    database: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn collection(&self) -> MongoCollection<Document> {
        self.client
            .database(&self.database)
            .collection(COLLECTION_NAME)
    }

    fn sort_document(sort: &Sort) -> Document {
        doc! {
            sort.field.attribute(): match sort.direction {
                SortDirection::Asc => 1,
                SortDirection::Desc => -1,
            }
        }
    }

    fn cursor_stream(cursor: mongodb::Cursor<Document>) -> DocumentStream {
        cursor
            .map_ok(Bson::Document)
            .map_err(|e| StoreError::Backend(e.to_string()))
            .boxed()
    }

    /// Shuts down the store and releases the underlying client.
    ///
    /// This consumes the store and should be called when no longer needed.
    pub async fn shutdown(self) -> StoreResult<()> {
        self.client.shutdown().await;

        Ok(())
    }
}

#[async_trait]
impl EmployeeStore for MongoDbStore {
    async fn save(&self, document: Bson) -> StoreResult<Bson> {
        let mut body = document
            .as_document()
            .cloned()
            .ok_or_else(|| StoreError::InvalidDocument("expected a BSON document".to_string()))?;

        let id = match body.get("_id") {
            Some(Bson::String(id)) => id.clone(),
            Some(other) => {
                return Err(StoreError::InvalidDocument(format!(
                    "non-string _id: {other}"
                )));
            }
            None => {
                let id = ObjectId::new().to_hex();
                body.insert("_id".to_string(), Bson::String(id.clone()));
                id
            }
        };

        self.collection()
            .replace_one(doc! { "_id": &id }, body.clone())
            .upsert(true)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(Bson::Document(body))
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Bson>> {
        Ok(self
            .collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .map(Bson::Document))
    }

    async fn find_all(&self) -> StoreResult<DocumentStream> {
        Ok(Self::cursor_stream(
            self.collection()
                .find(doc! {})
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?,
        ))
    }

    async fn find_all_sorted(&self, sort: Sort) -> StoreResult<DocumentStream> {
        let mut options = FindOptions::default();
        options.sort = Some(Self::sort_document(&sort));

        Ok(Self::cursor_stream(
            self.collection()
                .find(doc! {})
                .with_options(options)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?,
        ))
    }

    async fn find_all_paged(&self, request: &PageRequest) -> StoreResult<DocumentStream> {
        let mut options = FindOptions::default();
        options.sort = Some(Self::sort_document(&request.sort));
        options.skip = Some(request.offset());
        options.limit = Some(request.per_page as i64);

        Ok(Self::cursor_stream(
            self.collection()
                .find(doc! {})
                .with_options(options)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?,
        ))
    }

    async fn count(&self) -> StoreResult<u64> {
        self.collection()
            .count_documents(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<u64> {
        Ok(self
            .collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .deleted_count)
    }

    async fn find_first_by_field(&self, field: &str, value: Bson) -> StoreResult<Option<Bson>> {
        Ok(self
            .collection()
            .find_one(doc! { field: value })
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .map(Bson::Document))
    }
}

pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
        }
    }
}

#[async_trait]
impl StoreBuilder for MongoDbStoreBuilder {
    type Store = MongoDbStore;

    async fn build(self) -> StoreResult<Self::Store> {
        Ok(MongoDbStore::new(
            Client::with_options(
                ClientOptions::parse(&self.dsn)
                    .await
                    .map_err(|e| StoreError::Initialization(e.to_string()))?,
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))?,
            self.database,
        ))
    }
}

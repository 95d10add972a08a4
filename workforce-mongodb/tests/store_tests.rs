//! Store contract tests against a containerized MongoDB.
//!
//! Each test brings up a throwaway `mongo` container, so a local Docker
//! daemon is required; run them with `cargo test -- --ignored`.

use bson::{Bson, doc};
use futures::TryStreamExt;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::mongo::Mongo;
use workforce_core::{
    error::StoreError,
    page::PageRequest,
    sort::{Sort, SortField},
    store::{EmployeeStore, StoreBuilder},
};
use workforce_mongodb::MongoDbStore;

async fn bring_up_store() -> (MongoDbStore, ContainerAsync<Mongo>) {
    let container = Mongo::default().start().await.unwrap();
    let port = container.get_host_port_ipv4(27017).await.unwrap();

    let store = MongoDbStore::builder(&format!("mongodb://127.0.0.1:{port}"), "workforce")
        .build()
        .await
        .unwrap();

    (store, container)
}

fn employee(name: &str, age: i32, email: &str) -> Bson {
    Bson::Document(doc! { "name": name, "age": age, "email": email })
}

fn id_of(document: &Bson) -> String {
    document
        .as_document()
        .unwrap()
        .get_str("_id")
        .unwrap()
        .to_string()
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn save_assigns_a_hex_id_and_find_by_id_round_trips() {
    let (store, _container) = bring_up_store().await;

    let saved = store
        .save(employee("Alice", 30, "alice@example.com"))
        .await
        .unwrap();
    let id = id_of(&saved);

    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()));

    let fetched = store.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched, saved);

    store.shutdown().await.unwrap();
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn save_with_an_existing_id_replaces_the_document() {
    let (store, _container) = bring_up_store().await;

    let saved = store
        .save(employee("Alice", 30, "alice@example.com"))
        .await
        .unwrap();
    let id = id_of(&saved);

    store
        .save(Bson::Document(doc! {
            "_id": &id,
            "name": "Alicia",
            "age": 31,
            "email": "alicia@example.com",
        }))
        .await
        .unwrap();

    assert_eq!(store.count().await.unwrap(), 1);

    let fetched = store.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(fetched.as_document().unwrap().get_str("name"), Ok("Alicia"));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn save_rejects_a_non_document_value() {
    let (store, _container) = bring_up_store().await;

    let err = store
        .save(Bson::String("not a document".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::InvalidDocument(_)));
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn absent_ids_yield_empty_results_not_errors() {
    let (store, _container) = bring_up_store().await;

    assert_eq!(store.find_by_id("missing").await.unwrap(), None);
    assert_eq!(store.delete_by_id("missing").await.unwrap(), 0);
    assert_eq!(
        store
            .find_first_by_field("name", Bson::String("Nobody".to_string()))
            .await
            .unwrap(),
        None
    );
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn delete_by_id_reports_the_deleted_count() {
    let (store, _container) = bring_up_store().await;

    let saved = store
        .save(employee("Alice", 30, "alice@example.com"))
        .await
        .unwrap();
    let id = id_of(&saved);

    assert_eq!(store.delete_by_id(&id).await.unwrap(), 1);
    assert_eq!(store.delete_by_id(&id).await.unwrap(), 0);
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn sorted_listing_orders_by_the_requested_field() {
    let (store, _container) = bring_up_store().await;
    for (name, age) in [("A", 41), ("B", 19), ("C", 27)] {
        store
            .save(employee(name, age, "someone@example.com"))
            .await
            .unwrap();
    }

    let ages = store
        .find_all_sorted(Sort::asc(SortField::Age))
        .await
        .unwrap()
        .try_collect::<Vec<_>>()
        .await
        .unwrap()
        .into_iter()
        .map(|doc| doc.as_document().unwrap().get_i32("age").unwrap())
        .collect::<Vec<_>>();

    assert_eq!(ages, vec![19, 27, 41]);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn paged_window_skips_and_limits() {
    let (store, _container) = bring_up_store().await;

    // Fixed ids keep the descending window deterministic.
    for i in 1..=5 {
        store
            .save(Bson::Document(doc! {
                "_id": i.to_string(),
                "name": format!("Employee {i}"),
                "email": format!("e{i}@example.com"),
            }))
            .await
            .unwrap();
    }

    let first = store
        .find_all_paged(&PageRequest::new(0, 3, Sort::desc(SortField::Id)))
        .await
        .unwrap()
        .try_collect::<Vec<_>>()
        .await
        .unwrap()
        .iter()
        .map(id_of)
        .collect::<Vec<_>>();
    assert_eq!(first, vec!["5", "4", "3"]);

    let second = store
        .find_all_paged(&PageRequest::new(1, 3, Sort::desc(SortField::Id)))
        .await
        .unwrap()
        .try_collect::<Vec<_>>()
        .await
        .unwrap()
        .iter()
        .map(id_of)
        .collect::<Vec<_>>();
    assert_eq!(second, vec!["2", "1"]);
}

#[tokio::test]
#[ignore = "requires a local Docker daemon"]
async fn find_first_by_field_matches_exactly() {
    let (store, _container) = bring_up_store().await;
    store
        .save(employee("Alice", 30, "alice@example.com"))
        .await
        .unwrap();
    store
        .save(employee("Bob", 25, "bob@example.com"))
        .await
        .unwrap();

    let found = store
        .find_first_by_field("name", Bson::String("Bob".to_string()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.as_document().unwrap().get_str("name"), Ok("Bob"));

    assert_eq!(
        store
            .find_first_by_field("name", Bson::String("bob".to_string()))
            .await
            .unwrap(),
        None
    );
}

//! Tests for the PostgreSQL book store against a live database

use book_catalog_server::{
    models::Book,
    repository::{BookStore, PgBookStore},
};
use sqlx::postgres::PgPoolOptions;

/// Connect to `DATABASE_URL` and apply migrations
async fn connect_store() -> PgBookStore {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("Failed to connect to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    PgBookStore::new(pool)
}

#[tokio::test]
#[ignore] // Run with: DATABASE_URL=... cargo test -- --ignored
async fn test_save_replaces_existing_title() {
    let store = connect_store().await;
    let title = "Pg Store Upsert";
    store.delete(title).await.expect("Failed to clean up");

    let inserted = store
        .save(Book::new(title, "First Author", false, 2001))
        .await
        .expect("Failed to insert");
    assert_eq!(inserted, Book::new(title, "First Author", false, 2001));

    let replaced = store
        .save(Book::new(title, "Second Author", true, 1999))
        .await
        .expect("Failed to upsert");
    assert_eq!(replaced, Book::new(title, "Second Author", true, 1999));

    let matching: Vec<Book> = store
        .find_all()
        .await
        .expect("Failed to list")
        .into_iter()
        .filter(|b| b.title == title)
        .collect();
    assert_eq!(matching, vec![replaced]);

    store.delete(title).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore]
async fn test_find_by_title_is_exact() {
    let store = connect_store().await;
    let title = "Pg Store Lookup";
    store
        .save(Book::new(title, "Some Author", false, 2010))
        .await
        .expect("Failed to insert");

    assert!(store.find_by_title(title).await.unwrap().is_some());
    assert!(store.find_by_title("pg store lookup").await.unwrap().is_none());
    assert!(store.find_by_title("Pg Store").await.unwrap().is_none());

    store.delete(title).await.expect("Failed to clean up");
}

#[tokio::test]
#[ignore]
async fn test_delete_is_idempotent() {
    let store = connect_store().await;
    let title = "Pg Store Delete";
    store
        .save(Book::new(title, "Some Author", false, 2010))
        .await
        .expect("Failed to insert");

    store.delete(title).await.expect("Failed to delete");
    store.delete(title).await.expect("Deleting a missing title must succeed");

    assert!(store.find_by_title(title).await.unwrap().is_none());
}

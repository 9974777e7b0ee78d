//! Persistence layer for book records
//!
//! The catalog consumes exactly four store operations, expressed by
//! [`BookStore`]. Backends live in submodules and are selected at startup.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::{error::AppResult, models::Book};

pub use memory::MemoryBookStore;
pub use postgres::PgBookStore;

/// Storage contract for the catalog, keyed by exact title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// All stored books, in the backend's iteration order
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>>;

    /// Insert or replace the record with the same title
    async fn save(&self, book: Book) -> AppResult<Book>;

    /// Remove the record with this title; absent titles are a no-op
    async fn delete(&self, title: &str) -> AppResult<()>;
}

/// Shared handle to whichever backend is configured
pub type DynBookStore = Arc<dyn BookStore>;

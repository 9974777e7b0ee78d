//! In-process book store

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use super::BookStore;
use crate::{error::AppResult, models::Book};

/// Book store held in memory, iterating in insertion order.
///
/// Replacing an existing title keeps its position; deleting keeps the
/// relative order of the remaining records.
#[derive(Default)]
pub struct MemoryBookStore {
    books: RwLock<IndexMap<String, Book>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `books`; later duplicates replace earlier ones
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books
            .into_iter()
            .map(|book| (book.title.clone(), book))
            .collect();
        Self {
            books: RwLock::new(books),
        }
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let books = self.books.read().await;
        Ok(books.values().cloned().collect())
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let books = self.books.read().await;
        Ok(books.get(title).cloned())
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        books.insert(book.title.clone(), book.clone());
        Ok(book)
    }

    async fn delete(&self, title: &str) -> AppResult<()> {
        let mut books = self.books.write().await;
        books.shift_remove(title);
        Ok(())
    }
}

//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::Book,
    repository::DynBookStore,
};

#[derive(Clone)]
pub struct CatalogService {
    store: DynBookStore,
}

impl CatalogService {
    pub fn new(store: DynBookStore) -> Self {
        Self { store }
    }

    /// All books, in store iteration order
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.find_all().await
    }

    /// Exact-match lookup by title
    pub async fn get_by_title(&self, title: &str) -> AppResult<Book> {
        tracing::debug!("Looking up book {:?}", title);
        self.store
            .find_by_title(title)
            .await?
            .ok_or_else(|| AppError::NotFound(title.to_string()))
    }

    /// Store `book`, replacing any record with the same title
    pub async fn create(&self, book: Book) -> AppResult<Book> {
        tracing::info!("Saving book {:?} ({}, {})", book.title, book.author, book.year);
        self.store.save(book).await
    }

    /// Remove the book if present. Absence is not an error.
    pub async fn delete(&self, title: &str) -> AppResult<()> {
        tracing::info!("Deleting book {:?}", title);
        self.store.delete(title).await
    }

    pub async fn borrow(&self, title: &str) -> AppResult<Book> {
        tracing::info!("Borrowing book {:?}", title);
        self.set_borrowed(title, true).await
    }

    pub async fn return_book(&self, title: &str) -> AppResult<Book> {
        tracing::info!("Returning book {:?}", title);
        self.set_borrowed(title, false).await
    }

    /// Unconditional transition: no check of the current state
    async fn set_borrowed(&self, title: &str, borrowed: bool) -> AppResult<Book> {
        let mut book = self.get_by_title(title).await?;
        book.borrowed = borrowed;
        self.store.save(book).await
    }

    /// Populate an empty catalog with `books`, returning how many were written.
    ///
    /// A catalog that already holds records is left untouched, so changes
    /// made through the API (borrows, returns, deletions) survive restarts.
    pub async fn seed(&self, books: &[Book]) -> AppResult<usize> {
        if !self.store.find_all().await?.is_empty() {
            tracing::debug!("Catalog already populated, skipping seed");
            return Ok(0);
        }
        for book in books {
            self.store.save(book.clone()).await?;
        }
        Ok(books.len())
    }

    /// Probe the store with a read, for readiness checks
    pub async fn ping(&self) -> AppResult<()> {
        self.store
            .find_all()
            .await
            .map(|_| ())
            .map_err(|e| AppError::Unavailable(e.to_string()))
    }
}

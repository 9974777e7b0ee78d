//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::BookStore;
use crate::{error::AppResult, models::Book};

/// Book store backed by the `books` table
#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>(
            "SELECT title, author, borrowed, year FROM books ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn find_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>(
            "SELECT title, author, borrowed, year FROM books WHERE title = $1",
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn save(&self, book: Book) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, borrowed, year)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (title) DO UPDATE
            SET author = EXCLUDED.author,
                borrowed = EXCLUDED.borrowed,
                year = EXCLUDED.year
            RETURNING title, author, borrowed, year
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.borrowed)
        .bind(book.year)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, title: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE title = $1")
            .bind(title)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

//! Book catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::Book, AppState};

/// List all books
#[utoipa::path(
    get,
    path = "/api/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in the catalog", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list().await?;
    Ok(Json(books))
}

/// Get a book by its exact title
#[utoipa::path(
    get,
    path = "/api/books/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "No book with this title")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_by_title(&title).await?;
    Ok(Json(book))
}

/// Create or replace a book
#[utoipa::path(
    post,
    path = "/api/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book stored", body = Book)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    Json(book): Json<Book>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let saved = state.services.catalog.create(book).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// Delete a book; deleting an unknown title still succeeds
#[utoipa::path(
    delete,
    path = "/api/books/{title}",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 204, description = "Book deleted or absent")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(&title).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Mark a book as borrowed
#[utoipa::path(
    put,
    path = "/api/books/{title}/borrow",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Book marked borrowed", body = Book),
        (status = 404, description = "No book with this title")
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.borrow(&title).await?;
    Ok(Json(book))
}

/// Mark a book as returned
#[utoipa::path(
    put,
    path = "/api/books/{title}/return",
    tag = "books",
    params(("title" = String, Path, description = "Book title")),
    responses(
        (status = 200, description = "Book marked available", body = Book),
        (status = 404, description = "No book with this title")
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.return_book(&title).await?;
    Ok(Json(book))
}

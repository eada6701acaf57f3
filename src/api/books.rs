//! Book endpoints

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, BookCandidate},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All stored books", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list())
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 400, description = "Malformed ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Book>> {
    let Path(id) = id?;
    let book = state.services.books.get(id)?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    put,
    path = "/books",
    tag = "books",
    request_body = BookCandidate,
    responses(
        (status = 200, description = "Book created", body = Book),
        (status = 400, description = "Invalid or duplicate book", body = crate::error::ErrorResponse)
    )
)]
pub async fn put_book(
    State(state): State<AppState>,
    candidate: Result<Json<BookCandidate>, JsonRejection>,
) -> AppResult<Json<Book>> {
    let Json(candidate) = candidate?;
    let book = state.services.books.create(candidate)?;
    Ok(Json(book))
}

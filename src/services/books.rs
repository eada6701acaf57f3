//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookCandidate},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> Vec<Book> {
        self.repository.books.list()
    }

    /// Number of stored books
    pub fn count(&self) -> usize {
        self.repository.books.len()
    }

    pub fn get(&self, id: i64) -> AppResult<Book> {
        let book = self.repository.books.get(id);
        if book.is_err() {
            tracing::debug!("Book lookup missed: id={}", id);
        }
        book
    }

    /// Create a book from a client candidate
    pub fn create(&self, candidate: BookCandidate) -> AppResult<Book> {
        match self.repository.books.put(candidate) {
            Ok(book) => {
                tracing::info!("Book created: id={} title={:?}", book.id, book.title);
                Ok(book)
            }
            Err(e @ (AppError::Validation(_) | AppError::Conflict(_))) => {
                tracing::debug!("Book rejected: {}", e);
                Err(e)
            }
            Err(e) => Err(e),
        }
    }
}

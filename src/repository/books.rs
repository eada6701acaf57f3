//! In-memory book store

use std::{
    collections::BTreeMap,
    sync::{Arc, PoisonError, RwLock},
};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookCandidate},
    validation,
};

pub const DUPLICATE_BOOK: &str = "Another book with similar title and author already exists.";

#[derive(Debug)]
struct Shelf {
    books: BTreeMap<i64, Book>,
    next_id: i64,
}

/// Owner of every stored book. Clones share the same shelf.
#[derive(Debug, Clone)]
pub struct BookStore {
    shelf: Arc<RwLock<Shelf>>,
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore {
    pub fn new() -> Self {
        Self {
            shelf: Arc::new(RwLock::new(Shelf {
                books: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// All books, ordered by id
    pub fn list(&self) -> Vec<Book> {
        let shelf = self.shelf.read().unwrap_or_else(PoisonError::into_inner);
        shelf.books.values().cloned().collect()
    }

    /// Get a book by id
    pub fn get(&self, id: i64) -> AppResult<Book> {
        let shelf = self.shelf.read().unwrap_or_else(PoisonError::into_inner);
        shelf
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Validate, reject duplicates, assign an id and store.
    ///
    /// Validation needs no shared state and runs before locking. The
    /// duplicate check, id assignment and insertion happen under one write lock.
    pub fn put(&self, candidate: BookCandidate) -> AppResult<Book> {
        let new_book = validation::validate(candidate)?;

        let mut shelf = self.shelf.write().unwrap_or_else(PoisonError::into_inner);

        if shelf.books.values().any(|book| new_book.matches(book)) {
            return Err(AppError::Conflict(DUPLICATE_BOOK.to_string()));
        }

        let id = shelf.next_id;
        shelf.next_id += 1;

        let book = new_book.into_book(id);
        shelf.books.insert(id, book.clone());
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.shelf.read().unwrap_or_else(PoisonError::into_inner).books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

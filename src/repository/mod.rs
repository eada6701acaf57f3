//! Repository layer for book storage

pub mod books;

/// Main repository struct holding the stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BookStore,
}

impl Repository {
    /// Create a repository with empty stores
    pub fn new() -> Self {
        Self {
            books: books::BookStore::new(),
        }
    }
}

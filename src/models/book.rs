//! Book model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Stored book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Identifier assigned by the store
    pub id: i64,
    pub author: String,
    pub title: String,
}

/// Create book request.
///
/// Fields are optional so that missing and `null` values reach validation
/// instead of failing deserialization. `id` accepts any JSON value: every
/// non-null id is rejected as read-only, whatever its type.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct BookCandidate {
    /// Read-only, must be omitted or null
    #[schema(value_type = Option<i64>)]
    pub id: Option<Value>,
    pub author: Option<String>,
    pub title: Option<String>,
}

impl BookCandidate {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            author: Some(author.into()),
            title: Some(title.into()),
        }
    }
}

/// A candidate that passed validation, ready for identity assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub author: String,
    pub title: String,
}

impl NewBook {
    /// Whether this names the same book as `book` (exact, case-sensitive)
    pub fn matches(&self, book: &Book) -> bool {
        self.author == book.author && self.title == book.title
    }

    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            author: self.author,
            title: self.title,
        }
    }
}

//! Admission rules for book candidates

use thiserror::Error;

use crate::models::book::{BookCandidate, NewBook};

/// Rejection reason for a candidate. `Display` is the client-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field 'id' is read-only.")]
    IdReadOnly,

    #[error("Field 'title' is required.")]
    TitleRequired,

    #[error("Field 'author' is required.")]
    AuthorRequired,

    #[error("Field 'title' cannot be empty.")]
    TitleEmpty,

    #[error("Field 'author' cannot be empty.")]
    AuthorEmpty,
}

type Rule = (fn(&BookCandidate) -> bool, ValidationError);

/// Checked in order, first violation wins. All presence checks run before
/// any emptiness check; clients observe this order.
const RULES: &[Rule] = &[
    (|c: &BookCandidate| c.id.is_some(), ValidationError::IdReadOnly),
    (|c: &BookCandidate| c.title.is_none(), ValidationError::TitleRequired),
    (|c: &BookCandidate| c.author.is_none(), ValidationError::AuthorRequired),
    (|c: &BookCandidate| c.title.as_deref() == Some(""), ValidationError::TitleEmpty),
    (|c: &BookCandidate| c.author.as_deref() == Some(""), ValidationError::AuthorEmpty),
];

/// Validate a candidate submitted for creation
pub fn validate(candidate: BookCandidate) -> Result<NewBook, ValidationError> {
    if let Some((_, error)) = RULES.iter().find(|(violated, _)| violated(&candidate)) {
        return Err(*error);
    }

    match (candidate.author, candidate.title) {
        (Some(author), Some(title)) => Ok(NewBook { author, title }),
        (_, None) => Err(ValidationError::TitleRequired),
        (None, _) => Err(ValidationError::AuthorRequired),
    }
}

//! Error types for the domain model

use crate::{ArticleId, AuthorId, MagazineId};
use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Broad classification of a [`ModelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A relational reference did not resolve to the expected entity
    Type,

    /// A scalar field failed a length or emptiness constraint
    Value,

    /// A field that is fixed at construction was written to
    ImmutableField,
}

/// Errors raised while constructing, mutating or querying entities
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Author id is not known to the store
    #[error("author must be an existing Author (unknown id {0})")]
    UnknownAuthor(AuthorId),

    /// Magazine id is not known to the store
    #[error("magazine must be an existing Magazine (unknown id {0})")]
    UnknownMagazine(MagazineId),

    /// Article id is not known to the store
    #[error("article must be an existing Article (unknown id {0})")]
    UnknownArticle(ArticleId),

    /// Author name is empty
    #[error("name must be a non-empty string")]
    InvalidName,

    /// Magazine name length is out of range
    #[error("name must be a string with {min} to {max} characters (got {len})")]
    InvalidMagazineName {
        /// Length of the rejected value, in characters
        len: usize,
        /// Minimum accepted length
        min: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Magazine category is empty
    #[error("category must be a non-empty string")]
    InvalidCategory,

    /// Article title length is out of range
    #[error("title must be a string with {min} to {max} characters (got {len})")]
    InvalidTitle {
        /// Length of the rejected value, in characters
        len: usize,
        /// Minimum accepted length
        min: usize,
        /// Maximum accepted length
        max: usize,
    },

    /// Attempt to change a field that is fixed after construction
    #[error("{entity} {field} cannot be changed after initialization")]
    ImmutableField {
        /// Entity the field belongs to
        entity: &'static str,
        /// Field name
        field: &'static str,
    },
}

impl ModelError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::UnknownAuthor(_)
            | ModelError::UnknownMagazine(_)
            | ModelError::UnknownArticle(_) => ErrorKind::Type,
            ModelError::InvalidName
            | ModelError::InvalidMagazineName { .. }
            | ModelError::InvalidCategory
            | ModelError::InvalidTitle { .. } => ErrorKind::Value,
            ModelError::ImmutableField { .. } => ErrorKind::ImmutableField,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ModelError::UnknownAuthor(AuthorId::new()).kind(), ErrorKind::Type);
        assert_eq!(ModelError::InvalidCategory.kind(), ErrorKind::Value);
        assert_eq!(
            ModelError::ImmutableField { entity: "article", field: "title" }.kind(),
            ErrorKind::ImmutableField
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ModelError::InvalidTitle { len: 2, min: 5, max: 50 };
        assert_eq!(
            err.to_string(),
            "title must be a string with 5 to 50 characters (got 2)"
        );

        let err = ModelError::ImmutableField { entity: "author", field: "name" };
        assert_eq!(err.to_string(), "author name cannot be changed after initialization");
    }
}

//! Masthead Domain Layer
//!
//! This crate contains the domain model for Masthead: authors, magazines and
//! the articles that join them. It defines the entities, their identifiers,
//! the validation rules every field goes through, and the trait interface
//! that storage implementations provide.
//!
//! ## Key Concepts
//!
//! - **Author**: a named contributor, immutable once created
//! - **Magazine**: a named, categorized publication
//! - **Article**: the join entity linking exactly one author to one magazine
//! - **Registry**: the ordered list of every magazine a store has created,
//!   used for aggregate queries such as the top publisher
//!
//! ## Architecture
//!
//! - Entities reference each other by typed identifiers, never by pointer
//! - The object graph is owned by an implementation of [`PublicationStore`]
//! - No I/O and no global state live in this crate

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod article;
pub mod author;
pub mod error;
pub mod id;
pub mod magazine;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use article::Article;
pub use author::Author;
pub use error::{ErrorKind, ModelError, Result};
pub use id::{ArticleId, AuthorId, MagazineId};
pub use magazine::Magazine;
pub use traits::PublicationStore;

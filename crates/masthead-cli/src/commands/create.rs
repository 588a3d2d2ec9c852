//! Creation commands: author, magazine, article.

use super::refs;
use crate::error::Result;
use crate::output::Formatter;
use masthead_domain::PublicationStore;
use tracing::info;

/// Execute the author command.
pub fn execute_author<S: PublicationStore>(
    store: &mut S,
    name: &str,
    formatter: &Formatter,
) -> Result<String> {
    let id = store.create_author(name)?;
    info!(author = %id, "Author added");
    formatter.created("author", id, name)
}

/// Execute the magazine command.
pub fn execute_magazine<S: PublicationStore>(
    store: &mut S,
    name: &str,
    category: &str,
    formatter: &Formatter,
) -> Result<String> {
    let id = store.create_magazine(name, category)?;
    info!(magazine = %id, "Magazine added");
    formatter.created("magazine", id, name)
}

/// Execute the article command.
pub fn execute_article<S: PublicationStore>(
    store: &mut S,
    author: &str,
    magazine: &str,
    title: &str,
    formatter: &Formatter,
) -> Result<String> {
    let author = refs::author(store, author)?;
    let magazine = refs::magazine(store, magazine)?;

    let id = store.add_article(author, magazine, title)?;
    info!(article = %id, "Article added");
    formatter.created("article", id, title)
}

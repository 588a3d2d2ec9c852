//! Mutation commands: rename, recategorize, move-author, move-magazine.

use super::refs;
use crate::error::Result;
use crate::output::Formatter;
use masthead_domain::PublicationStore;
use tracing::info;

/// Where a moved article goes.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Reference to the new author
    Author(&'a str),
    /// Reference to the new magazine
    Magazine(&'a str),
}

/// Execute the rename command.
pub fn execute_rename<S: PublicationStore>(
    store: &mut S,
    magazine: &str,
    name: &str,
    formatter: &Formatter,
) -> Result<String> {
    let id = refs::magazine(store, magazine)?;
    let old = store.magazine(id)?.name().to_string();

    store.rename_magazine(id, name)?;
    formatter.updated(&format!("Renamed magazine '{}' to '{}'", old, name))
}

/// Execute the recategorize command.
pub fn execute_recategorize<S: PublicationStore>(
    store: &mut S,
    magazine: &str,
    category: &str,
    formatter: &Formatter,
) -> Result<String> {
    let id = refs::magazine(store, magazine)?;

    store.recategorize_magazine(id, category)?;
    let name = store.magazine(id)?.name();
    formatter.updated(&format!("Magazine '{}' is now in '{}'", name, category))
}

/// Execute the move-author and move-magazine commands.
pub fn execute_move<S: PublicationStore>(
    store: &mut S,
    article: &str,
    target: Target<'_>,
    formatter: &Formatter,
) -> Result<String> {
    let article = refs::article(store, article)?;

    let destination = match target {
        Target::Author(author) => {
            let author = refs::author(store, author)?;
            store.reassign_author(article, author)?;
            store.author(author)?.name().to_string()
        }
        Target::Magazine(magazine) => {
            let magazine = refs::magazine(store, magazine)?;
            store.reassign_magazine(article, magazine)?;
            store.magazine(magazine)?.name().to_string()
        }
    };

    info!(%article, to = %destination, "Article moved");
    let title = store.article(article)?.title();
    formatter.updated(&format!("Moved '{}' to '{}'", title, destination))
}

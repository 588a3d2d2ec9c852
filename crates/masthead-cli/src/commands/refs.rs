//! Entity reference resolution.
//!
//! A reference is `#N` (1-based creation order), a full UUID, or an exact
//! name. Names are not unique; the first match in creation order wins.
//! UUIDs are passed through unchecked so that the store reports unknown ids
//! with its own error.

use crate::error::{CliError, Result};
use masthead_domain::{ArticleId, AuthorId, MagazineId, PublicationStore};

/// Resolve an author reference.
pub fn author<S: PublicationStore>(store: &S, reference: &str) -> Result<AuthorId> {
    let authors = store.authors();
    if let Some(n) = ordinal(reference)? {
        return nth(&authors, n, "author", reference).map(|a| a.id());
    }
    if let Ok(id) = reference.parse::<AuthorId>() {
        return Ok(id);
    }

    authors
        .iter()
        .find(|a| a.name() == reference)
        .map(|a| a.id())
        .ok_or_else(|| not_found("author", reference))
}

/// Resolve a magazine reference.
pub fn magazine<S: PublicationStore>(store: &S, reference: &str) -> Result<MagazineId> {
    let magazines = store.magazines();
    if let Some(n) = ordinal(reference)? {
        return nth(&magazines, n, "magazine", reference).map(|m| m.id());
    }
    if let Ok(id) = reference.parse::<MagazineId>() {
        return Ok(id);
    }

    magazines
        .iter()
        .find(|m| m.name() == reference)
        .map(|m| m.id())
        .ok_or_else(|| not_found("magazine", reference))
}

/// Resolve an article reference; the name form matches titles.
pub fn article<S: PublicationStore>(store: &S, reference: &str) -> Result<ArticleId> {
    let articles = store.articles();
    if let Some(n) = ordinal(reference)? {
        return nth(&articles, n, "article", reference).map(|a| a.id());
    }
    if let Ok(id) = reference.parse::<ArticleId>() {
        return Ok(id);
    }

    articles
        .iter()
        .find(|a| a.title() == reference)
        .map(|a| a.id())
        .ok_or_else(|| not_found("article", reference))
}

/// Parse `#N`, returning `None` for references of another form.
///
/// Only `#` followed by digits is an ordinal, so names and titles that
/// merely start with `#` still resolve by name.
fn ordinal(reference: &str) -> Result<Option<usize>> {
    let Some(digits) = reference.strip_prefix('#') else {
        return Ok(None);
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    match digits.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(CliError::InvalidInput(format!(
            "'{}' is not a valid reference; use #1, #2, ...",
            reference
        ))),
    }
}

fn nth<'a, T>(items: &[&'a T], n: usize, kind: &'static str, reference: &str) -> Result<&'a T> {
    items
        .get(n - 1)
        .copied()
        .ok_or_else(|| not_found(kind, reference))
}

fn not_found(kind: &'static str, reference: &str) -> CliError {
    CliError::NotFound {
        kind,
        reference: reference.to_string(),
    }
}

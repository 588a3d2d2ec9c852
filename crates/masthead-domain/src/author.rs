//! Author module - the contributors of the publication graph

use crate::{validation, ArticleId, AuthorId, ModelError, Result};

/// A named contributor
///
/// The name is fixed at construction. The author keeps the ids of its
/// articles in the order they were written; the articles themselves are
/// owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    id: AuthorId,
    name: String,
    articles: Vec<ArticleId>,
}

impl Author {
    /// Create a new author
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidName`] if `name` is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use masthead_domain::Author;
    ///
    /// let author = Author::new("Carry Bradshaw").unwrap();
    /// assert_eq!(author.name(), "Carry Bradshaw");
    /// assert!(author.articles().is_empty());
    /// assert!(Author::new("").is_err());
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validation::author_name(&name)?;

        Ok(Self {
            id: AuthorId::new(),
            name,
            articles: Vec::new(),
        })
    }

    /// Unique identifier
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// Author name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Author names never change; this always fails.
    pub fn set_name(&mut self, _name: impl Into<String>) -> Result<()> {
        Err(ModelError::ImmutableField {
            entity: "author",
            field: "name",
        })
    }

    /// Ids of this author's articles, in insertion order
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Append an article id to this author's list.
    ///
    /// Store implementations call this once the article has been validated.
    /// Calling it anywhere else breaks the link between the author and
    /// [`Article::author`](crate::Article::author).
    #[doc(hidden)]
    pub fn record_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    /// Remove an article id from this author's list, returning whether it
    /// was present. Used when an article is moved to another author.
    #[doc(hidden)]
    pub fn release_article(&mut self, article: ArticleId) -> bool {
        match self.articles.iter().position(|a| *a == article) {
            Some(idx) => {
                self.articles.remove(idx);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_author_creation() {
        let author = Author::new("Nathaniel Hawthorne").unwrap();
        assert_eq!(author.name(), "Nathaniel Hawthorne");
        assert!(author.articles().is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Author::new("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn test_name_is_immutable() {
        let mut author = Author::new("Carry Bradshaw").unwrap();

        let err = author.set_name("ActuallyTopher").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ImmutableField);
        assert_eq!(author.set_name("").unwrap_err().kind(), ErrorKind::ImmutableField);
        assert_eq!(author.name(), "Carry Bradshaw");
    }

    #[test]
    fn test_record_and_release_articles() {
        let mut author = Author::new("Carry Bradshaw").unwrap();
        let first = ArticleId::from_value(1);
        let second = ArticleId::from_value(2);

        author.record_article(first);
        author.record_article(second);
        assert_eq!(author.articles(), &[first, second]);

        assert!(author.release_article(first));
        assert!(!author.release_article(first));
        assert_eq!(author.articles(), &[second]);
    }
}

//! Article module - the join between authors and magazines

use crate::{validation, ArticleId, AuthorId, MagazineId, ModelError, Result};

/// An article written by one author for one magazine
///
/// Articles are immutable apart from their two references. Moving an
/// article to another author or magazine must also move it between the
/// parents' article lists, so that is done through
/// [`PublicationStore`](crate::PublicationStore) rather than here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    id: ArticleId,
    author: AuthorId,
    magazine: MagazineId,
    title: String,
}

impl Article {
    /// Create a new article
    ///
    /// Only the title is checked here; resolving `author` and `magazine` is
    /// the store's job. The article is not registered with its author or
    /// magazine either: use [`PublicationStore::create_article`] to get a
    /// linked article.
    ///
    /// [`PublicationStore::create_article`]: crate::PublicationStore::create_article
    ///
    /// # Errors
    /// Returns [`ModelError::InvalidTitle`] if the title is not 5 to 50
    /// characters long
    pub fn new(author: AuthorId, magazine: MagazineId, title: impl Into<String>) -> Result<Self> {
        let title = title.into();
        validation::title(&title)?;

        Ok(Self {
            id: ArticleId::new(),
            author,
            magazine,
            title,
        })
    }

    /// Unique identifier
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// Article title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Titles never change; this always fails.
    pub fn set_title(&mut self, _title: impl Into<String>) -> Result<()> {
        Err(ModelError::ImmutableField {
            entity: "article",
            field: "title",
        })
    }

    /// Id of the author
    pub fn author(&self) -> AuthorId {
        self.author
    }

    /// Id of the magazine
    pub fn magazine(&self) -> MagazineId {
        self.magazine
    }

    /// Point the article at another author.
    ///
    /// Does not touch any article list; see
    /// [`PublicationStore::reassign_author`](crate::PublicationStore::reassign_author).
    #[doc(hidden)]
    pub fn set_author(&mut self, author: AuthorId) {
        self.author = author;
    }

    /// Point the article at another magazine.
    ///
    /// Does not touch any article list; see
    /// [`PublicationStore::reassign_magazine`](crate::PublicationStore::reassign_magazine).
    #[doc(hidden)]
    pub fn set_magazine(&mut self, magazine: MagazineId) {
        self.magazine = magazine;
    }
}

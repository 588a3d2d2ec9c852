//! Masthead Storage Layer
//!
//! Implements the [`PublicationStore`] trait with an in-memory arena.
//!
//! # Architecture
//!
//! - One `Vec` per entity kind holds the entities in creation order
//! - A `HashMap` per entity kind maps identifiers to arena slots
//! - Entities refer to each other by identifier, so the graph has no
//!   reference cycles and drops with the store
//!
//! The magazine arena doubles as the registry: it only grows, and it lives
//! exactly as long as the store that owns it.
//!
//! # Examples
//!
//! ```
//! use masthead_domain::PublicationStore;
//! use masthead_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let author = store.create_author("Carry Bradshaw").unwrap();
//! let magazine = store.create_magazine("Vogue", "Fashion").unwrap();
//! store.add_article(author, magazine, "How to wear a tutu").unwrap();
//!
//! assert_eq!(store.top_publisher().unwrap().name(), "Vogue");
//! ```

#![warn(missing_docs)]

use masthead_domain::{
    Article, ArticleId, Author, AuthorId, Magazine, MagazineId, ModelError, PublicationStore,
    Result,
};
use std::collections::HashMap;
use tracing::debug;

/// In-memory implementation of [`PublicationStore`]
///
/// # Thread Safety
///
/// All mutation goes through `&mut self`. Callers that share a store across
/// threads must wrap it in their own lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    authors: Vec<Author>,
    magazines: Vec<Magazine>,
    articles: Vec<Article>,
    author_index: HashMap<AuthorId, usize>,
    magazine_index: HashMap<MagazineId, usize>,
    article_index: HashMap<ArticleId, usize>,
}

impl MemoryStore {
    /// Create an empty store with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of authors
    pub fn author_count(&self) -> usize {
        self.authors.len()
    }

    /// Number of registered magazines
    pub fn magazine_count(&self) -> usize {
        self.magazines.len()
    }

    /// Number of articles
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    fn author_slot(&self, id: AuthorId) -> Result<usize> {
        self.author_index
            .get(&id)
            .copied()
            .ok_or(ModelError::UnknownAuthor(id))
    }

    fn magazine_slot(&self, id: MagazineId) -> Result<usize> {
        self.magazine_index
            .get(&id)
            .copied()
            .ok_or(ModelError::UnknownMagazine(id))
    }

    fn article_slot(&self, id: ArticleId) -> Result<usize> {
        self.article_index
            .get(&id)
            .copied()
            .ok_or(ModelError::UnknownArticle(id))
    }
}

impl PublicationStore for MemoryStore {
    fn create_author(&mut self, name: &str) -> Result<AuthorId> {
        let author = Author::new(name)?;
        let id = author.id();

        self.author_index.insert(id, self.authors.len());
        self.authors.push(author);
        debug!(author = %id, name, "Author created");

        Ok(id)
    }

    fn create_magazine(&mut self, name: &str, category: &str) -> Result<MagazineId> {
        let magazine = Magazine::new(name, category)?;
        let id = magazine.id();

        self.magazine_index.insert(id, self.magazines.len());
        self.magazines.push(magazine);
        debug!(
            magazine = %id,
            name,
            category,
            registered = self.magazines.len(),
            "Magazine registered"
        );

        Ok(id)
    }

    fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> Result<ArticleId> {
        // Resolve everything before touching either parent
        let author_slot = self.author_slot(author)?;
        let magazine_slot = self.magazine_slot(magazine)?;
        let article = Article::new(author, magazine, title)?;
        let id = article.id();

        self.article_index.insert(id, self.articles.len());
        self.articles.push(article);
        self.authors[author_slot].record_article(id);
        self.magazines[magazine_slot].record_article(id);
        debug!(article = %id, %author, %magazine, title, "Article created");

        Ok(id)
    }

    fn author(&self, id: AuthorId) -> Result<&Author> {
        Ok(&self.authors[self.author_slot(id)?])
    }

    fn magazine(&self, id: MagazineId) -> Result<&Magazine> {
        Ok(&self.magazines[self.magazine_slot(id)?])
    }

    fn article(&self, id: ArticleId) -> Result<&Article> {
        Ok(&self.articles[self.article_slot(id)?])
    }

    fn authors(&self) -> Vec<&Author> {
        self.authors.iter().collect()
    }

    fn magazines(&self) -> Vec<&Magazine> {
        self.magazines.iter().collect()
    }

    fn articles(&self) -> Vec<&Article> {
        self.articles.iter().collect()
    }

    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> Result<()> {
        let slot = self.magazine_slot(id)?;
        self.magazines[slot].set_name(name)?;
        debug!(magazine = %id, name, "Magazine renamed");
        Ok(())
    }

    fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> Result<()> {
        let slot = self.magazine_slot(id)?;
        self.magazines[slot].set_category(category)?;
        debug!(magazine = %id, category, "Magazine recategorized");
        Ok(())
    }

    fn rename_author(&mut self, id: AuthorId, name: &str) -> Result<()> {
        let slot = self.author_slot(id)?;
        self.authors[slot].set_name(name)
    }

    fn retitle_article(&mut self, id: ArticleId, title: &str) -> Result<()> {
        let slot = self.article_slot(id)?;
        self.articles[slot].set_title(title)
    }

    fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> Result<()> {
        let article_slot = self.article_slot(article)?;
        let new_slot = self.author_slot(author)?;
        let old = self.articles[article_slot].author();
        if old == author {
            return Ok(());
        }
        let old_slot = self.author_slot(old)?;

        self.authors[old_slot].release_article(article);
        self.authors[new_slot].record_article(article);
        self.articles[article_slot].set_author(author);
        debug!(%article, from = %old, to = %author, "Article moved to another author");

        Ok(())
    }

    fn reassign_magazine(&mut self, article: ArticleId, magazine: MagazineId) -> Result<()> {
        let article_slot = self.article_slot(article)?;
        let new_slot = self.magazine_slot(magazine)?;
        let old = self.articles[article_slot].magazine();
        if old == magazine {
            return Ok(());
        }
        let old_slot = self.magazine_slot(old)?;

        self.magazines[old_slot].release_article(article);
        self.magazines[new_slot].record_article(article);
        self.articles[article_slot].set_magazine(magazine);
        debug!(%article, from = %old, to = %magazine, "Article moved to another magazine");

        Ok(())
    }
}

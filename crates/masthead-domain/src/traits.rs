//! Trait definitions for the publication graph
//!
//! [`PublicationStore`] is the boundary between the domain and whatever owns
//! the entities. Implementations provide lookups and the primitive
//! mutations; the relationship queries are provided here on top of them, so
//! every store answers them the same way.

use crate::{Article, ArticleId, Author, AuthorId, Magazine, MagazineId, Result};
use itertools::Itertools;

/// Owner of authors, magazines and articles
///
/// A store is also the magazine registry: [`magazines`](Self::magazines)
/// lists every magazine it created, in creation order, and
/// [`top_publisher`](Self::top_publisher) ranges over exactly that list.
///
/// Implemented by the infrastructure layer (masthead-store)
pub trait PublicationStore {
    /// Create an author
    fn create_author(&mut self, name: &str) -> Result<AuthorId>;

    /// Create a magazine and append it to the registry
    fn create_magazine(&mut self, name: &str, category: &str) -> Result<MagazineId>;

    /// Create an article and append it to its author's and magazine's lists
    ///
    /// All checks run before anything is mutated: a failed call leaves both
    /// parents untouched.
    fn create_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> Result<ArticleId>;

    /// Get an author by id
    fn author(&self, id: AuthorId) -> Result<&Author>;

    /// Get a magazine by id
    fn magazine(&self, id: MagazineId) -> Result<&Magazine>;

    /// Get an article by id
    fn article(&self, id: ArticleId) -> Result<&Article>;

    /// All authors, in creation order
    fn authors(&self) -> Vec<&Author>;

    /// The registry: all magazines, in creation order
    fn magazines(&self) -> Vec<&Magazine>;

    /// All articles, in creation order
    fn articles(&self) -> Vec<&Article>;

    /// Rename a magazine
    fn rename_magazine(&mut self, id: MagazineId, name: &str) -> Result<()>;

    /// Change a magazine's category
    fn recategorize_magazine(&mut self, id: MagazineId, category: &str) -> Result<()>;

    /// Attempt to rename an author; always fails once the author resolves
    fn rename_author(&mut self, id: AuthorId, name: &str) -> Result<()>;

    /// Attempt to retitle an article; always fails once the article resolves
    fn retitle_article(&mut self, id: ArticleId, title: &str) -> Result<()>;

    /// Move an article to another author
    ///
    /// The article leaves the old author's list and is appended to the new
    /// author's list. Moving to the current author is a no-op.
    fn reassign_author(&mut self, article: ArticleId, author: AuthorId) -> Result<()>;

    /// Move an article to another magazine
    fn reassign_magazine(&mut self, article: ArticleId, magazine: MagazineId) -> Result<()>;

    /// Write an article for `magazine` as `author`
    fn add_article(
        &mut self,
        author: AuthorId,
        magazine: MagazineId,
        title: &str,
    ) -> Result<ArticleId> {
        self.create_article(author, magazine, title)
    }

    /// An author's articles, in insertion order
    fn author_articles(&self, id: AuthorId) -> Result<Vec<&Article>> {
        self.author(id)?
            .articles()
            .iter()
            .map(|article| self.article(*article))
            .collect()
    }

    /// Distinct magazines an author has published in, by first appearance
    fn author_magazines(&self, id: AuthorId) -> Result<Vec<&Magazine>> {
        self.author_articles(id)?
            .into_iter()
            .map(|article| article.magazine())
            .unique()
            .map(|magazine| self.magazine(magazine))
            .collect()
    }

    /// Distinct categories of the magazines an author has published in
    ///
    /// `None` when the author has no articles.
    fn topic_areas(&self, id: AuthorId) -> Result<Option<Vec<&str>>> {
        let magazines = self.author_magazines(id)?;
        if magazines.is_empty() {
            return Ok(None);
        }

        Ok(Some(
            magazines.into_iter().map(Magazine::category).unique().collect(),
        ))
    }

    /// A magazine's articles, in insertion order
    fn magazine_articles(&self, id: MagazineId) -> Result<Vec<&Article>> {
        self.magazine(id)?
            .articles()
            .iter()
            .map(|article| self.article(*article))
            .collect()
    }

    /// Distinct authors who have published in a magazine, by first appearance
    fn contributors(&self, id: MagazineId) -> Result<Vec<&Author>> {
        self.magazine_articles(id)?
            .into_iter()
            .map(|article| article.author())
            .unique()
            .map(|author| self.author(author))
            .collect()
    }

    /// Titles of a magazine's articles, in article order
    ///
    /// `None` when the magazine has no articles.
    fn article_titles(&self, id: MagazineId) -> Result<Option<Vec<&str>>> {
        let articles = self.magazine_articles(id)?;
        if articles.is_empty() {
            return Ok(None);
        }

        Ok(Some(articles.into_iter().map(Article::title).collect()))
    }

    /// Authors with more than two articles in a magazine
    ///
    /// `None` when no author qualifies, including when the magazine has no
    /// articles at all.
    fn contributing_authors(&self, id: MagazineId) -> Result<Option<Vec<&Author>>> {
        let authors: Vec<AuthorId> = self
            .magazine_articles(id)?
            .into_iter()
            .map(|article| article.author())
            .collect();
        let counts = authors.iter().counts();

        let frequent = authors
            .iter()
            .unique()
            .filter(|author| counts.get(author).copied().unwrap_or(0) > 2)
            .map(|author| self.author(*author))
            .collect::<Result<Vec<_>>>()?;

        Ok(if frequent.is_empty() { None } else { Some(frequent) })
    }

    /// The registered magazine with the most articles
    ///
    /// Ties go to the magazine registered first. `None` when no magazine
    /// has been created.
    fn top_publisher(&self) -> Option<&Magazine> {
        // max_by_key keeps the last maximum, so walk the registry backwards.
        self.magazines()
            .into_iter()
            .rev()
            .max_by_key(|magazine| magazine.articles().len())
    }
}

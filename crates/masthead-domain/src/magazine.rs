//! Magazine module - named, categorized publications

use crate::{validation, ArticleId, MagazineId, Result};

/// A publication that articles appear in
///
/// Unlike authors, both the name and the category may be changed after
/// construction, but every change goes through the same validation as
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Create a new magazine
    ///
    /// # Errors
    /// Returns a `Value` error if the name is not 2 to 16 characters long or
    /// the category is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use masthead_domain::Magazine;
    ///
    /// let magazine = Magazine::new("Vogue", "Fashion").unwrap();
    /// assert_eq!(magazine.category(), "Fashion");
    /// assert!(Magazine::new("V", "Fashion").is_err());
    /// ```
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let category = category.into();
        validation::magazine_name(&name)?;
        validation::category(&category)?;

        Ok(Self {
            id: MagazineId::new(),
            name,
            category,
            articles: Vec::new(),
        })
    }

    /// Unique identifier
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// Magazine name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the magazine
    ///
    /// # Errors
    /// Returns a `Value` error if the new name is not 2 to 16 characters long;
    /// the current name is kept in that case
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validation::magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Magazine category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Change the category
    ///
    /// # Errors
    /// Returns a `Value` error if the new category is empty
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<()> {
        let category = category.into();
        validation::category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Ids of the articles published here, in insertion order
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    /// Append an article id to this magazine's list.
    ///
    /// Only store implementations should call this.
    #[doc(hidden)]
    pub fn record_article(&mut self, article: ArticleId) {
        self.articles.push(article);
    }

    /// Remove an article id from this magazine's list, returning whether it
    /// was present.
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

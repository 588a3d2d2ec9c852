//! Read-only query commands.

use super::{refs, Query};
use crate::error::Result;
use crate::output::Formatter;
use masthead_domain::PublicationStore;

/// Execute a query command.
pub fn execute_query<S: PublicationStore>(
    store: &S,
    query: &Query,
    formatter: &Formatter,
) -> Result<String> {
    match query {
        Query::Authors => formatter.format_authors(store, &store.authors()),
        Query::Magazines => formatter.format_magazines(store, &store.magazines()),
        Query::Articles => formatter.format_articles(store, &store.articles()),
        Query::WrittenBy(author) => {
            let id = refs::author(store, author)?;
            formatter.format_articles(store, &store.author_articles(id)?)
        }
        Query::PublishedIn(magazine) => {
            let id = refs::magazine(store, magazine)?;
            formatter.format_articles(store, &store.magazine_articles(id)?)
        }
        Query::MagazinesOf(author) => {
            let id = refs::author(store, author)?;
            formatter.format_magazines(store, &store.author_magazines(id)?)
        }
        Query::Topics(author) => {
            let id = refs::author(store, author)?;
            let topics = store.topic_areas(id)?;
            formatter.format_values("Topic areas", topics.as_deref())
        }
        Query::Contributors(magazine) => {
            let id = refs::magazine(store, magazine)?;
            formatter.format_authors(store, &store.contributors(id)?)
        }
        Query::Titles(magazine) => {
            let id = refs::magazine(store, magazine)?;
            let titles = store.article_titles(id)?;
            formatter.format_values("Titles", titles.as_deref())
        }
        Query::Regulars(magazine) => {
            let id = refs::magazine(store, magazine)?;
            match store.contributing_authors(id)? {
                Some(authors) => formatter.format_authors(store, &authors),
                None => formatter.format_values("Regular contributors", None),
            }
        }
        Query::Top => match store.top_publisher() {
            Some(magazine) => formatter.format_magazines(store, &[magazine]),
            None => formatter.format_values("Magazines", None),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use masthead_store::MemoryStore;

    fn seeded() -> MemoryStore {
        let mut store = MemoryStore::new();
        let carry = store.create_author("Carry").unwrap();
        let nathaniel = store.create_author("Nathaniel").unwrap();
        let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
        let ad = store.create_magazine("AD", "Architecture").unwrap();
        for title in ["How to wear a tutu", "Dating life in NYC", "Carrara Marble is so 2020"] {
            store.add_article(carry, vogue, title).unwrap();
        }
        store.add_article(nathaniel, vogue, "2023 Eccentric Design Trends").unwrap();
        store.add_article(carry, ad, "Modern minimalism").unwrap();
        store
    }

    fn quiet(store: &MemoryStore, query: Query) -> String {
        execute_query(store, &query, &Formatter::new(OutputFormat::Quiet, false)).unwrap()
    }

    #[test]
    fn test_regulars() {
        let store = seeded();
        let carry = store.authors()[0].id().to_string();

        assert_eq!(quiet(&store, Query::Regulars("Vogue".into())), carry);
        assert_eq!(quiet(&store, Query::Regulars("AD".into())), "");
    }

    #[test]
    fn test_topics_and_titles() {
        let store = seeded();

        assert_eq!(quiet(&store, Query::Topics("Carry".into())), "Fashion\nArchitecture");
        assert_eq!(quiet(&store, Query::Titles("AD".into())), "Modern minimalism");
    }

    #[test]
    fn test_top_publisher() {
        let store = seeded();
        let vogue = store.magazines()[0].id().to_string();
        assert_eq!(quiet(&store, Query::Top), vogue);

        let empty = MemoryStore::new();
        let json = execute_query(&empty, &Query::Top, &Formatter::new(OutputFormat::Json, false)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_listing_by_parent() {
        let store = seeded();
        let formatter = Formatter::new(OutputFormat::Json, false);

        let output = execute_query(&store, &Query::PublishedIn("#1".into()), &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 4);
        assert_eq!(value[3]["author"], "Nathaniel");
    }
}

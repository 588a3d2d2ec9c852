//! Integration tests for masthead-store
//!
//! These tests drive the full publication graph through the
//! `PublicationStore` trait: construction, bookkeeping and queries.

use masthead_domain::{AuthorId, ErrorKind, MagazineId, ModelError, PublicationStore};
use masthead_store::MemoryStore;

fn names<'a>(authors: impl IntoIterator<Item = &'a masthead_domain::Author>) -> Vec<&'a str> {
    authors.into_iter().map(|a| a.name()).collect()
}

#[test]
fn test_article_appended_to_both_parents() {
    let mut store = MemoryStore::new();
    let author = store.create_author("Carry Bradshaw").unwrap();
    let magazine = store.create_magazine("Vogue", "Fashion").unwrap();

    let first = store.add_article(author, magazine, "How to wear a tutu").unwrap();
    let second = store.create_article(author, magazine, "Dating life in NYC").unwrap();

    assert_eq!(store.author(author).unwrap().articles(), &[first, second]);
    assert_eq!(store.magazine(magazine).unwrap().articles(), &[first, second]);

    let article = store.article(second).unwrap();
    assert_eq!(article.author(), author);
    assert_eq!(article.magazine(), magazine);
}

#[test]
fn test_invalid_values_fail_with_value_kind() {
    let mut store = MemoryStore::new();

    assert_eq!(store.create_author("").unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(store.create_magazine("a", "Tech").unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(
        store.create_magazine("ValidName", "").unwrap_err().kind(),
        ErrorKind::Value
    );

    let author = store.create_author("Carry Bradshaw").unwrap();
    let magazine = store.create_magazine("Vogue", "Fashion").unwrap();
    assert_eq!(
        store.add_article(author, magazine, "hi").unwrap_err().kind(),
        ErrorKind::Value
    );
}

#[test]
fn test_unknown_parent_fails_with_type_kind() {
    let mut store = MemoryStore::new();
    let magazine = store.create_magazine("Vogue", "Fashion").unwrap();

    let stranger = AuthorId::new();
    let err = store.create_article(stranger, magazine, "Valid Title").unwrap_err();
    assert_eq!(err, ModelError::UnknownAuthor(stranger));
    assert_eq!(err.kind(), ErrorKind::Type);

    let author = store.create_author("Carry Bradshaw").unwrap();
    let err = store.create_article(author, MagazineId::new(), "Valid Title").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_ids_from_another_store_are_rejected() {
    let mut ours = MemoryStore::new();
    let mut theirs = MemoryStore::new();
    let author = ours.create_author("Carry Bradshaw").unwrap();
    let foreign = theirs.create_magazine("Vogue", "Fashion").unwrap();

    let err = ours.add_article(author, foreign, "How to wear a tutu").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
}

#[test]
fn test_failed_article_leaves_parents_untouched() {
    let mut store = MemoryStore::new();
    let author = store.create_author("Carry Bradshaw").unwrap();
    let magazine = store.create_magazine("Vogue", "Fashion").unwrap();

    assert!(store.add_article(author, magazine, "hi").is_err());
    assert!(store.add_article(author, MagazineId::new(), "Valid Title").is_err());

    assert!(store.author(author).unwrap().articles().is_empty());
    assert!(store.magazine(magazine).unwrap().articles().is_empty());
    assert_eq!(store.article_count(), 0);
}

#[test]
fn test_immutable_fields() {
    let mut store = MemoryStore::new();
    let author = store.create_author("Carry Bradshaw").unwrap();
    let magazine = store.create_magazine("Vogue", "Fashion").unwrap();
    let article = store.add_article(author, magazine, "How to wear a tutu").unwrap();

    for title in ["", "hi", "A perfectly valid new title"] {
        let err = store.retitle_article(article, title).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ImmutableField);
    }
    let err = store.rename_author(author, "ActuallyTopher").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ImmutableField);

    assert_eq!(store.article(article).unwrap().title(), "How to wear a tutu");
    assert_eq!(store.author(author).unwrap().name(), "Carry Bradshaw");
}

#[test]
fn test_magazine_setters() {
    let mut store = MemoryStore::new();
    let magazine = store.create_magazine("Vogue", "Fashion").unwrap();

    store.rename_magazine(magazine, "New Yorker").unwrap();
    store.recategorize_magazine(magazine, "Culture").unwrap();
    assert_eq!(store.rename_magazine(magazine, "x").unwrap_err().kind(), ErrorKind::Value);
    assert_eq!(
        store.recategorize_magazine(magazine, "").unwrap_err().kind(),
        ErrorKind::Value
    );

    let magazine = store.magazine(magazine).unwrap();
    assert_eq!(magazine.name(), "New Yorker");
    assert_eq!(magazine.category(), "Culture");
}

#[test]
fn test_author_magazines_and_topic_areas() {
    let mut store = MemoryStore::new();
    let author = store.create_author("Carry Bradshaw").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
    let ad = store.create_magazine("AD", "Architecture").unwrap();

    assert_eq!(store.topic_areas(author).unwrap(), None);
    assert!(store.author_magazines(author).unwrap().is_empty());

    store.add_article(author, vogue, "How to wear a tutu").unwrap();
    store.add_article(author, ad, "2023 Eccentric Design Trends").unwrap();
    store.add_article(author, vogue, "Dating life in NYC").unwrap();
    store.add_article(author, ad, "Carrara Marble is so 2020").unwrap();

    let magazines: Vec<_> = store
        .author_magazines(author)
        .unwrap()
        .into_iter()
        .map(|m| m.id())
        .collect();
    assert_eq!(magazines, vec![vogue, ad]);
    assert_eq!(store.author_articles(author).unwrap().len(), 4);

    let mut topics = store.topic_areas(author).unwrap().unwrap();
    topics.sort_unstable();
    assert_eq!(topics, vec!["Architecture", "Fashion"]);
}

#[test]
fn test_topic_areas_collapse_shared_categories() {
    let mut store = MemoryStore::new();
    let author = store.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
    let elle = store.create_magazine("Elle", "Fashion").unwrap();

    store.add_article(author, vogue, "How to wear a tutu").unwrap();
    store.add_article(author, elle, "Dating life in NYC").unwrap();

    assert_eq!(store.author_magazines(author).unwrap().len(), 2);
    assert_eq!(store.topic_areas(author).unwrap(), Some(vec!["Fashion"]));
}

#[test]
fn test_contributors_and_titles() {
    let mut store = MemoryStore::new();
    let carry = store.create_author("Carry Bradshaw").unwrap();
    let nathaniel = store.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();

    assert_eq!(store.article_titles(vogue).unwrap(), None);
    assert!(store.contributors(vogue).unwrap().is_empty());

    store.add_article(carry, vogue, "How to wear a tutu").unwrap();
    store.add_article(nathaniel, vogue, "Dating life in NYC").unwrap();
    store.add_article(carry, vogue, "Carrara Marble is so 2020").unwrap();

    assert_eq!(
        names(store.contributors(vogue).unwrap()),
        vec!["Carry Bradshaw", "Nathaniel Hawthorne"]
    );
    assert_eq!(
        store.article_titles(vogue).unwrap(),
        Some(vec![
            "How to wear a tutu",
            "Dating life in NYC",
            "Carrara Marble is so 2020"
        ])
    );
}

#[test]
fn test_contributing_authors() {
    let mut store = MemoryStore::new();
    let a = store.create_author("Carry Bradshaw").unwrap();
    let b = store.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
    let elle = store.create_magazine("Elle", "Fashion").unwrap();

    assert!(store.contributing_authors(vogue).unwrap().is_none());

    store.add_article(a, vogue, "How to wear a tutu").unwrap();
    store.add_article(a, vogue, "Dating life in NYC").unwrap();
    store.add_article(b, vogue, "Carrara Marble is so 2020").unwrap();
    // Two articles is not enough
    assert!(store.contributing_authors(vogue).unwrap().is_none());

    store.add_article(a, vogue, "2023 Eccentric Design Trends").unwrap();
    let frequent = store.contributing_authors(vogue).unwrap().unwrap();
    assert_eq!(names(frequent), vec!["Carry Bradshaw"]);

    store.add_article(b, elle, "How to wear a tutu").unwrap();
    assert!(store.contributing_authors(elle).unwrap().is_none());
}

#[test]
fn test_contributing_authors_in_first_appearance_order() {
    let mut store = MemoryStore::new();
    let carry = store.create_author("Carry Bradshaw").unwrap();
    let nathaniel = store.create_author("Nathaniel Hawthorne").unwrap();
    let edith = store.create_author("Edith Wharton").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();

    // Nathaniel writes first even though Carry was created first
    let lineup = [
        (nathaniel, "The Scarlet Letter"),
        (carry, "How to wear a tutu"),
        (edith, "The Age of Innocence"),
        (carry, "Dating life in NYC"),
        (nathaniel, "Twice-Told Tales"),
        (edith, "The House of Mirth"),
        (carry, "Carrara Marble is so 2020"),
        (nathaniel, "The Marble Faun"),
        (nathaniel, "Fanshawe revisited"),
    ];
    for (author, title) in lineup {
        store.add_article(author, vogue, title).unwrap();
    }

    let frequent = store.contributing_authors(vogue).unwrap().unwrap();
    assert_eq!(names(frequent), vec!["Nathaniel Hawthorne", "Carry Bradshaw"]);
}

#[test]
fn test_top_publisher() {
    let mut store = MemoryStore::new();
    assert!(store.top_publisher().is_none());

    let author = store.create_author("Carry Bradshaw").unwrap();
    let m1 = store.create_magazine("Vogue", "Fashion").unwrap();
    let m2 = store.create_magazine("AD", "Architecture").unwrap();

    for title in ["First Article", "Second Article"] {
        store.add_article(author, m1, title).unwrap();
    }
    for title in ["Third Article", "Fourth Article", "Fifth Article", "Sixth Article", "Seventh Article"] {
        store.add_article(author, m2, title).unwrap();
    }

    assert_eq!(store.top_publisher().unwrap().id(), m2);
}

#[test]
fn test_top_publisher_ties_go_to_first_registered() {
    let mut store = MemoryStore::new();
    let author = store.create_author("Carry Bradshaw").unwrap();
    let first = store.create_magazine("Vogue", "Fashion").unwrap();
    let second = store.create_magazine("Elle", "Fashion").unwrap();

    // No articles anywhere still yields the first registered magazine
    assert_eq!(store.top_publisher().unwrap().id(), first);

    store.add_article(author, second, "How to wear a tutu").unwrap();
    store.add_article(author, first, "Dating life in NYC").unwrap();
    assert_eq!(store.top_publisher().unwrap().id(), first);
}

#[test]
fn test_registries_are_isolated() {
    let mut one = MemoryStore::new();
    let two = MemoryStore::new();

    one.create_magazine("Vogue", "Fashion").unwrap();

    assert_eq!(one.magazines().len(), 1);
    assert!(two.top_publisher().is_none());
}

#[test]
fn test_reassign_author_moves_article() {
    let mut store = MemoryStore::new();
    let carry = store.create_author("Carry Bradshaw").unwrap();
    let nathaniel = store.create_author("Nathaniel Hawthorne").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
    let article = store.add_article(carry, vogue, "How to wear a tutu").unwrap();

    store.reassign_author(article, nathaniel).unwrap();

    assert!(store.author(carry).unwrap().articles().is_empty());
    assert_eq!(store.author(nathaniel).unwrap().articles(), &[article]);
    assert_eq!(store.article(article).unwrap().author(), nathaniel);
    assert_eq!(store.magazine(vogue).unwrap().articles(), &[article]);

    // Same author again is a no-op
    store.reassign_author(article, nathaniel).unwrap();
    assert_eq!(store.author(nathaniel).unwrap().articles(), &[article]);
}

#[test]
fn test_reassign_magazine_moves_article() {
    let mut store = MemoryStore::new();
    let carry = store.create_author("Carry Bradshaw").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
    let elle = store.create_magazine("Elle", "Fashion").unwrap();
    let article = store.add_article(carry, vogue, "How to wear a tutu").unwrap();

    store.reassign_magazine(article, elle).unwrap();

    assert!(store.magazine(vogue).unwrap().articles().is_empty());
    assert_eq!(store.magazine(elle).unwrap().articles(), &[article]);
    assert_eq!(store.article_titles(vogue).unwrap(), None);
    assert_eq!(store.top_publisher().unwrap().id(), elle);
}

#[test]
fn test_reassign_to_unknown_parent_fails_with_type_kind() {
    let mut store = MemoryStore::new();
    let carry = store.create_author("Carry Bradshaw").unwrap();
    let vogue = store.create_magazine("Vogue", "Fashion").unwrap();
    let article = store.add_article(carry, vogue, "How to wear a tutu").unwrap();

    let err = store.reassign_author(article, AuthorId::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);
    let err = store.reassign_magazine(article, MagazineId::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Type);

    assert_eq!(store.article(article).unwrap().author(), carry);
    assert_eq!(store.author(carry).unwrap().articles(), &[article]);
}

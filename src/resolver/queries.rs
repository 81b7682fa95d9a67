use std::collections::HashSet;

use crate::catalog::{BookRecord, CatalogStore};
use crate::error::{CatalogError, CatalogResult};

/// Optional `allBooks` arguments.
///
/// Both predicates are exact, case-sensitive matches. An empty string is
/// treated the same as an absent argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    author: Option<String>,
    genre: Option<String>,
}

impl BookFilter {
    pub fn new(author: Option<String>, genre: Option<String>) -> Self {
        Self {
            author: author.filter(|a| !a.is_empty()),
            genre: genre.filter(|g| !g.is_empty()),
        }
    }

    pub fn by_author(author: impl Into<String>) -> Self {
        Self::new(Some(author.into()), None)
    }

    pub fn by_genre(genre: impl Into<String>) -> Self {
        Self::new(None, Some(genre.into()))
    }

    pub fn matches(&self, book: &BookRecord) -> bool {
        match (self.author.as_deref(), self.genre.as_deref()) {
            (None, None) => true,
            (Some(author), None) => book.author == author,
            (None, Some(genre)) => has_genre(book, genre),
            (Some(author), Some(genre)) => book.author == author && has_genre(book, genre),
        }
    }
}

fn has_genre(book: &BookRecord, genre: &str) -> bool {
    book.genres.iter().any(|g| g == genre)
}

/// Per-author statistics derived from the book list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorStats {
    pub name: String,
    pub born: Option<i32>,
    pub book_count: usize,
}

pub fn book_count(store: &CatalogStore) -> usize {
    store.book_count()
}

pub fn author_count(store: &CatalogStore) -> usize {
    store.author_count()
}

/// Books matching `filter`, in store order
pub fn all_books(store: &CatalogStore, filter: &BookFilter) -> Vec<BookRecord> {
    store
        .read()
        .books()
        .iter()
        .filter(|book| filter.matches(book))
        .cloned()
        .collect()
}

/// One entry per distinct author name appearing on a book, in the order each
/// name is first seen.
///
/// Authors without books are not listed, even though [author_count] counts
/// them. `born` comes from the first author record with the same name.
pub fn all_authors(store: &CatalogStore) -> CatalogResult<Vec<AuthorStats>> {
    let snapshot = store.read();
    let books = snapshot.books();

    let mut seen = HashSet::new();
    let names = books
        .iter()
        .map(|b| b.author.as_str())
        .filter(|name| seen.insert(*name));

    let mut stats = Vec::new();
    for name in names {
        let author = snapshot
            .authors()
            .iter()
            .find(|a| a.name == name)
            .ok_or_else(|| {
                tracing::error!(author = %name, "Book references an author with no record");
                CatalogError::MissingAuthor {
                    name: name.to_string(),
                }
            })?;

        stats.push(AuthorStats {
            name: name.to_string(),
            born: author.born,
            book_count: books.iter().filter(|b| b.author == name).count(),
        });
    }

    Ok(stats)
}

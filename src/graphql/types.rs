//! GraphQL type definitions
//!
//! These mirror the catalog records but expose only the fields in the public
//! schema. Record ids stay internal.

use async_graphql::SimpleObject;

use crate::catalog::BookRecord;
use crate::error::CatalogError;
use crate::resolver::AuthorStats;

use super::helpers::count_to_int;

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Book {
    pub title: String,
    /// Author name
    pub author: String,
    /// Year of publication
    pub published: i32,
    pub genres: Vec<String>,
}

impl From<BookRecord> for Book {
    fn from(r: BookRecord) -> Self {
        Book {
            title: r.title,
            author: r.author,
            published: r.published,
            genres: r.genres,
        }
    }
}

/// An author with statistics derived from their books
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct Author {
    pub name: String,
    /// Birth year, null when unknown
    pub born: Option<i32>,
    /// Number of books by this author
    pub book_count: Option<i32>,
}

impl TryFrom<AuthorStats> for Author {
    type Error = CatalogError;

    fn try_from(s: AuthorStats) -> Result<Self, Self::Error> {
        Ok(Author {
            name: s.name,
            born: s.born,
            book_count: Some(count_to_int(s.book_count)?),
        })
    }
}

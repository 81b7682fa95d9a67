//! Resolution layer
//!
//! Plain functions over a [CatalogStore](crate::catalog::CatalogStore) that
//! implement each catalog operation. They know nothing about GraphQL; the
//! objects in [crate::graphql] decode arguments, call in here and shape the
//! results.

pub mod mutations;
pub mod queries;

pub use mutations::add_book;
pub use queries::{AuthorStats, BookFilter, all_authors, all_books, author_count, book_count};

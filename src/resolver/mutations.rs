use crate::catalog::{BookRecord, CatalogStore, NewBook};
use crate::error::{CatalogError, CatalogResult};

/// Add a book, registering its author if no existing book names them.
///
/// Fails with [CatalogError::DuplicateTitle] when a book with the exact same
/// title exists; the store is left untouched in that case. The author check
/// looks at books, not author records: a name that only exists as an author
/// record still gets a new record here.
pub fn add_book(store: &CatalogStore, book: NewBook) -> CatalogResult<BookRecord> {
    store.write(|catalog| {
        if catalog.books().iter().any(|b| b.title == book.title) {
            tracing::info!(title = %book.title, "Rejected book with duplicate title");
            return Err(CatalogError::DuplicateTitle { title: book.title });
        }

        if !catalog.books().iter().any(|b| b.author == book.author) {
            let author = catalog.append_author(book.author.as_str());
            tracing::info!(author_id = %author.id, author = %author.name, "Registered new author");
        }

        let record = catalog.append_book(book);
        tracing::info!(book_id = %record.id, title = %record.title, "Added book");
        Ok(record)
    })
}

//! In-memory catalog store
//!
//! Owns the author and book collections. Reads go through a [CatalogSnapshot]
//! (shared lock), appends go through a [CatalogWriter] handed out by
//! [CatalogStore::write] (exclusive lock). Neither exposes the underlying
//! vectors mutably, and nothing can update or remove a record once appended.
//!
//! Collection order is insertion order and is observable: joins by author
//! name resolve to the first matching record.

pub mod seed;

use parking_lot::{RwLock, RwLockReadGuard};
use uuid::Uuid;

/// An author known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRecord {
    pub id: Uuid,
    /// Natural key for joins from [BookRecord::author]
    pub name: String,
    /// Birth year, `None` when unknown
    pub born: Option<i32>,
}

/// A book in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    pub id: Uuid,
    pub title: String,
    /// Author name, not id
    pub author: String,
    pub published: i32,
    pub genres: Vec<String>,
}

/// Fields for a book that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub published: i32,
    pub genres: Vec<String>,
}

#[derive(Debug, Default)]
struct Collections {
    authors: Vec<AuthorRecord>,
    books: Vec<BookRecord>,
}

/// The single owner of catalog state.
///
/// Shared between request handlers as `Arc<CatalogStore>`.
#[derive(Debug, Default)]
pub struct CatalogStore {
    inner: RwLock<Collections>,
}

impl CatalogStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in seed data
    pub fn seeded() -> Self {
        Self::with_data(seed::authors(), seed::books())
    }

    /// Create a catalog from existing records, kept in the given order.
    ///
    /// No invariants are checked here; callers seeding duplicate titles or
    /// books without a matching author get exactly what they asked for.
    pub fn with_data(authors: Vec<AuthorRecord>, books: Vec<BookRecord>) -> Self {
        Self {
            inner: RwLock::new(Collections { authors, books }),
        }
    }

    /// Take a read-only view of both collections
    pub fn read(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            guard: self.inner.read(),
        }
    }

    /// Run `f` with exclusive access to the append operations.
    ///
    /// Everything `f` reads and appends happens under one lock, so a
    /// check-then-append inside it cannot interleave with another writer.
    pub fn write<R>(&self, f: impl FnOnce(&mut CatalogWriter<'_>) -> R) -> R {
        let mut guard = self.inner.write();
        let mut writer = CatalogWriter {
            collections: &mut guard,
        };
        f(&mut writer)
    }

    pub fn list_authors(&self) -> Vec<AuthorRecord> {
        self.read().authors().to_vec()
    }

    pub fn list_books(&self) -> Vec<BookRecord> {
        self.read().books().to_vec()
    }

    pub fn author_count(&self) -> usize {
        self.read().authors().len()
    }

    pub fn book_count(&self) -> usize {
        self.read().books().len()
    }
}

/// Read-only view of the catalog, holding the shared lock while alive
pub struct CatalogSnapshot<'a> {
    guard: RwLockReadGuard<'a, Collections>,
}

impl CatalogSnapshot<'_> {
    pub fn authors(&self) -> &[AuthorRecord] {
        &self.guard.authors
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.guard.books
    }
}

/// Append access to the catalog, only obtainable through [CatalogStore::write]
pub struct CatalogWriter<'a> {
    collections: &'a mut Collections,
}

impl CatalogWriter<'_> {
    pub fn authors(&self) -> &[AuthorRecord] {
        &self.collections.authors
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.collections.books
    }

    /// Register an author with a fresh id and unknown birth year.
    ///
    /// Names are not checked for uniqueness.
    pub fn append_author(&mut self, name: impl Into<String>) -> AuthorRecord {
        let author = AuthorRecord {
            id: Uuid::new_v4(),
            name: name.into(),
            born: None,
        };
        self.collections.authors.push(author.clone());
        author
    }

    /// Append a book with a fresh id. Title uniqueness is the caller's job.
    pub fn append_book(&mut self, book: NewBook) -> BookRecord {
        let NewBook {
            title,
            author,
            published,
            genres,
        } = book;
        let record = BookRecord {
            id: Uuid::new_v4(),
            title,
            author,
            published,
            genres,
        };
        self.collections.books.push(record.clone());
        record
    }
}

use super::prelude::*;
use crate::resolver::BookFilter;

#[derive(Default)]
pub struct BookQueries;

#[Object]
impl BookQueries {
    /// Total number of books
    async fn book_count(&self, ctx: &Context<'_>) -> Result<i32> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        count_to_int(resolver::book_count(store)).map_err(|e| e.extend())
    }

    /// Books in catalog order, optionally narrowed by author and/or genre
    async fn all_books(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Exact author name")] author: Option<String>,
        #[graphql(desc = "Genre the book must be tagged with")] genre: Option<String>,
    ) -> Result<Vec<Option<Book>>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        let filter = BookFilter::new(author, genre);

        let books = resolver::all_books(store, &filter);
        tracing::debug!(?filter, count = books.len(), "Resolved allBooks");

        Ok(books.into_iter().map(|b| Some(Book::from(b))).collect())
    }
}

use super::prelude::*;

#[derive(Default)]
pub struct AuthorQueries;

#[Object]
impl AuthorQueries {
    /// Total number of author records, including authors with no books
    async fn author_count(&self, ctx: &Context<'_>) -> Result<i32> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();
        count_to_int(resolver::author_count(store)).map_err(|e| e.extend())
    }

    /// Every author that has at least one book, with their book count
    async fn all_authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();

        resolver::all_authors(store)
            .and_then(|stats| stats.into_iter().map(Author::try_from).collect())
            .map_err(|e| e.extend())
    }
}

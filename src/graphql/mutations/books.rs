use super::prelude::*;

#[derive(Default)]
pub struct BookMutations;

#[Object]
impl BookMutations {
    /// Add a book. Unknown authors are registered with no birth year.
    ///
    /// A rejected book resolves to null with the error reported alongside,
    /// so the rest of the mutation document still runs.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        title: String,
        #[graphql(desc = "Author name")] author: String,
        #[graphql(desc = "Year of publication")] published: i32,
        genres: Vec<String>,
    ) -> Result<Option<Book>> {
        let store = ctx.data_unchecked::<Arc<CatalogStore>>();

        let result = resolver::add_book(
            store,
            NewBook {
                title,
                author,
                published,
                genres,
            },
        );

        match result {
            Ok(record) => Ok(Some(Book::from(record))),
            Err(e) => {
                ctx.add_error(e.extend().into_server_error(ctx.item.pos));
                Ok(None)
            }
        }
    }
}

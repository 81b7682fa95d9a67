//! GraphQL schema definition with queries and mutations

use std::sync::Arc;

use async_graphql::extensions::Tracing;
use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::catalog::CatalogStore;

use super::mutations::BookMutations;
use super::queries::{AuthorQueries, BookQueries};

/// The GraphQL schema type
pub type CatalogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(MergedObject, Default)]
#[graphql(name = "Query")]
pub struct QueryRoot(BookQueries, AuthorQueries);

#[derive(MergedObject, Default)]
#[graphql(name = "Mutation")]
pub struct MutationRoot(BookMutations);

/// Build the GraphQL schema over a shared catalog
pub fn build_schema(store: Arc<CatalogStore>) -> CatalogSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(store)
        .extension(Tracing)
        .finish()
}

//! GraphQL API for the catalog
//!
//! Built with async-graphql. Each domain area defines a `#[derive(Default)]`
//! struct with an `#[Object]` impl under `queries/` or `mutations/`, and
//! `schema.rs` merges them into the root types with `#[derive(MergedObject)]`.
//!
//! Resolvers fetch the shared [CatalogStore](crate::catalog::CatalogStore)
//! from the schema data and delegate to [crate::resolver].

pub mod helpers;
pub mod mutations;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{CatalogSchema, MutationRoot, QueryRoot, build_schema};
pub use types::{Author, Book};

//! Catalog - GraphQL service over an in-memory catalog of books and authors
//!
//! The catalog itself lives in [catalog], the operations over it in
//! [resolver], and the GraphQL schema that exposes them in [graphql].
//! Everything else is process plumbing used by the binary.

pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod graphql;
pub mod logging;
pub mod resolver;

pub use catalog::CatalogStore;
pub use error::{CatalogError, CatalogResult, ErrorKind};

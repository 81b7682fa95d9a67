pub mod books;

pub use books::BookMutations;

pub(crate) mod prelude {
    pub(crate) use std::sync::Arc;

    pub(crate) use async_graphql::{Context, ErrorExtensions, Object, Result};

    pub(crate) use crate::catalog::{CatalogStore, NewBook};
    pub(crate) use crate::graphql::types::*;
    pub(crate) use crate::resolver;
}

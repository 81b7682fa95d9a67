//! Catalog error types
//!
//! Resolvers return [CatalogResult]; the GraphQL layer turns a [CatalogError]
//! into an `async_graphql::Error` carrying a `code` extension (and, for
//! duplicate titles, the rejected title under `invalidArgs`).

use async_graphql::ErrorExtensions;
use thiserror::Error;

/// Who is at fault for an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request must be corrected before it can succeed
    BadUserInput,
    /// Catalog state broke an invariant
    Internal,
}

impl ErrorKind {
    /// Value of the GraphQL `code` extension
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::BadUserInput => "BAD_USER_INPUT",
            ErrorKind::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// A book with this exact title already exists
    #[error("Title must be unique")]
    DuplicateTitle { title: String },

    /// A book names an author with no matching author record
    #[error("no author record named {name:?}")]
    MissingAuthor { name: String },

    /// A collection grew past what a GraphQL `Int` can represent
    #[error("count {0} does not fit in a 32-bit integer")]
    CountOverflow(usize),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::DuplicateTitle { .. } => ErrorKind::BadUserInput,
            CatalogError::MissingAuthor { .. } | CatalogError::CountOverflow(_) => {
                ErrorKind::Internal
            }
        }
    }
}

impl ErrorExtensions for CatalogError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.to_string()).extend_with(|_, e| {
            e.set("code", self.kind().code());
            if let CatalogError::DuplicateTitle { title } = self {
                e.set("invalidArgs", title.as_str());
            }
        })
    }
}

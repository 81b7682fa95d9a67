//! HTTP route definitions
//!
//! The catalog API is GraphQL at /graphql. Health probes live beside it as
//! plain JSON endpoints.

pub mod graphql;
pub mod health;

// Helper functions shared across GraphQL query/mutation modules.

use crate::error::{CatalogError, CatalogResult};

/// Convert a collection size to a GraphQL `Int`
pub(crate) fn count_to_int(count: usize) -> CatalogResult<i32> {
    i32::try_from(count).map_err(|_| CatalogError::CountOverflow(count))
}

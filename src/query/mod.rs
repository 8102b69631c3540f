// ============================================================================
// Order Query - derived, read-only views over the order collection
// ============================================================================
//
// A query is parsed once into closed enums; running it is total and never
// mutates the source collection. Views are recomputed from scratch on
// every call.
//
// ============================================================================

pub mod filters;
pub mod engine;
pub mod summary;

pub use filters::*;
pub use engine::*;
pub use summary::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid value {value:?} for {field}")]
    InvalidArgument { field: &'static str, value: String },
}

impl QueryError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        QueryError::InvalidArgument {
            field,
            value: value.to_string(),
        }
    }
}

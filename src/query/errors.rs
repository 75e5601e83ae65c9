//! Query error types
//!
//! Absence is not an error here: `get_by_itag`, `first` and `last` express
//! a missing result as `None`. Errors are reserved for the hard cases:
//! ordering by an attribute that is unknown, or one a descriptor lacks.

use thiserror::Error;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors raised by query operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The attribute name is outside the sortable set
    #[error("unknown sort attribute: {0}")]
    UnknownAttribute(String),

    /// A descriptor in the sequence has no value for the sort attribute
    #[error("stream {itag} has no value for attribute '{attribute}'")]
    MissingAttribute {
        /// Format identifier of the offending descriptor
        itag: u32,
        /// The resolved attribute name
        attribute: &'static str,
    },
}

//! Query engine subsystem for streamq
//!
//! An immutable query interface over a fixed in-memory sequence of stream
//! descriptors: construct, optionally filter (chainable), optionally
//! order, then extract terminal results.
//!
//! # Design Principles
//!
//! - Immutable: every transformation returns a new query; the source stays
//!   valid and independently usable
//! - Deterministic: stable filter, stable sort, same inputs → same results
//! - Derived index: the itag index mirrors the sequence, last write wins
//!
//! # Error Policy
//!
//! Absence (`get_by_itag`, `first`, `last`) is a normal outcome expressed
//! as `None`. Ordering by an unknown attribute name, or by one a
//! descriptor lacks, is a hard error propagated unmodified to the caller.

mod criteria;
mod errors;
mod predicate;
mod query;
mod sort;

pub use criteria::FilterCriteria;
pub use errors::{QueryError, QueryResult};
pub use predicate::{CustomPredicate, Predicate};
pub use query::StreamQuery;
pub use sort::{SortKey, SortValue};

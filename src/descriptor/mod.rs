//! Stream descriptor model for streamq
//!
//! Descriptors are read-only records supplied by an external
//! collection-producer (e.g. a parsed available-formats manifest). The
//! query engine never mutates them; derived queries share them
//! structurally.

mod stream;

pub use stream::StreamDescriptor;

//! Separate chaining string dictionary.
//!
//! A fixed array of buckets, each holding a chain of owned key/value
//! entries; keys land in buckets through a djb2 hash. Capacity only grows
//! through an explicit [`Dict::resize`].

pub mod dict;

pub use dict::dict::{Dict, DictEntry};
pub use dict::error::HashError;
pub use dict::hash::djb2_hash;
pub use dict::iter::DictIterator;
pub use dict::stats::DictStats;

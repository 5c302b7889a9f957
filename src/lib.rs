//! A mutable hash array mapped trie (Bagwell, "Ideal Hash Trees", 2001):
//! a 32-way branching trie indexed by 5-bit hash slices, with
//! bitmap-compressed child arrays, a reseed protocol for hash exhaustion
//! and growth-aware array sizing.

mod alloc;
mod error;
mod iter;
mod map;
mod node;
mod opt;
mod sizing;
mod trie;
#[cfg(test)]
mod proptests;
#[macro_use]
mod builder;

// Public exports.
pub use alloc::{Allocator, MallocAllocator};
pub use error::InsertError;
pub use iter::Iter;
pub use map::{HamtMap, DEFAULT_HASH_SEED};

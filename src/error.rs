use core::fmt;

/// Reasons an insertion can fail.
///
/// On either failure the map is left in a consistent state: the entry count
/// is unchanged, every previously inserted entry is still reachable and no
/// memory is leaked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertError {
    /// The allocator returned a null pointer.
    AllocatorExhausted,
    /// Two distinct keys kept producing hashes identical in every bit the
    /// slice schedule can consume, across a reseed boundary, so the trie
    /// has no slice left to separate them.
    UnresolvableCollision,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::AllocatorExhausted => f.write_str("allocator exhausted"),
            InsertError::UnresolvableCollision => {
                f.write_str("keys collide under every available hash seed")
            }
        }
    }
}

impl std::error::Error for InsertError {}

//! Child-array capacity policy.
//!
//! Capacities follow a Fibonacci-flavoured growth sequence biased by trie
//! depth: top-level arrays race to the full 32 slots (so the hot level stops
//! reallocating early) while deep arrays stay tight, since far fewer entries
//! ever reach them.

/// Capacity guess indexed by `[level][generation]` where
/// `generation = ceil(log2(expected_size))` clamped to 22. Each level's
/// growth curve is shifted roughly five generations later than the one
/// above it.
#[rustfmt::skip]
const PER_LEVEL: [[u32; 23]; 5] = [
    // 1  2  4  8  16  32  64 128 256 512 2^10 2^11 2^12 2^13 2^14 2^15 2^16 2^17 2^18 2^19 2^20 2^21 2^22
    [  2, 3, 5, 8, 13, 21, 29, 32, 32, 32,  32,  32,  32,  32,  32,  32,  32,  32,  32,  32,  32,  32,  32],
    [  1, 1, 1, 1,  1,  2,  3,  5,  8, 13,  21,  29,  32,  32,  32,  32,  32,  32,  32,  32,  32,  32,  32],
    [  1, 1, 1, 1,  1,  1,  1,  1,  1,  1,   2,   3,   5,   8,  13,  21,  29,  32,  32,  32,  32,  32,  32],
    [  1, 1, 1, 1,  1,  1,  1,  1,  1,  1,   1,   1,   1,   1,   1,   2,   3,   5,   8,  13,  21,  29,  32],
    [  1, 1, 1, 1,  1,  1,  1,  1,  1,  1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1,   1],
];

/// Next growth stop at or above the required population.
#[rustfmt::skip]
const BY_REQUIRED: [u32; 33] = [
    // 0  1  2  3  4  5  6  7  8   9  10  11  12  13  14  15  16  17  18  19  20  21  22  23  24  25  26  27  28  29  30  31  32
       1, 1, 2, 3, 5, 5, 8, 8, 8, 13, 13, 13, 13, 13, 21, 21, 21, 21, 21, 21, 21, 21, 29, 29, 29, 29, 29, 29, 29, 29, 32, 32, 32,
];

/// Picks the capacity for a child array that must hold `required` nodes
/// after the pending insertion.
///
/// `expected_size` is the caller's hint of the eventual total entry count
/// and `level` is the 0-based trie depth. The result is always in
/// `[required, 32]`.
pub(crate) fn allocation_size(required: u32, expected_size: usize, level: u32) -> u32 {
    debug_assert!(required > 0 && required <= 32);
    debug_assert!(expected_size > 0);

    let (level, generation) = if level > 4 {
        (4, 0)
    } else {
        let generation = if expected_size == 1 {
            0
        } else {
            // ceil(log2(expected_size))
            let bits = 64 - ((expected_size - 1) as u64).leading_zeros();
            bits.min(22)
        };
        (level as usize, generation as usize)
    };

    let guess = PER_LEVEL[level][generation];
    if required > guess {
        return BY_REQUIRED[required as usize];
    }
    guess
}

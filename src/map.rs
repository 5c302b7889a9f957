use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use core::mem;
use core::ops::Index;
use core::ptr::{self, NonNull};

use ahash::RandomState;

use crate::alloc::{allocate_or_abort, Allocator, MallocAllocator};
use crate::error::InsertError;
use crate::iter::Iter;
use crate::node::{Entry, Node};
use crate::opt::branch_hints::{likely, unlikely};
use crate::sizing;
use crate::trie::BitmapTrie;

/// Default top-level hash seed: the low half of `0xFF51AFD7ED558CCD`.
///
/// The seed is mixed into every hash as `seed ^ hash(key)`, and reseeding
/// derives follow-up seeds from it. Embedders that may face untrusted keys
/// should pass a per-process random seed to
/// [`with_parts`](HamtMap::with_parts) or
/// [`with_hash_seed`](HamtMap::with_hash_seed) instead of relying on this
/// constant, to blunt hash-flooding attacks.
pub const DEFAULT_HASH_SEED: u32 = 0xED55_8CCD;

/// The slice schedule reads offsets 0, 5, …, 25 before reseeding, so only
/// the low 30 bits of a hash ever steer the descent. The cross-reseed
/// collision test must compare exactly these bits: hashes that differ only
/// in bits 30..32 are inseparable (the difference survives every reseed,
/// since reseeding XORs the same seed into both), and comparing all 32 bits
/// would keep splitting forever instead of failing.
const CONSUMED_HASH_MASK: u32 = 0x3FFF_FFFF;

/// Result of a descent that found (or made) a slot for the new entry.
struct InsertOutcome<K, V> {
    node: NonNull<Node<K, V>>,
    fresh: bool,
}

/// A hash array mapped trie: a 32-way branching trie keyed by 5-bit slices
/// of a seeded hash, storing only populated children through a
/// bitmap-compressed array per interior node.
///
/// Lookup and insertion run in O(log₃₂ n) on average. Entries are mutated
/// in place; there is no removal. When the 32-bit hash budget is exhausted
/// the map reseeds and keeps descending, so full hash collisions are
/// tolerated up to the (astronomically unlikely, but possible) point where
/// two distinct keys collide under every derived seed — such inserts fail
/// with [`InsertError::UnresolvableCollision`] and leave the map intact.
///
/// The root node lives at a stable heap address owned by the map, so moving
/// the map value never invalidates the parent back-links that children keep
/// into their containing arrays.
///
/// # Examples
///
/// ```
/// use hamt_map::HamtMap;
///
/// let mut map = HamtMap::new();
///
/// map.insert(1, "a").unwrap();
/// map.insert(2, "b").unwrap();
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&1), Some(&"a"));
/// assert_eq!(map.get(&3), None);
/// ```
pub struct HamtMap<K, V, S = RandomState, A: Allocator = MallocAllocator> {
    root: NonNull<Node<K, V>>,
    count: usize,
    seed: u32,
    hash_builder: S,
    allocator: A,
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl<K, V> HamtMap<K, V> {
    /// Creates an empty map with the default hasher, allocator and seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let map: HamtMap<i32, &str> = HamtMap::new();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.len(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_expected_size(1)
    }

    /// Creates an empty map sized for an eventual total of `expected_size`
    /// entries.
    ///
    /// The hint seeds the growth tables: a large hint makes top-level child
    /// arrays start near the full 32-way fan-out, trading memory for fewer
    /// reallocations while the map fills up.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::with_expected_size(10_000);
    /// map.insert(1, 1).unwrap();
    ///
    /// assert_eq!(map.len(), 1);
    /// ```
    #[must_use]
    #[inline]
    pub fn with_expected_size(expected_size: usize) -> Self {
        Self::with_parts(
            expected_size,
            DEFAULT_HASH_SEED,
            RandomState::new(),
            MallocAllocator,
        )
    }

    /// Creates an empty map with a caller-chosen top-level hash seed.
    #[must_use]
    #[inline]
    pub fn with_hash_seed(hash_seed: u32) -> Self {
        Self::with_parts(1, hash_seed, RandomState::new(), MallocAllocator)
    }
}

impl<K, V, S> HamtMap<K, V, S> {
    /// Creates an empty map that hashes keys with `hash_builder`.
    #[must_use]
    #[inline]
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_parts(1, DEFAULT_HASH_SEED, hash_builder, MallocAllocator)
    }
}

impl<K, V, A: Allocator> HamtMap<K, V, RandomState, A> {
    /// Creates an empty map whose node arrays come from `allocator`.
    #[must_use]
    #[inline]
    pub fn new_in(allocator: A) -> Self {
        Self::with_parts(1, DEFAULT_HASH_SEED, RandomState::new(), allocator)
    }
}

impl<K, V, S, A: Allocator> HamtMap<K, V, S, A> {
    /// Creates an empty map from all four construction knobs: the expected
    /// eventual entry count, the top-level hash seed, the hasher and the
    /// allocator.
    ///
    /// Construction allocates the root node and its initial child array;
    /// if the allocator fails here the process aborts through
    /// [`std::alloc::handle_alloc_error`], since there is no map yet to
    /// report an error from.
    #[must_use]
    pub fn with_parts(
        expected_size: usize,
        hash_seed: u32,
        hash_builder: S,
        mut allocator: A,
    ) -> Self {
        let expected = expected_size.max(1);
        let root_capacity = sizing::allocation_size(1, expected, 0);

        let root = allocate_or_abort::<Node<K, V>, A>(&mut allocator, 1);
        let root_trie = BitmapTrie::allocate(&mut allocator, root_capacity);

        unsafe {
            ptr::write(root, Node::new_trie(root_trie, ptr::null_mut()));
            HamtMap {
                root: NonNull::new_unchecked(root),
                count: 0,
                seed: hash_seed,
                hash_builder,
                allocator,
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl<K, V, S, A: Allocator> HamtMap<K, V, S, A> {
    /// Returns the number of entries in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// assert_eq!(map.len(), 0);
    ///
    /// map.insert(1, "a").unwrap();
    /// map.insert(2, "b").unwrap();
    ///
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Checks if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let map: HamtMap<i32, &str> = HamtMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns a reference to the map's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns a reference to the map's allocator.
    #[inline]
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Returns the top-level hash seed the map was constructed with.
    #[inline]
    pub fn hash_seed(&self) -> u32 {
        self.seed
    }

    /// Returns an iterator over `(&key, &value)` pairs in depth-first leaf
    /// order. The order is unspecified but deterministic for a given seed,
    /// hasher state and insertion sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// map.insert(1, 10).unwrap();
    /// map.insert(2, 20).unwrap();
    ///
    /// let mut sum = 0;
    /// for (_key, value) in map.iter() {
    ///     sum += *value;
    /// }
    /// assert_eq!(sum, 30);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root.as_ptr(), self.count)
    }

    /// Removes every entry, releasing all child arrays. The map stays
    /// usable and keeps its seed, hasher and allocator.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// map.clear();
    ///
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&1), None);
    /// ```
    pub fn clear(&mut self) {
        let root = self.root.as_ptr();
        unsafe {
            (*root).as_trie_mut().clear(&mut self.allocator);
        }
        self.count = 0;
    }

    /// Exchanges the contents of two maps, including their seeds, hashers
    /// and allocators. No allocation takes place; since root nodes are
    /// heap-stable, every parent back-link remains exact.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }
}

// ---------------------------------------------------------------------------
// Hash schedule
// ---------------------------------------------------------------------------

impl<K, V, S, A: Allocator> HamtMap<K, V, S, A> {
    /// Derives the next seed when 32 bits of hash are spent (xorshift32).
    #[inline(always)]
    const fn next_seed(seed: u32) -> u32 {
        let mut s = seed;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        s
    }

    /// Mixed 32-bit hash of `key` under `seed`.
    #[inline(always)]
    fn hash32(&self, key: &K, seed: u32) -> u32
    where
        K: Hash,
        S: BuildHasher,
    {
        ((seed as u64) ^ self.hash_builder.hash_one(key)) as u32
    }
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

impl<K, V, S, A> HamtMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: Allocator,
{
    /// Descends to the leaf holding `key`, if any.
    ///
    /// A leaf owns the whole subtree below the slot it sits in, so the
    /// descent short-circuits to a single key comparison as soon as it
    /// meets one.
    pub(crate) fn find_node(&self, key: &K) -> Option<NonNull<Node<K, V>>> {
        let mut seed = self.seed;
        let mut hash = self.hash32(key, seed);
        let mut hash_offset = 0u32;

        unsafe {
            let mut trie = (*self.root.as_ptr()).as_trie();
            let mut t = hash & 0x1f;

            while trie.logical_position_taken(t) {
                let node = trie.logical_ptr(t);
                if (*node).is_entry() {
                    if (*node).as_entry().key == *key {
                        return Some(NonNull::new_unchecked(node));
                    }
                    return None;
                }

                // The slot holds a trie. Keep searching.
                if likely(hash_offset < 25) {
                    hash_offset += 5;
                } else {
                    hash_offset = 0;
                    seed = Self::next_seed(seed);
                    hash = self.hash32(key, seed);
                }

                trie = (*node).as_trie();
                t = (hash >> hash_offset) & 0x1f;
            }
        }

        None
    }

    /// Retrieves a reference to the value stored under `key`.
    ///
    /// # Time Complexity
    ///
    /// _O_(log₃₂ n) on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        let node = self.find_node(key)?;
        unsafe { Some(&(*node.as_ptr()).as_entry().value) }
    }

    /// Retrieves a mutable reference to the value stored under `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// map.insert(1, 10).unwrap();
    ///
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 1;
    /// }
    ///
    /// assert_eq!(map.get(&1), Some(&11));
    /// ```
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.find_node(key)?;
        unsafe { Some(&mut (*node.as_ptr()).as_entry_mut().value) }
    }

    /// Retrieves the stored key-value pair for `key`. The entry view of
    /// [`get`](Self::get).
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// assert_eq!(map.get_key_value(&1), Some((&1, &"a")));
    /// ```
    #[must_use]
    #[inline]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let node = self.find_node(key)?;
        unsafe {
            let entry = (*node.as_ptr()).as_entry();
            Some((&entry.key, &entry.value))
        }
    }

    /// Returns `true` if the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    /// map.insert(1, "a").unwrap();
    ///
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    #[must_use]
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

impl<K, V, S, A> HamtMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: Allocator,
{
    /// Inserts a key-value pair, returning a mutable reference to the
    /// stored value.
    ///
    /// If the key is already present its value is overwritten in place and
    /// the entry count does not change. Otherwise the entry is placed at
    /// the first free slot along its hash path, splitting a colliding leaf
    /// into a fresh interior node when needed.
    ///
    /// # Errors
    ///
    /// - [`InsertError::AllocatorExhausted`] if a child array could not be
    ///   allocated or grown.
    /// - [`InsertError::UnresolvableCollision`] if the key collides with an
    ///   existing distinct key under every hash seed the reseed protocol
    ///   reached.
    ///
    /// On error the map is observably unchanged: the count is the same and
    /// every previously inserted entry is still found.
    ///
    /// # Time Complexity
    ///
    /// _O_(log₃₂ n) on average, amortized over child-array growth.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamt_map::HamtMap;
    ///
    /// let mut map = HamtMap::new();
    ///
    /// map.insert(1, "a").unwrap();
    /// assert_eq!(map.get(&1), Some(&"a"));
    ///
    /// // Overwriting does not grow the map.
    /// map.insert(1, "b").unwrap();
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<&mut V, InsertError> {
        let seed = self.seed;
        let hash = self.hash32(&key, seed);

        let outcome = self.insert_entry(Entry { key, value }, seed, hash)?;
        if outcome.fresh {
            self.count += 1;
        }
        unsafe { Ok(&mut (*outcome.node.as_ptr()).as_entry_mut().value) }
    }

    /// Iterative descent for `insert`. Resolves to one of three cases at
    /// the slot the current hash slice selects: place the entry in a free
    /// slot, recurse into an interior child, or hit a leaf (overwrite on
    /// key match, split otherwise).
    fn insert_entry(
        &mut self,
        new_entry: Entry<K, V>,
        mut seed: u32,
        mut hash: u32,
    ) -> Result<InsertOutcome<K, V>, InsertError> {
        let mut hash_offset = 0u32;
        let mut level = 0u32;
        let mut trie_node = self.root.as_ptr();
        let expected_size = self.count + 1;

        unsafe {
            loop {
                let hash_slice = (hash >> hash_offset) & 0x1f;
                let trie = (*trie_node).as_trie_mut();

                if unlikely(!trie.logical_position_taken(hash_slice)) {
                    let node = trie.insert_entry(
                        &mut self.allocator,
                        hash_slice,
                        new_entry,
                        trie_node,
                        expected_size,
                        level,
                    );
                    if node.is_null() {
                        return Err(InsertError::AllocatorExhausted);
                    }
                    return Ok(InsertOutcome {
                        node: NonNull::new_unchecked(node),
                        fresh: true,
                    });
                }

                let node = trie.logical_ptr(hash_slice);
                if (*node).is_trie() {
                    if likely(hash_offset < 25) {
                        hash_offset += 5;
                    } else {
                        hash_offset = 0;
                        seed = Self::next_seed(seed);
                        hash = self.hash32(&new_entry.key, seed);
                    }
                    trie_node = node;
                    level += 1;
                    continue;
                }

                // The slot holds a leaf. Matching keys overwrite in place.
                if (*node).as_entry().key == new_entry.key {
                    (*node).as_entry_mut().value = new_entry.value;
                    return Ok(InsertOutcome {
                        node: NonNull::new_unchecked(node),
                        fresh: false,
                    });
                }

                return self.split_leaf(node, new_entry, seed, hash, hash_offset, level);
            }
        }
    }

    /// Replaces the leaf at `node` with an interior trie holding both the
    /// displaced entry and `new_entry`, chaining deeper while their hash
    /// slices keep coinciding.
    ///
    /// On allocator failure the displaced entry is written back where it
    /// was and nothing is leaked. On a cross-reseed collision the displaced
    /// entry stays reachable (possibly one level deeper than it started)
    /// and the new entry is rejected.
    ///
    /// # Safety
    ///
    /// `node` must be a leaf whose key differs from `new_entry.key`, and
    /// the schedule arguments must describe the level `node` sits at.
    unsafe fn split_leaf(
        &mut self,
        node: *mut Node<K, V>,
        new_entry: Entry<K, V>,
        mut seed: u32,
        mut hash: u32,
        mut hash_offset: u32,
        mut level: u32,
    ) -> Result<InsertOutcome<K, V>, InsertError> {
        let expected_size = self.count + 1;
        let mut old_hash;

        unsafe {
            // Advance the schedule once for the level below the leaf.
            if likely(hash_offset < 25) {
                hash_offset += 5;
                old_hash = self.hash32(&(*node).as_entry().key, seed);
            } else {
                hash_offset = 0;
                seed = Self::next_seed(seed);
                hash = self.hash32(&new_entry.key, seed);
                old_hash = self.hash32(&(*node).as_entry().key, seed);
                if unlikely((hash ^ old_hash) & CONSUMED_HASH_MASK == 0) {
                    return Err(InsertError::UnresolvableCollision);
                }
            }

            let mut entry_node = node;
            let mut old_entry = (*entry_node).take_entry();

            loop {
                level += 1;

                // Arm the vacated leaf as a two-slot interior node.
                let trie = match BitmapTrie::try_allocate(&mut self.allocator, 2) {
                    Some(trie) => trie,
                    None => {
                        (*entry_node).put_entry(old_entry);
                        return Err(InsertError::AllocatorExhausted);
                    }
                };
                (*entry_node).make_trie(trie);

                let old_slice = (old_hash >> hash_offset) & 0x1f;
                let new_slice = (hash >> hash_offset) & 0x1f;

                if old_slice != new_slice {
                    // The slices diverge: both entries fit the fresh trie,
                    // whose capacity of 2 rules out further allocation.
                    let trie = (*entry_node).as_trie_mut();
                    let relocated = trie.insert_entry(
                        &mut self.allocator,
                        old_slice,
                        old_entry,
                        entry_node,
                        expected_size,
                        level,
                    );
                    debug_assert!(!relocated.is_null());
                    let inserted = trie.insert_entry(
                        &mut self.allocator,
                        new_slice,
                        new_entry,
                        entry_node,
                        expected_size,
                        level,
                    );
                    debug_assert!(!inserted.is_null());
                    return Ok(InsertOutcome {
                        node: NonNull::new_unchecked(inserted),
                        fresh: true,
                    });
                }

                // Same slice again: the displaced entry sinks one level and
                // the split continues below it.
                let sunk = (*entry_node).as_trie_mut().insert_entry(
                    &mut self.allocator,
                    old_slice,
                    old_entry,
                    entry_node,
                    expected_size,
                    level,
                );
                debug_assert!(!sunk.is_null());

                if likely(hash_offset < 25) {
                    hash_offset += 5;
                } else {
                    hash_offset = 0;
                    seed = Self::next_seed(seed);
                    hash = self.hash32(&new_entry.key, seed);
                    old_hash = self.hash32(&(*sunk).as_entry().key, seed);
                    if unlikely((hash ^ old_hash) & CONSUMED_HASH_MASK == 0) {
                        // The displaced entry is already reachable at its
                        // deepened slot; only the new entry is rejected.
                        return Err(InsertError::UnresolvableCollision);
                    }
                }

                entry_node = sunk;
                old_entry = (*entry_node).take_entry();
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<K, V, S, A: Allocator> Drop for HamtMap<K, V, S, A> {
    fn drop(&mut self) {
        let root = self.root.as_ptr();
        unsafe {
            (*root).as_trie_mut().clear(&mut self.allocator);
            self.allocator.deallocate(root, 1);
        }
    }
}

impl<K, V, S: Default, A: Allocator + Default> Default for HamtMap<K, V, S, A> {
    #[inline]
    fn default() -> Self {
        Self::with_parts(1, DEFAULT_HASH_SEED, S::default(), A::default())
    }
}

impl<K, V, S, A> Clone for HamtMap<K, V, S, A>
where
    K: Clone,
    V: Clone,
    S: Clone,
    A: Allocator + Clone,
{
    /// Deep-copies the whole trie. Child arrays in the copy keep their
    /// original capacities; the copy owns a fresh root at its own stable
    /// address.
    fn clone(&self) -> Self {
        let mut allocator = self.allocator.clone();
        let root = allocate_or_abort::<Node<K, V>, A>(&mut allocator, 1);
        unsafe {
            ptr::write(root, Node::new_trie(BitmapTrie::empty(), ptr::null_mut()));
            BitmapTrie::clone_into(&mut allocator, root, (*self.root.as_ptr()).as_trie());
            HamtMap {
                root: NonNull::new_unchecked(root),
                count: self.count,
                seed: self.seed,
                hash_builder: self.hash_builder.clone(),
                allocator,
            }
        }
    }

    /// Clears `self` first, then clones `source` into the freshly reset
    /// root. The destination keeps its own allocator.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.seed = source.seed;
        self.hash_builder = source.hash_builder.clone();
        unsafe {
            BitmapTrie::clone_into(
                &mut self.allocator,
                self.root.as_ptr(),
                (*source.root.as_ptr()).as_trie(),
            );
        }
        self.count = source.count;
    }
}

impl<K, V, S, A> Debug for HamtMap<K, V, S, A>
where
    K: Debug,
    V: Debug,
    A: Allocator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, S, A> Extend<(K, V)> for HamtMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: Allocator,
{
    /// Inserts every pair from `iter`. Pairs whose insertion fails (see
    /// [`insert`](HamtMap::insert)) are skipped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            let _ = self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HamtMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = Self::with_expected_size(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K, V, S, A> Index<&K> for HamtMap<K, V, S, A>
where
    K: Hash + Eq,
    S: BuildHasher,
    A: Allocator,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not found")
    }
}

impl<'a, K, V, S, A: Allocator> IntoIterator for &'a HamtMap<K, V, S, A> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Development and testing accessors that are not part of the public API.
#[cfg(test)]
impl<K, V, S, A: Allocator> HamtMap<K, V, S, A> {
    /// Raw pointer to the root node, for invariant walkers.
    pub(crate) fn debug_root(&self) -> *mut Node<K, V> {
        self.root.as_ptr()
    }

    /// Capacity of the root's child array.
    pub(crate) fn debug_root_capacity(&self) -> u32 {
        unsafe { (*self.root.as_ptr()).as_trie().capacity() }
    }
}

//! # Bounded Recency Cache
//!
//! A fixed-capacity key/value store that stamps every access with a monotonic
//! logical clock and evicts the least-recently-accessed entry when insertion
//! of a new key would exceed capacity.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────────┐
//!   │                    BoundedRecencyCache<K, V>                       │
//!   │                                                                    │
//!   │   ┌──────────────────────────────────────────────────────────┐    │
//!   │   │  FxHashMap<K, NonNull<Node>> (key index)                 │    │
//!   │   └──────────────────────────┬───────────────────────────────┘    │
//!   │                              │                                    │
//!   │   ┌──────────────────────────▼───────────────────────────────┐    │
//!   │   │  Doubly linked node list (recency order)                 │    │
//!   │   │                                                          │    │
//!   │   │  head ──► ┌────────┐ ◄──► ┌────────┐ ◄──► ┌────────┐ ◄── tail │
//!   │   │   (MRU)   │stamp 9 │      │stamp 4 │      │stamp 2 │  (LRU)   │
//!   │   │           └────────┘      └────────┘      └────────┘          │
//!   │   │                                                          │    │
//!   │   │  Stamps strictly decrease head → tail, so the tail       │    │
//!   │   │  always holds the minimum last_access.                   │    │
//!   │   └──────────────────────────────────────────────────────────┘    │
//!   │                                                                    │
//!   │   clock: u64 — pre-incremented before every stamp (first stamp 1)  │
//!   └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Flow
//!
//! ```text
//!   INSERT new key (cache full)
//!   ═══════════════════════════════════════════════════════════════════
//!     1. Pop the tail node — by construction the minimum-stamp entry
//!     2. Remove its key from the index
//!     3. Allocate the new node with a fresh stamp, attach at head
//!   Both steps happen inside one &mut call: no caller observes the
//!   intermediate state.
//!
//!   ACCESS existing key (get / touch / overwrite)
//!   ═══════════════════════════════════════════════════════════════════
//!     1. Index lookup: O(1)
//!     2. Stamp with the next clock value
//!     3. Detach and re-attach at head: O(1)
//! ```
//!
//! ## Methods
//!
//! | Method            | Complexity | Description                              |
//! |-------------------|------------|------------------------------------------|
//! | `new(capacity)`   | O(1)       | Create cache; capacity 0 accepts nothing |
//! | `try_new(cap)`    | O(1)       | Validating constructor, rejects 0        |
//! | `insert(k, v)`    | O(1)*      | Upsert, may evict the LRU entry          |
//! | `get(&k)`         | O(1)       | Value ref, stamps + moves to head        |
//! | `peek(&k)`        | O(1)       | Value ref without recency update         |
//! | `contains(&k)`    | O(1)       | Existence check, no recency update       |
//! | `remove(&k)`      | O(1)       | Remove entry by key                      |
//! | `pop_lru()`       | O(1)       | Remove and return the oldest entry       |
//! | `peek_lru()`      | O(1)       | Inspect the next eviction victim         |
//! | `touch(&k)`       | O(1)       | Stamp + move to head, value untouched    |
//! | `recency_rank()`  | O(n)       | Position in recency order (0 = MRU)      |
//! | `keys()`          | O(1)/step  | Deterministic traversal, MRU → LRU       |
//! | `stats()`         | O(n)       | Diagnostic snapshot incl. key list       |
//! | `len()`/`clear()` | O(1)/O(n)  | Entry count / drop all entries           |
//!
//! ## Recency Clock
//!
//! `last_access` stamps come from a `u64` logical counter rather than wall
//! time: deterministic, immune to clock resolution, and free of ties — the
//! counter increments on every stamped access, so "smallest stamp" always
//! names exactly one entry and the eviction victim is never ambiguous.
//! Misses (`get`/`touch` on an absent key) do not advance the clock.
//!
//! ## Ownership and Safety
//!
//! Nodes are heap-allocated and tracked via `NonNull` handles; the index owns
//! the key → node mapping and the `Drop` impl frees every node. Values are
//! stored as given — the cache never clones or copies a payload. The core is
//! single-threaded: it is `Send` (it owns all node memory) but not `Sync`,
//! and callers needing shared access wrap it in their own lock.
//!
//! ## Example
//!
//! ```
//! use recencykit::policy::recency::BoundedRecencyCache;
//! use recencykit::traits::{CoreCache, RecencyCache};
//!
//! let mut cache: BoundedRecencyCache<&str, u32> = BoundedRecencyCache::new(3);
//! cache.insert("a", 1);
//! cache.insert("b", 2);
//! cache.insert("c", 3);
//!
//! cache.get(&"a");        // "a" is now most recent
//! cache.insert("d", 4);   // evicts "b", the least recent
//!
//! assert!(!cache.contains(&"b"));
//! assert_eq!(cache.len(), 3);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.len, 3);
//! assert!(stats.keys.contains(&"d"));
//! ```

use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use rustc_hash::FxHashMap;

use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::RecencyMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{
    CoreMetricsRecorder, MetricsSnapshotProvider, RecencyMetricsReadRecorder,
    RecencyMetricsRecorder,
};
#[cfg(feature = "metrics")]
use crate::metrics::RecencyMetrics;
use crate::traits::{CoreCache, MutableCache, RecencyCache};

/// Node in the recency list.
///
/// Layout keeps the link pointers first for traversal, followed by the key
/// (needed for index removal during eviction), the payload, and the stamp.
#[repr(C)]
struct Node<K, V> {
    prev: Option<NonNull<Node<K, V>>>,
    next: Option<NonNull<Node<K, V>>>,
    key: K,
    value: V,
    last_access: u64,
}

/// Bounded cache evicting the least-recently-accessed entry.
///
/// See the [module docs](self) for the architecture. Universal operations
/// come from [`CoreCache`], removal from [`MutableCache`], and the
/// recency-specific surface from [`RecencyCache`].
///
/// # Capacity
///
/// `capacity` is fixed at construction. A capacity of 0 creates a cache that
/// accepts no items (all inserts are no-ops); use [`try_new`](Self::try_new)
/// to reject that at construction time instead.
pub struct BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    map: FxHashMap<K, NonNull<Node<K, V>>>,
    head: Option<NonNull<Node<K, V>>>,
    tail: Option<NonNull<Node<K, V>>>,
    capacity: usize,
    clock: u64,
    #[cfg(feature = "metrics")]
    metrics: RecencyMetrics,
}

// SAFETY: the cache can move between threads if K and V can. The raw
// pointers only reference heap memory owned by the struct; no aliasing
// escapes the type. The cache is intentionally NOT Sync: mutation requires
// &mut self, and shared use needs an external lock.
unsafe impl<K, V> Send for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Send,
{
}

impl<K, V> BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a new cache with the given capacity.
    ///
    /// A capacity of 0 is honored: the cache stays permanently empty and
    /// inserts are no-ops. This constructor never panics.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    ///
    /// let cache: BoundedRecencyCache<u32, String> = BoundedRecencyCache::new(100);
    /// ```
    #[inline]
    pub fn new(capacity: usize) -> Self {
        BoundedRecencyCache {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            head: None,
            tail: None,
            capacity,
            clock: 0,
            #[cfg(feature = "metrics")]
            metrics: RecencyMetrics::default(),
        }
    }

    /// Creates a new cache, rejecting a zero capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    ///
    /// assert!(BoundedRecencyCache::<u32, u32>::try_new(8).is_ok());
    /// assert!(BoundedRecencyCache::<u32, u32>::try_new(0).is_err());
    /// ```
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("capacity must be greater than zero"));
        }
        Ok(Self::new(capacity))
    }

    /// Advance the clock and return the fresh stamp.
    #[inline(always)]
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Detach a node from the linked list without removing it from the index.
    #[inline(always)]
    fn detach(&mut self, node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_ref();
            let prev = node.prev;
            let next = node.next;

            match prev {
                Some(mut p) => p.as_mut().next = next,
                None => self.head = next,
            }

            match next {
                Some(mut n) => n.as_mut().prev = prev,
                None => self.tail = prev,
            }
        }
    }

    /// Attach a node at the front (most-recent position).
    ///
    /// Callers must have stamped the node with a fresh clock value first:
    /// the head is required to carry the maximum stamp.
    #[inline(always)]
    fn attach_front(&mut self, mut node_ptr: NonNull<Node<K, V>>) {
        unsafe {
            let node = node_ptr.as_mut();
            node.prev = None;
            node.next = self.head;

            match self.head {
                Some(mut h) => h.as_mut().prev = Some(node_ptr),
                None => self.tail = Some(node_ptr),
            }

            self.head = Some(node_ptr);
        }
    }

    /// Pop the tail node (minimum stamp) and return it.
    #[inline(always)]
    fn pop_tail(&mut self) -> Option<Box<Node<K, V>>> {
        self.tail.map(|tail_ptr| unsafe {
            let node = Box::from_raw(tail_ptr.as_ptr());

            self.tail = node.prev;
            match self.tail {
                Some(mut t) => t.as_mut().next = None,
                None => self.head = None,
            }

            node
        })
    }

    /// Panic in debug builds if the structure is corrupted.
    #[inline]
    fn debug_validate(&self) {
        #[cfg(debug_assertions)]
        if let Err(err) = self.check_invariants() {
            panic!("recency cache invariant violated: {err}");
        }
    }

    /// Reads a value without counting as an access.
    ///
    /// Unlike [`get`](CoreCache::get), this does not stamp the entry or move
    /// it in the recency order: the entry stays exactly as evictable as it
    /// was.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache = BoundedRecencyCache::new(2);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// assert_eq!(cache.peek(&1), Some(&"first"));
    ///
    /// // Key 1 is still the eviction victim
    /// cache.insert(3, "third");
    /// assert!(!cache.contains(&1));
    /// ```
    #[inline]
    pub fn peek(&self, key: &K) -> Option<&V> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_call();

        let node_ptr = self.map.get(key)?;
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_found();
        unsafe { Some(&(*node_ptr.as_ptr()).value) }
    }

    /// Returns a deterministic iterator over the keys, most- to
    /// least-recently accessed.
    ///
    /// Traversal order is deterministic for a given operation history, but
    /// callers should treat the specific order as unspecified.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache = BoundedRecencyCache::new(3);
    /// cache.insert('a', 1);
    /// cache.insert('b', 2);
    ///
    /// let mut keys: Vec<char> = cache.keys().copied().collect();
    /// keys.sort();
    /// assert_eq!(keys, vec!['a', 'b']);
    /// assert_eq!(cache.keys().len(), 2);
    /// ```
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys {
            next: self.head,
            remaining: self.map.len(),
            marker: PhantomData,
        }
    }

    /// Takes a diagnostic snapshot: entry count, capacity, the full key
    /// list, and the extreme access stamps.
    ///
    /// On an empty cache `oldest_access` and `newest_access` are `None`;
    /// there is no magic sentinel value that could collide with a real
    /// stamp, and the call never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache: BoundedRecencyCache<u32, u32> = BoundedRecencyCache::new(4);
    /// let empty = cache.stats();
    /// assert_eq!(empty.len, 0);
    /// assert!(empty.keys.is_empty());
    /// assert_eq!(empty.oldest_access, None);
    /// assert_eq!(empty.newest_access, None);
    ///
    /// cache.insert(7, 70);
    /// let stats = cache.stats();
    /// assert_eq!(stats.len, 1);
    /// assert_eq!(stats.capacity, 4);
    /// assert_eq!(stats.keys, vec![7]);
    /// assert_eq!(stats.oldest_access, stats.newest_access);
    /// ```
    pub fn stats(&self) -> CacheStats<K> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_stats_call();

        CacheStats {
            len: self.map.len(),
            capacity: self.capacity,
            keys: self.keys().cloned().collect(),
            oldest_access: self.oldest_access(),
            newest_access: self.newest_access(),
        }
    }

    /// Audits the internal structure.
    ///
    /// Verifies that the index and the recency list agree entry-for-entry,
    /// that back-links are consistent, and that stamps strictly decrease
    /// from head to tail within the clock's range. A healthy cache always
    /// returns `Ok(())`; mutating operations run this audit via
    /// `debug_assert!` in debug builds.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.map.is_empty() {
            if self.head.is_some() || self.tail.is_some() {
                return Err(InvariantError::new("empty index with non-empty recency list"));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut prev: Option<NonNull<Node<K, V>>> = None;
        let mut prev_stamp = u64::MAX;
        let mut current = self.head;

        while let Some(ptr) = current {
            if count >= self.map.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
            let node = unsafe { ptr.as_ref() };
            if node.prev != prev {
                return Err(InvariantError::new("recency list back-link mismatch"));
            }
            match self.map.get(&node.key) {
                Some(&indexed) if indexed == ptr => {},
                Some(_) => {
                    return Err(InvariantError::new(
                        "index points at a different node for a listed key",
                    ));
                },
                None => return Err(InvariantError::new("listed key missing from index")),
            }
            if node.last_access == 0 || node.last_access > self.clock {
                return Err(InvariantError::new("access stamp outside clock range"));
            }
            if node.last_access >= prev_stamp {
                return Err(InvariantError::new(
                    "recency list not strictly ordered by access stamp",
                ));
            }
            prev_stamp = node.last_access;
            count += 1;
            prev = Some(ptr);
            current = node.next;
        }

        if self.tail != prev {
            return Err(InvariantError::new("tail does not terminate the recency list"));
        }
        if count != self.map.len() {
            return Err(InvariantError::new(
                "index and recency list disagree on entry count",
            ));
        }
        Ok(())
    }
}

impl<K, V> CoreCache<K, V> for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Upsert. An existing key keeps its node: the value is replaced, the
    /// stamp refreshed, and nothing is evicted regardless of fill level. A
    /// new key at capacity first evicts the tail (the minimum-stamp entry),
    /// then inserts; both happen within this single call.
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(&node_ptr) = self.map.get(&key) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let stamp = self.tick();
            let previous = unsafe {
                let node = &mut *node_ptr.as_ptr();
                node.last_access = stamp;
                std::mem::replace(&mut node.value, value)
            };

            self.detach(node_ptr);
            self.attach_front(node_ptr);

            self.debug_validate();
            return Some(previous);
        }

        // A zero-capacity cache never stores anything.
        if self.capacity == 0 {
            return None;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        if self.map.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            if let Some(evicted) = self.pop_tail() {
                self.map.remove(&evicted.key);
                #[cfg(feature = "metrics")]
                self.metrics.record_evicted_entry();
            }
        }

        let stamp = self.tick();
        let node = Box::new(Node {
            prev: None,
            next: None,
            key: key.clone(),
            value,
            last_access: stamp,
        });
        let node_ptr = NonNull::from(Box::leak(node));

        self.map.insert(key, node_ptr);
        self.attach_front(node_ptr);

        self.debug_validate();
        None
    }

    /// Hit: stamp, move to head, return the value. Miss: no side effect at
    /// all — the clock does not advance and nothing is evicted.
    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        let node_ptr = match self.map.get(key) {
            Some(&ptr) => ptr,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        let stamp = self.tick();
        unsafe {
            (*node_ptr.as_ptr()).last_access = stamp;
        }
        self.detach(node_ptr);
        self.attach_front(node_ptr);

        self.debug_validate();

        unsafe { Some(&(*node_ptr.as_ptr()).value) }
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        while self.pop_tail().is_some() {}
        self.map.clear();

        self.debug_validate();
    }
}

impl<K, V> MutableCache<K, V> for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        let node_ptr = self.map.remove(key)?;

        self.detach(node_ptr);
        let node = unsafe { Box::from_raw(node_ptr.as_ptr()) };

        self.debug_validate();

        Some(node.value)
    }
}

impl<K, V> RecencyCache<K, V> for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_call();

        let node = self.pop_tail()?;
        self.map.remove(&node.key);

        self.debug_validate();

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_lru_found();

        Some((node.key, node.value))
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_peek_lru_call();

        self.tail.map(|tail_ptr| {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_peek_lru_found();
            unsafe {
                let node = &*tail_ptr.as_ptr();
                (&node.key, &node.value)
            }
        })
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        if let Some(&node_ptr) = self.map.get(key) {
            let stamp = self.tick();
            unsafe {
                (*node_ptr.as_ptr()).last_access = stamp;
            }
            self.detach(node_ptr);
            self.attach_front(node_ptr);

            self.debug_validate();

            #[cfg(feature = "metrics")]
            self.metrics.record_touch_found();

            true
        } else {
            false
        }
    }

    fn recency_rank(&self, key: &K) -> Option<usize> {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_recency_rank_call();

        let &target_ptr = self.map.get(key)?;
        let mut rank = 0usize;
        let mut current = self.head;

        while let Some(ptr) = current {
            #[cfg(feature = "metrics")]
            (&self.metrics).record_recency_rank_scan_step();

            if ptr == target_ptr {
                #[cfg(feature = "metrics")]
                (&self.metrics).record_recency_rank_found();
                return Some(rank);
            }
            rank += 1;
            current = unsafe { ptr.as_ref().next };
        }
        None
    }

    #[inline]
    fn last_access(&self, key: &K) -> Option<u64> {
        self.map
            .get(key)
            .map(|&ptr| unsafe { (*ptr.as_ptr()).last_access })
    }

    #[inline]
    fn oldest_access(&self) -> Option<u64> {
        self.tail.map(|ptr| unsafe { ptr.as_ref().last_access })
    }

    #[inline]
    fn newest_access(&self) -> Option<u64> {
        self.head.map(|ptr| unsafe { ptr.as_ref().last_access })
    }
}

#[cfg(feature = "metrics")]
impl<K, V> BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Copies the operation counters out, together with the current fill
    /// gauges. Observational only; no counter is reset.
    pub fn metrics_snapshot(&self) -> RecencyMetricsSnapshot {
        RecencyMetricsSnapshot {
            get_calls: self.metrics.get_hits + self.metrics.get_misses,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            clear_calls: self.metrics.clear_calls,
            pop_lru_calls: self.metrics.pop_lru_calls,
            pop_lru_found: self.metrics.pop_lru_found,
            peek_calls: self.metrics.peek_calls.get(),
            peek_found: self.metrics.peek_found.get(),
            peek_lru_calls: self.metrics.peek_lru_calls.get(),
            peek_lru_found: self.metrics.peek_lru_found.get(),
            touch_calls: self.metrics.touch_calls,
            touch_found: self.metrics.touch_found,
            recency_rank_calls: self.metrics.recency_rank_calls.get(),
            recency_rank_found: self.metrics.recency_rank_found.get(),
            recency_rank_scan_steps: self.metrics.recency_rank_scan_steps.get(),
            stats_calls: self.metrics.stats_calls.get(),
            cache_len: self.map.len(),
            capacity: self.capacity,
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<RecencyMetricsSnapshot> for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn snapshot(&self) -> RecencyMetricsSnapshot {
        self.metrics_snapshot()
    }
}

// Free all heap-allocated nodes when the cache is dropped.
impl<K, V> Drop for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn drop(&mut self) {
        while self.pop_tail().is_some() {}
    }
}

impl<K, V> fmt::Debug for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedRecencyCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

impl<K, V> Default for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a cache with a default capacity of 16.
    fn default() -> Self {
        Self::new(16)
    }
}

impl<K, V> Extend<(K, V)> for BoundedRecencyCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Iterator over cache keys in recency order (most recent first).
///
/// Returned by [`BoundedRecencyCache::keys`]. Borrows the cache for its
/// lifetime, so the underlying entries cannot move or be freed while it is
/// alive.
pub struct Keys<'a, K, V> {
    next: Option<NonNull<Node<K, V>>>,
    remaining: usize,
    marker: PhantomData<&'a (K, V)>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let ptr = self.next?;
        let node = unsafe { &*ptr.as_ptr() };
        self.next = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keys")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

/// Diagnostic snapshot of a cache.
///
/// Produced by [`BoundedRecencyCache::stats`]. `keys` lists every current
/// key (most-recent first); `oldest_access`/`newest_access` are the extreme
/// stamps, `None` when the cache is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheStats<K> {
    /// Current entry count.
    pub len: usize,
    /// Configured maximum entry count.
    pub capacity: usize,
    /// Every current key, most-recently accessed first.
    pub keys: Vec<K>,
    /// Smallest access stamp across entries; `None` when empty.
    pub oldest_access: Option<u64>,
    /// Largest access stamp across entries; `None` when empty.
    pub newest_access: Option<u64>,
}

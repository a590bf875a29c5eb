//! # Cache Trait Hierarchy
//!
//! This module defines the trait seam for the cache core, so callers can stay
//! generic over the cache while the policy-appropriate operation set remains
//! explicit.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&K) → Option<V>                 │
//!   │  remove_batch(&[K]) → Vec<Option<V>>    │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           RecencyCache<K, V>            │
//!   │                                         │
//!   │  pop_lru() → (K, V)                     │
//!   │  peek_lru() → (&K, &V)                  │
//!   │  touch(&K) → bool                       │
//!   │  recency_rank(&K) → usize               │
//!   │  last_access(&K) → u64                  │
//!   │  oldest_access() / newest_access()      │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! ## Trait Summary
//!
//! | Trait          | Extends        | Purpose                               |
//! |----------------|----------------|---------------------------------------|
//! | `CoreCache`    | -              | Universal cache operations            |
//! | `MutableCache` | `CoreCache`    | Adds arbitrary key removal            |
//! | `RecencyCache` | `MutableCache` | Recency-ordered eviction + stamps     |
//!
//! The one shipped implementation is
//! [`BoundedRecencyCache`](crate::policy::recency::BoundedRecencyCache),
//! which implements all three.

/// Core cache operations that all caches support.
///
/// # Type Parameters
///
/// - `K`: Key type (implementations typically require `Eq + Hash`)
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use recencykit::policy::recency::BoundedRecencyCache;
/// use recencykit::traits::CoreCache;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = BoundedRecencyCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the key is new and the cache is at capacity, the least-recently
    /// accessed entry is evicted before the new entry is inserted. Inserting
    /// over an existing key refreshes its recency and never evicts.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    ///
    /// // New key returns None
    /// assert_eq!(cache.insert(1, "first"), None);
    ///
    /// // Existing key returns previous value
    /// assert_eq!(cache.insert(1, "second"), Some("first"));
    /// ```
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// A hit counts as an access and refreshes recency state. A miss has no
    /// side effect. Use [`contains`](Self::contains) to check existence
    /// without affecting eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "value");
    ///
    /// assert_eq!(cache.get(&1), Some(&"value"));
    /// assert_eq!(cache.get(&99), None);
    /// ```
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks if a key exists without updating access state.
    ///
    /// Unlike [`get`](Self::get), this does not affect eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "value");
    ///
    /// assert!(cache.contains(&1));
    /// assert!(!cache.contains(&99));
    /// ```
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    ///
    /// Always in `[0, capacity]`.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache: BoundedRecencyCache<u64, &str> = BoundedRecencyCache::new(10);
    /// assert!(cache.is_empty());
    ///
    /// cache.insert(1, "value");
    /// assert!(!cache.is_empty());
    /// ```
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum capacity of the cache.
    fn capacity(&self) -> usize;

    /// Removes all entries from the cache. Capacity is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::CoreCache;
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// assert_eq!(cache.len(), 2);
    ///
    /// cache.clear();
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.capacity(), 10);
    /// ```
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use recencykit::policy::recency::BoundedRecencyCache;
/// use recencykit::traits::{CoreCache, MutableCache};
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = BoundedRecencyCache::new(100);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// cache.insert(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    /// `remove(key).is_some()` answers "was the key present". Removal does
    /// not affect the recency of other entries.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, MutableCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "value");
    ///
    /// assert_eq!(cache.remove(&1), Some("value"));
    /// assert_eq!(cache.remove(&1), None);  // Already removed
    /// ```
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    /// The default implementation loops over [`remove`](Self::remove).
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, MutableCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "one");
    /// cache.insert(2, "two");
    /// cache.insert(3, "three");
    ///
    /// let removed = cache.remove_batch(&[1, 99, 3]);
    /// assert_eq!(removed, vec![Some("one"), None, Some("three")]);
    /// assert_eq!(cache.len(), 1);
    /// ```
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|k| self.remove(k)).collect()
    }
}

/// Recency-specific operations over access-stamped entries.
///
/// Entries are ordered by recency of access; the least-recently accessed
/// entry is the eviction victim. Every recorded access (insert, hit,
/// [`touch`](Self::touch)) stamps the entry with a monotonically increasing
/// logical clock value, exposed through [`last_access`](Self::last_access).
///
/// # Example
///
/// ```
/// use recencykit::policy::recency::BoundedRecencyCache;
/// use recencykit::traits::{CoreCache, RecencyCache};
///
/// let mut cache = BoundedRecencyCache::new(3);
/// cache.insert(1, "first");
/// cache.insert(2, "second");
/// cache.insert(3, "third");
///
/// // Access key 1 to make it most recent
/// cache.get(&1);
///
/// // Key 2 is now the eviction victim
/// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(2));
///
/// // Touch without retrieving the value
/// assert!(cache.touch(&2));  // Now key 3 is the victim
///
/// let (key, _) = cache.pop_lru().unwrap();
/// assert_eq!(key, 3);
/// ```
pub trait RecencyCache<K, V>: MutableCache<K, V> {
    /// Removes and returns the least-recently accessed entry.
    ///
    /// Returns `None` if the cache is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, RecencyCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// let (key, _) = cache.pop_lru().unwrap();
    /// assert_eq!(key, 1);  // First inserted, not accessed since
    /// ```
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Peeks at the least-recently accessed entry without removing it.
    ///
    /// Returns `None` if the cache is empty. Does not count as an access.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, RecencyCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// // Peek doesn't affect order
    /// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(1));
    /// assert_eq!(cache.peek_lru().map(|(k, _)| *k), Some(1));
    /// ```
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Marks an entry as recently used without retrieving the value.
    ///
    /// Returns `true` if the key was found and stamped, `false` otherwise.
    /// A miss is a no-op: it never creates an entry and never changes
    /// `len()`. Useful when the caller has already mutated a value through a
    /// reference it holds and only needs to refresh eviction order.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, RecencyCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(3);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    /// cache.insert(3, "third");
    ///
    /// // Touch key 1 to make it most recent
    /// assert!(cache.touch(&1));
    ///
    /// // Now key 2 is the victim
    /// cache.insert(4, "fourth");
    /// assert!(cache.contains(&1));  // Still present (was touched)
    /// assert!(!cache.contains(&2)); // Evicted
    ///
    /// // Touch on an absent key is a no-op
    /// assert!(!cache.touch(&99));
    /// assert_eq!(cache.len(), 3);
    /// ```
    fn touch(&mut self, key: &K) -> bool;

    /// Gets the recency rank of a key (0 = most recent, higher = less recent).
    ///
    /// Returns `None` if the key is not found. O(n) scan.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, RecencyCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    /// cache.insert(3, "third");
    ///
    /// assert_eq!(cache.recency_rank(&3), Some(0));
    /// assert_eq!(cache.recency_rank(&2), Some(1));
    /// assert_eq!(cache.recency_rank(&1), Some(2));  // Oldest
    /// assert_eq!(cache.recency_rank(&99), None);
    /// ```
    fn recency_rank(&self, key: &K) -> Option<usize>;

    /// Gets the access stamp of a key.
    ///
    /// Stamps come from a logical clock that starts at 1 and increases by one
    /// on every recorded access, so a larger stamp always means a more recent
    /// access. Returns `None` if the key is not found.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, RecencyCache};
    ///
    /// let mut cache = BoundedRecencyCache::new(10);
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    ///
    /// let first = cache.last_access(&1).unwrap();
    /// let second = cache.last_access(&2).unwrap();
    /// assert!(second > first);
    ///
    /// cache.get(&1);
    /// assert!(cache.last_access(&1).unwrap() > second);
    /// ```
    fn last_access(&self, key: &K) -> Option<u64>;

    /// Gets the smallest access stamp across all entries.
    ///
    /// This is the stamp of the eviction victim. Returns `None` when the
    /// cache is empty.
    fn oldest_access(&self) -> Option<u64>;

    /// Gets the largest access stamp across all entries.
    ///
    /// Returns `None` when the cache is empty.
    ///
    /// # Example
    ///
    /// ```
    /// use recencykit::policy::recency::BoundedRecencyCache;
    /// use recencykit::traits::{CoreCache, RecencyCache};
    ///
    /// let mut cache: BoundedRecencyCache<u64, &str> = BoundedRecencyCache::new(10);
    /// assert_eq!(cache.oldest_access(), None);
    /// assert_eq!(cache.newest_access(), None);
    ///
    /// cache.insert(1, "first");
    /// cache.insert(2, "second");
    /// assert!(cache.newest_access() > cache.oldest_access());
    /// ```
    fn newest_access(&self) -> Option<u64>;
}

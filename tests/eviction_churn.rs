// ==============================================
// MODEL-EQUIVALENCE CHURN TEST (integration)
// ==============================================
//
// Drives the cache with a long deterministic op stream and checks every
// observable against a naive reference: a Vec of (key, value, stamp)
// triples that evicts by scanning for the minimum stamp. The cache keeps a
// recency list instead of scanning, so agreement here pins the optimization
// to the scan semantics. The structural audit runs throughout.

use recencykit::prelude::*;

/// xorshift64: deterministic op stream without pulling in an RNG crate.
struct Xorshift64(u64);

impl Xorshift64 {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

struct NaiveModel {
    entries: Vec<(u32, u32, u64)>,
    capacity: usize,
    clock: u64,
}

impl NaiveModel {
    fn new(capacity: usize) -> Self {
        NaiveModel {
            entries: Vec::new(),
            capacity,
            clock: 0,
        }
    }

    fn insert(&mut self, key: u32, value: u32) {
        let stamp = self.clock + 1;
        if let Some(entry) = self.entries.iter_mut().find(|(k, _, _)| *k == key) {
            entry.1 = value;
            entry.2 = stamp;
            self.clock = stamp;
            return;
        }
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            let victim = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, (_, _, s))| *s)
                .map(|(idx, _)| idx)
                .expect("model at capacity has entries");
            self.entries.remove(victim);
        }
        self.entries.push((key, value, stamp));
        self.clock = stamp;
    }

    fn get(&mut self, key: u32) -> Option<u32> {
        let stamp = self.clock + 1;
        let hit = self.entries.iter_mut().find(|(k, _, _)| *k == key)?;
        hit.2 = stamp;
        self.clock = stamp;
        Some(hit.1)
    }

    fn touch(&mut self, key: u32) -> bool {
        self.get(key).is_some()
    }

    fn remove(&mut self, key: u32) -> Option<u32> {
        let idx = self.entries.iter().position(|(k, _, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    fn contains(&self, key: u32) -> bool {
        self.entries.iter().any(|(k, _, _)| *k == key)
    }

    fn sorted_keys(&self) -> Vec<u32> {
        let mut keys: Vec<u32> = self.entries.iter().map(|(k, _, _)| *k).collect();
        keys.sort_unstable();
        keys
    }
}

fn run_churn(capacity: usize, key_space: u32, steps: usize, seed: u64) {
    let mut cache: BoundedRecencyCache<u32, u32> = BoundedRecencyCache::new(capacity);
    let mut model = NaiveModel::new(capacity);
    let mut rng = Xorshift64(seed);

    for step in 0..steps {
        let roll = rng.next();
        let key = (roll >> 8) as u32 % key_space;
        let value = (roll >> 40) as u32;

        match roll % 10 {
            // Insert-heavy mix keeps the cache at capacity and churning.
            0..=4 => {
                cache.insert(key, value);
                model.insert(key, value);
            },
            5 | 6 => {
                assert_eq!(
                    cache.get(&key).copied(),
                    model.get(key),
                    "get({key}) diverged at step {step}"
                );
            },
            7 => {
                assert_eq!(
                    cache.touch(&key),
                    model.touch(key),
                    "touch({key}) diverged at step {step}"
                );
            },
            8 => {
                assert_eq!(
                    cache.remove(&key),
                    model.remove(key),
                    "remove({key}) diverged at step {step}"
                );
            },
            _ => {
                assert_eq!(
                    cache.contains(&key),
                    model.contains(key),
                    "contains({key}) diverged at step {step}"
                );
            },
        }

        assert_eq!(cache.len(), model.entries.len(), "len diverged at step {step}");
        assert!(
            cache.len() <= capacity,
            "capacity bound violated at step {step}"
        );

        if step % 64 == 0 {
            let mut keys: Vec<u32> = cache.keys().copied().collect();
            keys.sort_unstable();
            assert_eq!(keys, model.sorted_keys(), "key sets diverged at step {step}");
            cache
                .check_invariants()
                .unwrap_or_else(|err| panic!("structural audit failed at step {step}: {err}"));
        }
    }

    cache.check_invariants().expect("final structural audit");
}

#[test]
fn churn_small_cache_tight_keyspace() {
    run_churn(4, 8, 4_000, 0x9E37_79B9_7F4A_7C15);
}

#[test]
fn churn_medium_cache_wide_keyspace() {
    run_churn(32, 128, 8_000, 0xDEAD_BEEF_CAFE_F00D);
}

#[test]
fn churn_capacity_one() {
    run_churn(1, 4, 2_000, 42);
}

#[test]
fn churn_capacity_zero_stays_empty() {
    let mut cache: BoundedRecencyCache<u32, u32> = BoundedRecencyCache::new(0);
    let mut rng = Xorshift64(7);
    for _ in 0..500 {
        let roll = rng.next();
        cache.insert(roll as u32 % 16, roll as u32);
        assert_eq!(cache.len(), 0);
    }
    cache.check_invariants().expect("audit of empty cache");
}

#![no_main]

use libfuzzer_sys::fuzz_target;
use recencykit::prelude::*;

// Fuzz arbitrary op sequences against a naive minimum-stamp-scan model.
//
// Each input byte pair encodes (op selector, key). The model keeps
// (key, value, stamp) triples in a Vec and evicts by scanning for the
// minimum stamp; the cache must agree on every observable after every op.

struct NaiveModel {
    entries: Vec<(u8, u16, u64)>,
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

    fn insert(&mut self, key: u8, value: u16) {
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

    fn get(&mut self, key: u8) -> Option<u16> {
        let stamp = self.clock + 1;
        let hit = self.entries.iter_mut().find(|(k, _, _)| *k == key)?;
        hit.2 = stamp;
        self.clock = stamp;
        Some(hit.1)
    }

    fn remove(&mut self, key: u8) -> Option<u16> {
        let idx = self.entries.iter().position(|(k, _, _)| *k == key)?;
        Some(self.entries.remove(idx).1)
    }

    fn contains(&self, key: u8) -> bool {
        self.entries.iter().any(|(k, _, _)| *k == key)
    }

    fn sorted_keys(&self) -> Vec<u8> {
        let mut keys: Vec<u8> = self.entries.iter().map(|(k, _, _)| *k).collect();
        keys.sort_unstable();
        keys
    }
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let capacity = (data[0] % 9) as usize;
    let mut cache: BoundedRecencyCache<u8, u16> = BoundedRecencyCache::new(capacity);
    let mut model = NaiveModel::new(capacity);

    for pair in data[1..].chunks_exact(2) {
        let op = pair[0] % 7;
        let key = pair[1] % 16;
        let value = u16::from(pair[0]) << 8 | u16::from(pair[1]);

        match op {
            0 | 1 => {
                cache.insert(key, value);
                model.insert(key, value);
            },
            2 => {
                assert_eq!(cache.get(&key).copied(), model.get(key));
            },
            3 => {
                assert_eq!(cache.touch(&key), model.get(key).is_some());
            },
            4 => {
                assert_eq!(cache.remove(&key), model.remove(key));
            },
            5 => {
                assert_eq!(cache.contains(&key), model.contains(key));
            },
            _ => {
                let peeked = cache.peek(&key).copied();
                let expected = model
                    .entries
                    .iter()
                    .find(|(k, _, _)| *k == key)
                    .map(|(_, v, _)| *v);
                assert_eq!(peeked, expected);
            },
        }

        assert_eq!(cache.len(), model.entries.len());
        assert!(cache.len() <= capacity);

        let mut keys: Vec<u8> = cache.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, model.sorted_keys());

        cache.check_invariants().expect("structural audit");
    }
});

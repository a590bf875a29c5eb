#![no_main]

use libfuzzer_sys::fuzz_target;
use recencykit::prelude::*;

// Fuzz property-based tests for BoundedRecencyCache
//
// Tests specific invariants and properties:
// - Capacity bound under insert floods
// - Eviction victim carries the minimum stamp
// - Hits and overwrites never change the entry count
// - Touch on absent keys is a no-op
// - Clear resets to a usable empty cache
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let test_type = data[0] % 5;

    match test_type {
        0 => test_capacity_bound(&data[1..]),
        1 => test_eviction_victim_minimum_stamp(&data[1..]),
        2 => test_hits_preserve_len(&data[1..]),
        3 => test_touch_absent_noop(&data[1..]),
        4 => test_clear_resets(&data[1..]),
        _ => unreachable!(),
    }
});

// Property: len() never exceeds capacity under arbitrary insert floods
fn test_capacity_bound(data: &[u8]) {
    let capacity = (data[0] % 8 + 1) as usize;
    let mut cache: BoundedRecencyCache<u8, u8> = BoundedRecencyCache::new(capacity);

    for &byte in &data[1..] {
        cache.insert(byte, byte);
        assert!(cache.len() <= capacity);
    }
    cache.check_invariants().expect("structural audit");
}

// Property: inserting a new key at capacity evicts exactly the entry with
// the smallest access stamp
fn test_eviction_victim_minimum_stamp(data: &[u8]) {
    let capacity = (data[0] % 8 + 1) as usize;
    let mut cache: BoundedRecencyCache<u16, u8> = BoundedRecencyCache::new(capacity);

    for key in 0..capacity as u16 {
        cache.insert(key, 0);
    }
    // Arbitrary accesses reshuffle the recency order.
    for &byte in &data[1..] {
        cache.get(&u16::from(byte % 16));
    }
    assert_eq!(cache.len(), capacity);

    let victim_stamp = cache.oldest_access().expect("cache is full");
    let victim_key = *cache.peek_lru().expect("cache is full").0;

    cache.insert(1_000, 0); // outside the accessed key range

    assert_eq!(cache.len(), capacity);
    assert!(!cache.contains(&victim_key));
    for key in cache.stats().keys {
        assert!(cache.last_access(&key).expect("listed key is present") > victim_stamp);
    }
}

// Property: get hits and overwrites never change len()
fn test_hits_preserve_len(data: &[u8]) {
    let capacity = (data[0] % 8 + 1) as usize;
    let mut cache: BoundedRecencyCache<u8, u8> = BoundedRecencyCache::new(capacity);

    for key in 0..capacity as u8 {
        cache.insert(key, key);
    }
    let len = cache.len();

    for &byte in &data[1..] {
        let key = byte % capacity as u8;
        if byte % 2 == 0 {
            cache.get(&key);
        } else {
            cache.insert(key, byte);
        }
        assert_eq!(cache.len(), len);
    }
}

// Property: touch on an absent key never creates an entry or moves the clock
fn test_touch_absent_noop(data: &[u8]) {
    let mut cache: BoundedRecencyCache<u16, u8> = BoundedRecencyCache::new(4);
    cache.insert(0, 0);
    let newest = cache.newest_access();

    for &byte in data {
        let absent = 100 + u16::from(byte);
        assert!(!cache.touch(&absent));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.newest_access(), newest);
    }
}

// Property: clear leaves an empty, fully usable cache
fn test_clear_resets(data: &[u8]) {
    let capacity = (data[0] % 8 + 1) as usize;
    let mut cache: BoundedRecencyCache<u8, u8> = BoundedRecencyCache::new(capacity);

    for &byte in &data[1..] {
        cache.insert(byte, byte);
    }
    cache.clear();
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.stats().oldest_access, None);

    for &byte in &data[1..] {
        cache.insert(byte, byte);
        assert!(cache.len() <= capacity);
    }
    cache.check_invariants().expect("structural audit");
}

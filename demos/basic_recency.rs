use recencykit::policy::recency::BoundedRecencyCache;
use recencykit::traits::CoreCache;

fn main() {
    let mut cache: BoundedRecencyCache<u32, String> = BoundedRecencyCache::new(2);

    cache.insert(1, "alpha".to_string());
    cache.insert(2, "beta".to_string());

    if let Some(value) = cache.get(&1) {
        println!("hit 1: {}", value.as_str());
    }

    cache.insert(3, "gamma".to_string());

    println!("contains 2? {}", cache.contains(&2));

    let stats = cache.stats();
    println!("len={} capacity={}", stats.len, stats.capacity);
}

// Expected output:
// hit 1: alpha
// contains 2? false
// len=2 capacity=2
//
// Explanation: capacity=2; after get(&1), key 1 carries the newest access
// stamp and key 2 the oldest. Inserting key 3 evicts key 2.

//! Basic usage examples for recycle_pool

use recycle_pool::{ListPool, Pool, PoolConfiguration, PoolRegistry};
use std::sync::Arc;

fn main() {
    println!("=== recycle_pool - Basic Examples ===\n");

    // Example 1: Simple pool of strings
    simple_pool();

    // Example 2: Scoped leases
    scoped_leases();

    // Example 3: Shared collection pools
    shared_pools();

    // Example 4: Double-release detection
    double_release();

    // Example 5: Metrics
    metrics();
}

fn simple_pool() {
    println!("1. Simple Pool:");
    let pool = Pool::new(PoolConfiguration::<String>::new().with_on_release(|s| s.clear()));

    let mut label = pool.get();
    label.push_str("Health: 100");
    println!("   Got object: {}", label);
    pool.release(label);

    println!("   Inactive after release: {}\n", pool.inactive_count());
}

fn scoped_leases() {
    println!("2. Scoped Leases:");
    let lists = ListPool::<(i32, i32)>::new();

    {
        let mut path = lists.get_pooled();
        path.extend([(0, 0), (0, 1), (1, 1)]);
        println!("   Path: {:?}", *path);
        println!("   Active objects: {}", lists.pool().active_count());
        // List cleared and returned when dropped
    }

    println!("   After scope - Inactive: {}\n", lists.pool().inactive_count());
}

fn shared_pools() {
    println!("3. Shared Collection Pools:");
    let registry = PoolRegistry::new();

    let spawner = registry.queue_pool::<u32>();
    let mut wave = spawner.get();
    wave.extend([1, 2, 3]);
    spawner.release(wave);

    let reused = registry.queue_pool::<u32>().get();
    println!("   Reused queue is empty: {}", reused.is_empty());
    println!("   Pools in registry: {}\n", registry.len());
}

fn double_release() {
    println!("4. Double-release Detection:");
    let pool: Pool<Arc<Vec<u8>>> = Pool::new(
        PoolConfiguration::<Arc<Vec<u8>>>::new()
            .with_name("textures")
            .with_collection_check(|a, b| Arc::ptr_eq(a, b)),
    );

    let texture = pool.get();
    let stale = Arc::clone(&texture);
    pool.release(texture);

    match pool.try_release(stale) {
        Ok(()) => println!("   Released twice unnoticed"),
        Err(e) => println!("   Rejected: {}", e),
    }
    println!();
}

fn metrics() {
    println!("5. Metrics:");
    let pool: Pool<Vec<f32>> = Pool::new(PoolConfiguration::new().with_warmup(2));

    {
        let _a = pool.get_pooled();
        let _b = pool.get_pooled();
        let _c = pool.get_pooled();
    }

    let mut metrics: Vec<_> = pool.export_metrics().into_iter().collect();
    metrics.sort();
    for (key, value) in metrics {
        println!("     {}: {}", key, value);
    }
}

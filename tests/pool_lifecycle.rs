use recycle_pool::{ListPool, Pool, PoolConfiguration, PoolError, PoolRegistry};
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn test_list_roundtrip_returns_same_empty_buffer() {
    let pool = Pool::new(PoolConfiguration::<Vec<i32>>::new().with_on_release(|v| v.clear()));

    let mut list = pool.get();
    list.extend([1, 2, 3]);
    let buffer = list.as_ptr();
    pool.release(list);

    let list = pool.get();
    assert!(list.is_empty());
    assert_eq!(list.as_ptr(), buffer);
    assert_eq!(pool.total_created(), 1);
}

#[test]
fn test_counts_balance_over_mixed_usage() {
    let lists = ListPool::<u8>::new();
    let pool = lists.pool();
    let mut held = Vec::new();

    for round in 0..20 {
        if round % 3 == 2 {
            if let Some(list) = held.pop() {
                lists.release(list);
            }
        } else {
            held.push(lists.get());
        }
        assert_eq!(pool.active_count() + pool.inactive_count(), pool.total_created());
        assert_eq!(pool.active_count(), held.len());
    }
}

#[test]
fn test_scoped_leases_return_in_lifo_order() {
    let pool: Pool<Arc<u32>> = Pool::with_factory(
        {
            let next = std::sync::atomic::AtomicU32::new(0);
            move || Arc::new(next.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
        },
        PoolConfiguration::<Arc<u32>>::new().with_collection_check(|a, b| Arc::ptr_eq(a, b)),
    );

    {
        let first = pool.get_pooled();
        let second = pool.get_pooled();
        assert_eq!((**first, **second), (0, 1));
        // `second` drops first, so `first` is on top of the free list
    }

    assert_eq!(*pool.get(), 0);
    assert_eq!(*pool.get(), 1);
}

#[test]
fn test_double_release_reported_with_pool_name() {
    let pool: Pool<Arc<String>> = Pool::new(
        PoolConfiguration::<Arc<String>>::new()
            .with_name("dialogue")
            .with_collection_check(|a, b| Arc::ptr_eq(a, b)),
    );

    let line = pool.get();
    let copy = Arc::clone(&line);
    pool.release(line);

    let err = pool.try_release(copy).unwrap_err();
    assert_eq!(
        err,
        PoolError::DoubleRelease {
            pool: "dialogue".to_string()
        }
    );
    assert!(err.to_string().contains("dialogue"));
    assert_eq!(pool.inactive_count(), 1);
}

#[test]
fn test_registry_facades_hand_out_empty_collections() {
    let registry = PoolRegistry::new();

    let maps = registry.dictionary_pool::<String, u32>();
    let mut inventory = maps.get();
    inventory.insert("potion".to_string(), 3);
    maps.release(inventory);

    let sets = registry.hash_set_pool::<u32>();
    let mut seen = sets.get();
    seen.insert(1);
    sets.release(seen);

    let queues = registry.queue_pool::<u32>();
    let mut orders = queues.get();
    orders.push_back(5);
    queues.release(orders);

    assert!(registry.dictionary_pool::<String, u32>().get().is_empty());
    assert!(registry.hash_set_pool::<u32>().get().is_empty());
    assert!(registry.queue_pool::<u32>().get().is_empty());
}

#[test]
fn test_prometheus_export_reports_pool_state() {
    let pool: Pool<Vec<u8>> = Pool::new(PoolConfiguration::new().with_warmup(2));
    let _held = pool.get();

    let mut tags = HashMap::new();
    tags.insert("scene".to_string(), "forest".to_string());
    let output = pool.export_metrics_prometheus("buffers", Some(&tags));

    assert!(output.contains("objectpool_objects_created_total{pool=\"buffers\",scene=\"forest\"} 2"));
    assert!(output.contains("objectpool_objects_active{pool=\"buffers\",scene=\"forest\"} 1"));
    assert!(output.contains("objectpool_objects_inactive{pool=\"buffers\",scene=\"forest\"} 1"));
}

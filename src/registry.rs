//! Shared collection pools, one per container type

use crate::collections::{DictionaryPool, HashSetPool, ListPool, QueuePool};

use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::hash::Hash;
use std::sync::Arc;
use tracing::debug;

/// Owner of the shared collection pools of an application
///
/// Build one registry at startup and pass it to the code that needs pooled
/// collections. Each container type gets exactly one pool, created on first
/// request and shared by every later caller.
///
/// # Examples
///
/// ```
/// use recycle_pool::PoolRegistry;
/// use std::sync::Arc;
///
/// let registry = PoolRegistry::new();
///
/// let a = registry.list_pool::<u32>();
/// let b = registry.list_pool::<u32>();
/// assert!(Arc::ptr_eq(&a, &b));
///
/// let mut ids = a.get();
/// ids.push(1);
/// b.release(ids);
/// assert!(a.get().is_empty());
/// ```
#[derive(Default)]
pub struct PoolRegistry {
    pools: DashMap<TypeId, Arc<dyn Any + Send + Sync>>,
}

impl PoolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared pool of `HashMap<K, V>`
    pub fn dictionary_pool<K, V>(&self) -> Arc<DictionaryPool<K, V>>
    where
        K: Send + 'static,
        V: Send + 'static,
    {
        self.shared(DictionaryPool::new)
    }

    /// Shared pool of `Vec<T>`
    pub fn list_pool<T: Send + 'static>(&self) -> Arc<ListPool<T>> {
        self.shared(ListPool::new)
    }

    /// Shared pool of `HashSet<T>`
    pub fn hash_set_pool<T: Eq + Hash + Send + 'static>(&self) -> Arc<HashSetPool<T>> {
        self.shared(HashSetPool::new)
    }

    /// Shared pool of `VecDeque<T>`
    pub fn queue_pool<T: Send + 'static>(&self) -> Arc<QueuePool<T>> {
        self.shared(QueuePool::new)
    }

    /// Number of pools created so far
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    fn shared<P>(&self, create: fn() -> P) -> Arc<P>
    where
        P: Send + Sync + 'static,
    {
        let entry = self
            .pools
            .entry(TypeId::of::<P>())
            .or_insert_with(|| {
                debug!(pool = std::any::type_name::<P>(), "Creating shared pool");
                let pool: Arc<dyn Any + Send + Sync> = Arc::new(create());
                pool
            })
            .value()
            .clone();

        // Entries are keyed by the TypeId of the pool they hold.
        entry
            .downcast::<P>()
            .unwrap_or_else(|_| unreachable!("registry entry does not match its TypeId"))
    }
}

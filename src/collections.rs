//! Pools of recycled standard collections
//!
//! Each pool clears a container when it is released, so every container
//! handed out by `get` is empty. Capacity is kept across reuse.

use crate::config::PoolConfiguration;
use crate::pool::{Pool, PooledObject};

use std::any::type_name;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

fn clearing_config<C>(kind: &str, params: &str, clear: fn(&mut C)) -> PoolConfiguration<C> {
    PoolConfiguration::new()
        .with_name(format!("{kind}<{params}>"))
        .with_on_release(clear)
}

/// Pool of `HashMap`s
///
/// # Examples
///
/// ```
/// use recycle_pool::DictionaryPool;
///
/// let maps = DictionaryPool::<&str, u32>::new();
///
/// {
///     let mut scores = maps.get_pooled();
///     scores.insert("orc", 3);
/// }
///
/// assert!(maps.get().is_empty());
/// ```
pub struct DictionaryPool<K, V> {
    pool: Pool<HashMap<K, V>>,
}

impl<K: 'static, V: 'static> DictionaryPool<K, V> {
    pub fn new() -> Self {
        let params = format!("{}, {}", type_name::<K>(), type_name::<V>());
        Self {
            pool: Pool::new(clearing_config("DictionaryPool", &params, |map: &mut HashMap<K, V>| map.clear())),
        }
    }

    /// Get an empty map
    pub fn get(&self) -> HashMap<K, V> {
        self.pool.get()
    }

    /// Get an empty map that returns to the pool on drop
    pub fn get_pooled(&self) -> PooledObject<'_, HashMap<K, V>> {
        self.pool.get_pooled()
    }

    /// Clear the map and return it to the pool
    pub fn release(&self, map: HashMap<K, V>) {
        self.pool.release(map);
    }

    pub fn pool(&self) -> &Pool<HashMap<K, V>> {
        &self.pool
    }
}

impl<K: 'static, V: 'static> Default for DictionaryPool<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool of `Vec`s
///
/// # Examples
///
/// ```
/// use recycle_pool::ListPool;
///
/// let lists = ListPool::<u32>::new();
///
/// let mut path = lists.get();
/// path.extend([4, 8, 15]);
/// lists.release(path);
///
/// let path = lists.get();
/// assert!(path.is_empty());
/// assert!(path.capacity() >= 3);
/// ```
pub struct ListPool<T> {
    pool: Pool<Vec<T>>,
}

impl<T: 'static> ListPool<T> {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(clearing_config("ListPool", type_name::<T>(), |list: &mut Vec<T>| list.clear())),
        }
    }

    /// Get an empty list
    pub fn get(&self) -> Vec<T> {
        self.pool.get()
    }

    /// Get an empty list that returns to the pool on drop
    pub fn get_pooled(&self) -> PooledObject<'_, Vec<T>> {
        self.pool.get_pooled()
    }

    /// Clear the list and return it to the pool
    pub fn release(&self, list: Vec<T>) {
        self.pool.release(list);
    }

    pub fn pool(&self) -> &Pool<Vec<T>> {
        &self.pool
    }
}

impl<T: 'static> Default for ListPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool of `HashSet`s
pub struct HashSetPool<T> {
    pool: Pool<HashSet<T>>,
}

impl<T: Eq + Hash + 'static> HashSetPool<T> {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(clearing_config("HashSetPool", type_name::<T>(), |set: &mut HashSet<T>| set.clear())),
        }
    }

    /// Get an empty set
    pub fn get(&self) -> HashSet<T> {
        self.pool.get()
    }

    /// Get an empty set that returns to the pool on drop
    pub fn get_pooled(&self) -> PooledObject<'_, HashSet<T>> {
        self.pool.get_pooled()
    }

    /// Clear the set and return it to the pool
    pub fn release(&self, set: HashSet<T>) {
        self.pool.release(set);
    }

    pub fn pool(&self) -> &Pool<HashSet<T>> {
        &self.pool
    }
}

impl<T: Eq + Hash + 'static> Default for HashSetPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Pool of `VecDeque`s
pub struct QueuePool<T> {
    pool: Pool<VecDeque<T>>,
}

impl<T: 'static> QueuePool<T> {
    pub fn new() -> Self {
        Self {
            pool: Pool::new(clearing_config("QueuePool", type_name::<T>(), |queue: &mut VecDeque<T>| queue.clear())),
        }
    }

    /// Get an empty queue
    pub fn get(&self) -> VecDeque<T> {
        self.pool.get()
    }

    /// Get an empty queue that returns to the pool on drop
    pub fn get_pooled(&self) -> PooledObject<'_, VecDeque<T>> {
        self.pool.get_pooled()
    }

    /// Clear the queue and return it to the pool
    pub fn release(&self, queue: VecDeque<T>) {
        self.pool.release(queue);
    }

    pub fn pool(&self) -> &Pool<VecDeque<T>> {
        &self.pool
    }
}

impl<T: 'static> Default for QueuePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_pool_recycles_cleared_buffer() {
        let lists = ListPool::<i32>::new();

        let mut list = lists.get();
        list.extend([1, 2, 3]);
        let buffer = list.as_ptr();
        lists.release(list);

        let list = lists.get();
        assert!(list.is_empty());
        assert_eq!(list.as_ptr(), buffer);
        assert_eq!(lists.pool().total_created(), 1);
    }

    #[test]
    fn test_dictionary_pool_clears_on_release() {
        let maps = DictionaryPool::<u32, String>::new();

        let mut map = maps.get();
        map.insert(1, "sword".to_string());
        map.insert(2, "shield".to_string());
        maps.release(map);

        let map = maps.get();
        assert!(map.is_empty());
        assert!(map.capacity() >= 2);
    }

    #[test]
    fn test_hash_set_pool_clears_on_release() {
        let sets = HashSetPool::<&'static str>::new();

        {
            let mut visited = sets.get_pooled();
            visited.insert("a1");
            visited.insert("b2");
        }

        assert_eq!(sets.pool().inactive_count(), 1);
        assert!(sets.get().is_empty());
    }

    #[test]
    fn test_queue_pool_clears_on_release() {
        let queues = QueuePool::<u8>::default();

        let mut queue = queues.get();
        queue.push_back(1);
        queue.push_front(0);
        queues.release(queue);

        let queue = queues.get();
        assert!(queue.is_empty());
        assert_eq!(queues.pool().get_metrics().reused, 1);
    }

    #[test]
    fn test_pools_are_named_after_their_types() {
        assert_eq!(ListPool::<u8>::new().pool().name(), "ListPool<u8>");
        assert_eq!(DictionaryPool::<u8, u16>::new().pool().name(), "DictionaryPool<u8, u16>");
        assert_eq!(HashSetPool::<u8>::new().pool().name(), "HashSetPool<u8>");
        assert_eq!(QueuePool::<u8>::new().pool().name(), "QueuePool<u8>");
    }
}

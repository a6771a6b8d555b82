//! Core object pool implementation

use crate::config::PoolConfiguration;
use crate::errors::{PoolError, PoolResult};
use crate::metrics::{MetricsExporter, MetricsTracker, PoolMetrics};

use parking_lot::Mutex;
use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::Ordering;
use tracing::{error, trace};

/// A pooled object that returns to its pool when dropped
pub struct PooledObject<'a, T> {
    value: Option<T>,
    pool: &'a Pool<T>,
}

impl<'a, T> PooledObject<'a, T> {
    fn new(value: T, pool: &'a Pool<T>) -> Self {
        Self {
            value: Some(value),
            pool,
        }
    }

    /// Return the object to the pool now instead of at end of scope
    pub fn release(mut self) {
        self.return_to_pool();
    }

    /// Take the object out of the pool's care; it stays counted as active
    pub fn detach(mut self) -> T {
        self.value.take().expect("Value already taken")
    }

    fn return_to_pool(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.release(value);
        }
    }
}

impl<T> Deref for PooledObject<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value.as_ref().expect("Value already taken")
    }
}

impl<T> DerefMut for PooledObject<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value.as_mut().expect("Value already taken")
    }
}

impl<T> Drop for PooledObject<'_, T> {
    fn drop(&mut self) {
        self.return_to_pool();
    }
}

/// Free-list object pool that builds instances on demand
///
/// Released instances are reused last-in first-out.
///
/// # Examples
///
/// ```
/// use recycle_pool::{Pool, PoolConfiguration};
///
/// let pool = Pool::new(PoolConfiguration::<String>::new().with_on_release(|s| s.clear()));
///
/// let mut name = pool.get();
/// name.push_str("goblin");
/// pool.release(name);
///
/// {
///     let name = pool.get_pooled();
///     assert!(name.is_empty());
/// }
///
/// assert_eq!(pool.total_created(), 1);
/// assert_eq!(pool.inactive_count(), 1);
/// ```
pub struct Pool<T> {
    free: Mutex<Vec<T>>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
    config: PoolConfiguration<T>,
    name: String,
    metrics: MetricsTracker,
}

impl<T: Default + 'static> Pool<T> {
    /// Create a pool that builds instances with `T::default`
    ///
    /// Double releases are only detected once an identity comparison is set
    /// with [`PoolConfiguration::with_collection_check`]; the default
    /// configuration has none, so a shared handle released twice is stored twice.
    pub fn new(config: PoolConfiguration<T>) -> Self {
        Self::with_factory(T::default, config)
    }
}

impl<T: 'static> Pool<T> {
    /// Create a pool that builds instances with `factory`
    pub fn with_factory<F>(factory: F, config: PoolConfiguration<T>) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        let name = config
            .name
            .clone()
            .unwrap_or_else(|| std::any::type_name::<T>().to_string());

        let pool = Self {
            free: Mutex::new(Vec::with_capacity(config.initial_capacity)),
            factory: Box::new(factory),
            config,
            name,
            metrics: MetricsTracker::new(),
        };

        if let Some(count) = pool.config.warmup_size {
            pool.warmup(count);
        }

        pool
    }
}

impl<T> Pool<T> {
    /// Get an object, reusing the most recently released one if any
    pub fn get(&self) -> T {
        let recycled = self.free.lock().pop();

        let mut item = match recycled {
            Some(item) => {
                self.metrics.reused.fetch_add(1, Ordering::Relaxed);
                item
            }
            None => self.create(),
        };

        self.metrics.total_acquired.fetch_add(1, Ordering::Relaxed);

        if let Some(on_acquire) = self.config.on_acquire {
            on_acquire(&mut item);
        }

        item
    }

    /// Get an object wrapped in a guard that releases it on drop
    pub fn get_pooled(&self) -> PooledObject<'_, T> {
        PooledObject::new(self.get(), self)
    }

    /// Return an object to the pool, reporting a double release
    pub fn try_release(&self, mut item: T) -> PoolResult<()> {
        if let Some(on_release) = self.config.on_release {
            on_release(&mut item);
        }

        let mut free = self.free.lock();

        if let Some(same_instance) = self.config.checks_releases()
            && free.iter().any(|free| same_instance(free, &item))
        {
            drop(free);
            self.metrics.double_release_events.fetch_add(1, Ordering::Relaxed);
            error!(
                pool = %self.name,
                "Internal error: object released to the pool is already in its free list"
            );
            return Err(PoolError::DoubleRelease {
                pool: self.name.clone(),
            });
        }

        free.push(item);
        drop(free);
        self.metrics.total_released.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    /// Return an object to the pool
    ///
    /// A rejected double release has already been logged and is dropped here.
    pub fn release(&self, item: T) {
        let _ = self.try_release(item);
    }

    /// Pre-build `count` instances into the free list
    ///
    /// Each instance goes through the release hook before it is stored, and
    /// is counted only once it is in the free list.
    pub fn warmup(&self, count: usize) {
        for _ in 0..count {
            let mut item = (self.factory)();
            if let Some(on_release) = self.config.on_release {
                on_release(&mut item);
            }
            self.free.lock().push(item);
            self.metrics.total_created.fetch_add(1, Ordering::Relaxed);
        }
        trace!(pool = %self.name, count, "Warmed up pool");
    }

    /// Diagnostic name of the pool
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of instances ever constructed
    pub fn total_created(&self) -> usize {
        self.metrics.created()
    }

    /// Number of instances currently handed out
    pub fn active_count(&self) -> usize {
        self.total_created().saturating_sub(self.inactive_count())
    }

    /// Number of instances waiting in the free list
    pub fn inactive_count(&self) -> usize {
        self.free.lock().len()
    }

    /// Get pool metrics
    pub fn get_metrics(&self) -> PoolMetrics {
        self.metrics.get_metrics(self.inactive_count())
    }

    /// Export metrics
    pub fn export_metrics(&self) -> HashMap<String, String> {
        self.get_metrics().export()
    }

    /// Export metrics in Prometheus format
    pub fn export_metrics_prometheus(
        &self,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        MetricsExporter::export_prometheus(&self.get_metrics(), pool_name, tags)
    }

    fn create(&self) -> T {
        let item = (self.factory)();
        let created = self.metrics.total_created.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(pool = %self.name, created, "Constructed new pooled instance");
        item
    }
}

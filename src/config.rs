//! Pool configuration options

/// Configuration for object pool behavior
///
/// # Examples
///
/// ```
/// use recycle_pool::PoolConfiguration;
///
/// let config = PoolConfiguration::<Vec<u8>>::new()
///     .with_name("scratch")
///     .with_on_release(|v| v.clear())
///     .with_initial_capacity(32)
///     .with_warmup(4);
///
/// assert_eq!(config.name.as_deref(), Some("scratch"));
/// assert_eq!(config.warmup_size, Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfiguration<T> {
    /// Label used in logs, errors and metrics; defaults to the type name
    pub name: Option<String>,

    /// Invoked on an instance right before it is handed to a caller
    pub on_acquire: Option<fn(&mut T)>,

    /// Invoked on an instance right before it re-enters the free list
    pub on_release: Option<fn(&mut T)>,

    /// Whether releases are checked against the free list for duplicates
    ///
    /// Defaults to on in debug builds, but has no effect until
    /// `same_instance` is set as well.
    pub collection_check: bool,

    /// Identity comparison used by the duplicate check
    pub same_instance: Option<fn(&T, &T) -> bool>,

    /// Capacity reserved up front for the free list
    pub initial_capacity: usize,

    /// Number of instances to pre-build on creation
    pub warmup_size: Option<usize>,
}

impl<T> Default for PoolConfiguration<T> {
    fn default() -> Self {
        Self {
            name: None,
            on_acquire: None,
            on_release: None,
            collection_check: cfg!(debug_assertions),
            same_instance: None,
            initial_capacity: 0,
            warmup_size: None,
        }
    }
}

impl<T> PoolConfiguration<T> {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the diagnostic name of the pool
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the hook run on every acquire
    pub fn with_on_acquire(mut self, hook: fn(&mut T)) -> Self {
        self.on_acquire = Some(hook);
        self
    }

    /// Set the hook run on every release
    pub fn with_on_release(mut self, hook: fn(&mut T)) -> Self {
        self.on_release = Some(hook);
        self
    }

    /// Enable the double-release check with the given identity comparison
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::PoolConfiguration;
    /// use std::sync::Arc;
    ///
    /// let config = PoolConfiguration::<Arc<String>>::new()
    ///     .with_collection_check(|a, b| Arc::ptr_eq(a, b));
    ///
    /// assert!(config.collection_check);
    /// assert!(config.same_instance.is_some());
    /// ```
    pub fn with_collection_check(mut self, same_instance: fn(&T, &T) -> bool) -> Self {
        self.collection_check = true;
        self.same_instance = Some(same_instance);
        self
    }

    /// Turn the double-release scan off, keeping the release path free of it
    pub fn without_collection_check(mut self) -> Self {
        self.collection_check = false;
        self
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set warm-up size
    pub fn with_warmup(mut self, size: usize) -> Self {
        self.warmup_size = Some(size);
        self
    }

    pub(crate) fn checks_releases(&self) -> Option<fn(&T, &T) -> bool> {
        if self.collection_check {
            self.same_instance
        } else {
            None
        }
    }
}

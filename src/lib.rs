//! # recycle_pool
//!
//! Free-list object pool for Rust with scoped leases and ready-made pools
//! for the standard collections.
//!
//! ## Features
//!
//! - Generic pool for any `Default` type, or any type with a factory
//! - Last-in first-out reuse of released instances
//! - Automatic return of objects via RAII (Drop trait)
//! - Acquire and release hooks
//! - Collection pools that hand out cleared `HashMap`, `Vec`, `HashSet` and `VecDeque`
//! - Registry holding one shared pool per container type
//! - Double-release detection in debug builds
//! - Metrics with Prometheus export
//! - Pool warm-up/pre-population
//!
//! ## Quick Start
//!
//! ```rust
//! use recycle_pool::PoolRegistry;
//!
//! let registry = PoolRegistry::new();
//! let lists = registry.list_pool::<u32>();
//! {
//!     let mut targets = lists.get_pooled();
//!     targets.push(7);
//!     // List cleared and returned when `targets` goes out of scope
//! }
//! assert_eq!(lists.pool().inactive_count(), 1);
//! ```

mod pool;
mod collections;
mod config;
mod metrics;
mod registry;
mod errors;

pub use pool::{Pool, PooledObject};
pub use collections::{DictionaryPool, HashSetPool, ListPool, QueuePool};
pub use config::PoolConfiguration;
pub use metrics::{PoolMetrics, MetricsExporter};
pub use registry::PoolRegistry;
pub use errors::{PoolError, PoolResult};

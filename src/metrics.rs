//! Metrics collection and export for object pools

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Metrics data for a pool
///
/// # Examples
///
/// ```
/// use recycle_pool::{Pool, PoolConfiguration};
///
/// let pool: Pool<Vec<u8>> = Pool::new(PoolConfiguration::default());
///
/// let buf = pool.get();
/// let metrics = pool.get_metrics();
/// assert_eq!(metrics.total_created, 1);
/// assert_eq!(metrics.active_objects, 1);
/// pool.release(buf);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PoolMetrics {
    /// Instances ever constructed by the pool
    pub total_created: usize,

    /// Total acquisitions, fresh or recycled
    pub total_acquired: usize,

    /// Total instances accepted back into the free list
    pub total_released: usize,

    /// Acquisitions served from the free list
    pub reused: usize,

    /// Instances currently handed out
    pub active_objects: usize,

    /// Instances waiting in the free list
    pub inactive_objects: usize,

    /// Releases rejected because the instance was already free
    pub double_release_events: usize,

    /// Share of acquisitions served from the free list (0.0 to 1.0)
    pub reuse_ratio: f64,
}

impl PoolMetrics {
    /// Export metrics as a HashMap
    pub fn export(&self) -> HashMap<String, String> {
        let mut metrics = HashMap::new();
        metrics.insert("total_created".to_string(), self.total_created.to_string());
        metrics.insert("total_acquired".to_string(), self.total_acquired.to_string());
        metrics.insert("total_released".to_string(), self.total_released.to_string());
        metrics.insert("reused".to_string(), self.reused.to_string());
        metrics.insert("active_objects".to_string(), self.active_objects.to_string());
        metrics.insert("inactive_objects".to_string(), self.inactive_objects.to_string());
        metrics.insert("double_release_events".to_string(), self.double_release_events.to_string());
        metrics.insert("reuse_ratio".to_string(), format!("{:.2}", self.reuse_ratio));
        metrics
    }
}

/// Metrics exporter for Prometheus format
pub struct MetricsExporter;

impl MetricsExporter {
    /// Export metrics in Prometheus exposition format
    ///
    /// # Examples
    ///
    /// ```
    /// use recycle_pool::ListPool;
    /// use std::collections::HashMap;
    ///
    /// let lists = ListPool::<u32>::new();
    ///
    /// let mut tags = HashMap::new();
    /// tags.insert("system".to_string(), "ai".to_string());
    ///
    /// let output = lists.pool().export_metrics_prometheus("waypoints", Some(&tags));
    /// assert!(output.contains("objectpool_objects_created_total"));
    /// assert!(output.contains("system=\"ai\""));
    /// ```
    pub fn export_prometheus(
        metrics: &PoolMetrics,
        pool_name: &str,
        tags: Option<&HashMap<String, String>>,
    ) -> String {
        let mut output = String::new();
        let labels = Self::format_labels(pool_name, tags);

        // Gauge metrics
        output.push_str("# HELP objectpool_objects_active Instances currently handed out\n");
        output.push_str("# TYPE objectpool_objects_active gauge\n");
        output.push_str(&format!("objectpool_objects_active{{{}}} {}\n", labels, metrics.active_objects));

        output.push_str("# HELP objectpool_objects_inactive Instances waiting in the free list\n");
        output.push_str("# TYPE objectpool_objects_inactive gauge\n");
        output.push_str(&format!("objectpool_objects_inactive{{{}}} {}\n", labels, metrics.inactive_objects));

        output.push_str("# HELP objectpool_reuse_ratio Share of acquisitions served from the free list\n");
        output.push_str("# TYPE objectpool_reuse_ratio gauge\n");
        output.push_str(&format!("objectpool_reuse_ratio{{{}}} {:.2}\n", labels, metrics.reuse_ratio));

        // Counter metrics
        output.push_str("# HELP objectpool_objects_created_total Instances constructed\n");
        output.push_str("# TYPE objectpool_objects_created_total counter\n");
        output.push_str(&format!("objectpool_objects_created_total{{{}}} {}\n", labels, metrics.total_created));

        output.push_str("# HELP objectpool_objects_acquired_total Total acquisitions\n");
        output.push_str("# TYPE objectpool_objects_acquired_total counter\n");
        output.push_str(&format!("objectpool_objects_acquired_total{{{}}} {}\n", labels, metrics.total_acquired));

        output.push_str("# HELP objectpool_objects_released_total Total releases\n");
        output.push_str("# TYPE objectpool_objects_released_total counter\n");
        output.push_str(&format!("objectpool_objects_released_total{{{}}} {}\n", labels, metrics.total_released));

        output.push_str("# HELP objectpool_double_releases_total Rejected double releases\n");
        output.push_str("# TYPE objectpool_double_releases_total counter\n");
        output.push_str(&format!("objectpool_double_releases_total{{{}}} {}\n", labels, metrics.double_release_events));

        output
    }

    fn format_labels(pool_name: &str, tags: Option<&HashMap<String, String>>) -> String {
        let mut labels = vec![format!("pool=\"{}\"", pool_name)];

        if let Some(tags) = tags {
            let mut sorted: Vec<_> = tags.iter().collect();
            sorted.sort();
            for (key, value) in sorted {
                labels.push(format!("{}=\"{}\"", key, value));
            }
        }

        labels.join(",")
    }
}

/// Internal metrics tracker
pub(crate) struct MetricsTracker {
    pub total_created: AtomicUsize,
    pub total_acquired: AtomicUsize,
    pub total_released: AtomicUsize,
    pub reused: AtomicUsize,
    pub double_release_events: AtomicUsize,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self {
            total_created: AtomicUsize::new(0),
            total_acquired: AtomicUsize::new(0),
            total_released: AtomicUsize::new(0),
            reused: AtomicUsize::new(0),
            double_release_events: AtomicUsize::new(0),
        }
    }

    pub fn created(&self) -> usize {
        self.total_created.load(Ordering::Relaxed)
    }

    pub fn get_metrics(&self, inactive: usize) -> PoolMetrics {
        let total_created = self.created();
        let total_acquired = self.total_acquired.load(Ordering::Relaxed);
        let reused = self.reused.load(Ordering::Relaxed);

        let reuse_ratio = if total_acquired > 0 {
            reused as f64 / total_acquired as f64
        } else {
            0.0
        };

        PoolMetrics {
            total_created,
            total_acquired,
            total_released: self.total_released.load(Ordering::Relaxed),
            reused,
            active_objects: total_created.saturating_sub(inactive),
            inactive_objects: inactive,
            double_release_events: self.double_release_events.load(Ordering::Relaxed),
            reuse_ratio,
        }
    }
}

impl Default for MetricsTracker {
    fn default() -> Self {
        Self::new()
    }
}

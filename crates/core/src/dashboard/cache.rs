//! Rendered dashboard caching using Moka.
//!
//! Every render is a pure function of its input, so results can be reused
//! while the provider keeps handing over the same lines and view.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use budget_sim_shared::CacheConfig;
use tracing::trace;

use super::service::DashboardService;
use super::types::{DashboardInput, DashboardRender};
use crate::views::ViewMode;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 100;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Cache for rendered dashboards.
///
/// Keyed by the hash of the input and the selected view. Thread-safe.
#[derive(Clone)]
pub struct DashboardCache {
    cache: Cache<String, Arc<DashboardRender>>,
}

impl DashboardCache {
    /// Creates a new cache with default settings.
    ///
    /// Default: 100 entries max, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a new cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Renders the dashboard, returning a cached result if available.
    ///
    /// Cache hits are returned with `cached: true`; the chart data is the
    /// same as a fresh render's.
    #[must_use]
    pub fn render_cached(&self, input: &DashboardInput, mode: ViewMode) -> DashboardRender {
        let cache_key = DashboardService::hash_input(input, mode);

        if let Some(cached_render) = self.cache.get(&cache_key) {
            trace!(key = %cache_key, "Dashboard cache hit");
            let mut render = (*cached_render).clone();
            render.cached = true;
            return render;
        }

        let render = DashboardService::render(input, mode);
        self.cache.insert(cache_key, Arc::new(render.clone()));

        render
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Invalidates the entry for one input and view.
    pub fn invalidate(&self, input: &DashboardInput, mode: ViewMode) {
        let cache_key = DashboardService::hash_input(input, mode);
        self.cache.invalidate(&cache_key);
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background; calling this reclaims
    /// memory and refreshes `entry_count` immediately.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for DashboardCache {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&CacheConfig> for DashboardCache {
    fn from(config: &CacheConfig) -> Self {
        Self::with_config(config.max_capacity, config.ttl_secs)
    }
}

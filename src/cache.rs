//! In-memory caching using moka
//!
//! Rate configurations change rarely relative to quote traffic, so a
//! short-TTL cache keeps the hot listings out of the database on every
//! quote request.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::listings::RateConfiguration;

/// Application cache holding listing rate configurations
#[derive(Clone)]
pub struct AppCache {
    /// Rate configurations (listing_id -> RateConfiguration)
    pub rates: Cache<Uuid, Arc<RateConfiguration>>,
}

impl AppCache {
    /// Create a new cache instance with configured TTLs
    pub fn new() -> Self {
        Self {
            // Rate configurations: 10k listings, 5 min TTL, 2 min idle
            rates: Cache::builder()
                .max_capacity(10_000)
                .time_to_live(Duration::from_secs(5 * 60))
                .time_to_idle(Duration::from_secs(2 * 60))
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            rates_size: self.rates.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.rates.invalidate_all();
        info!("All caches invalidated");
    }

    /// Invalidate the cached rates for one listing
    pub async fn invalidate_listing(&self, listing_id: Uuid) {
        self.rates.invalidate(&listing_id).await;
        info!("Cache invalidated for listing: {}", listing_id);
    }
}

impl Default for AppCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub rates_size: u64,
}

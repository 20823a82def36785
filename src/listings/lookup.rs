//! Cache-backed rate configuration lookup.
//!
//! Production implementation of the quote engine's [`RateLookup`] seam:
//! moka cache first, then Postgres, back-filling the cache on a miss.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::cache::AppCache;
use crate::error::AppError;
use crate::quoting::RateLookup;

use super::models::RateConfiguration;
use super::queries;

#[derive(Clone)]
pub struct PgRateLookup {
    db: PgPool,
    cache: AppCache,
}

impl PgRateLookup {
    pub fn new(db: PgPool, cache: AppCache) -> Self {
        Self { db, cache }
    }
}

#[async_trait]
impl RateLookup for PgRateLookup {
    async fn rate_configuration(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<RateConfiguration>, AppError> {
        if let Some(cached) = self.cache.rates.get(&listing_id).await {
            tracing::debug!("Cache HIT for listing rates: {}", listing_id);
            return Ok(Some((*cached).clone()));
        }

        tracing::debug!("Cache MISS for listing rates: {}", listing_id);
        let config = queries::get_rate_configuration(&self.db, listing_id).await?;
        if let Some(config) = &config {
            self.cache
                .rates
                .insert(listing_id, Arc::new(config.clone()))
                .await;
        }

        Ok(config)
    }
}

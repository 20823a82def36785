//! StayNest quote service library.
//!
//! Listing storage and the quote engine live here; main.rs only wires
//! the HTTP shell around them.

pub mod cache;
pub mod error;
pub mod listings;
pub mod quoting;

use sqlx::PgPool;

use cache::AppCache;
use quoting::QuoteEngine;

/// Shared application state for all routes
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub cache: AppCache,
    pub engine: QuoteEngine,
}

//! Stay-pricing quote engine.
//!
//! Computes deterministic, itemized price quotes for a listing and a
//! requested date range: nightly subtotal, discounts, fees, taxes, total.

pub mod calculators;
pub mod engine;
pub mod requests;
pub mod responses;
pub mod routes;

// Re-export commonly used items
pub use calculators::round_money;
pub use engine::{NoPromo, PriceQuote, PromoResolver, QuoteEngine, QuoteError, RateLookup};
pub use requests::QuoteParams;
pub use routes::router;

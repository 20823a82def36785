//! Listing rate configuration model.
//!
//! Owned by the listing store; the quote engine only reads it.

use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

/// Rate configuration for a listing, from listing_rates
#[derive(Debug, Clone, FromRow)]
pub struct RateConfiguration {
    pub listing_id: Uuid,
    /// Fallback nightly rate, always set and positive.
    pub base_price: Decimal,
    /// Overrides base_price for weekday nights when set.
    pub weekday_rate: Option<Decimal>,
    /// Overrides base_price for weekend nights when set.
    pub weekend_rate: Option<Decimal>,
    /// Flat per-stay fees.
    pub service_fee: Decimal,
    pub cleaning_fee: Decimal,
    /// Percentage applied to the discounted subtotal plus fees.
    pub taxes_percent: Decimal,
    /// Long-stay discount percentage; None means no monthly discount.
    pub monthly_discount_percent: Option<Decimal>,
    /// ISO currency code, passed through unconverted.
    pub currency: String,
    /// Quoting is refused while false.
    pub is_active: bool,
}

impl RateConfiguration {
    pub fn effective_weekday_rate(&self) -> Decimal {
        self.weekday_rate.unwrap_or(self.base_price)
    }

    pub fn effective_weekend_rate(&self) -> Decimal {
        self.weekend_rate.unwrap_or(self.base_price)
    }
}

//! Response DTOs for the quote API.

use rust_decimal::Decimal;
use serde::Serialize;

use super::engine::{PriceQuote, QuoteError};

/// Itemized price quote for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct PriceQuoteResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub weekday_nights: i64,
    pub weekend_nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub weekday_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub weekend_rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub service_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cleaning_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub taxes: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub taxes_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_discount_percent: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub promo_discount: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub currency: String,
    pub breakdown: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,
}

impl From<PriceQuote> for PriceQuoteResponse {
    fn from(quote: PriceQuote) -> Self {
        Self {
            base_price: quote.base_price,
            nights: quote.nights,
            subtotal: quote.subtotal,
            weekday_nights: quote.weekday_nights,
            weekend_nights: quote.weekend_nights,
            weekday_rate: quote.weekday_rate,
            weekend_rate: quote.weekend_rate,
            service_fee: quote.service_fee,
            cleaning_fee: quote.cleaning_fee,
            taxes: quote.taxes,
            taxes_percent: quote.taxes_percent,
            monthly_discount: quote.monthly_discount,
            monthly_discount_percent: quote.monthly_discount_percent,
            promo_discount: quote.promo_discount,
            total: quote.total,
            currency: quote.currency,
            breakdown: quote.breakdown,
            price_per_night: quote.price_per_night,
        }
    }
}

/// Error body for failed quote requests
#[derive(Debug, Serialize)]
pub struct QuoteErrorResponse {
    pub error_type: String,
    pub message: String,
}

impl From<&QuoteError> for QuoteErrorResponse {
    fn from(err: &QuoteError) -> Self {
        Self {
            error_type: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

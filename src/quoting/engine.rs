//! Quote engine: input validation and the pricing pipeline.
//!
//! The engine is a stateless function of its inputs plus two injected
//! collaborators: the rate-configuration lookup and the promo resolver.
//! Concurrent calls share no mutable state.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::AppError;
use crate::listings::RateConfiguration;

use super::calculators::{
    apply_discounts, classify_nights, format_breakdown, monthly_discount, nightly_subtotal,
    round_money, tax_amount,
};
use super::requests::QuoteParams;

/// Rate configuration lookup seam.
///
/// Production uses the cache-backed Postgres lookup; tests inject fakes.
#[async_trait]
pub trait RateLookup: Send + Sync {
    /// `Ok(None)` means no configuration exists for the listing.
    async fn rate_configuration(
        &self,
        listing_id: Uuid,
    ) -> Result<Option<RateConfiguration>, AppError>;
}

/// Promo discount resolution seam.
///
/// The engine never validates code syntax or expiry; it only consumes the
/// resolved discount amount.
#[async_trait]
pub trait PromoResolver: Send + Sync {
    async fn resolve(&self, code: &str, subtotal: Decimal) -> Result<Decimal, AppError>;
}

/// Promo resolver used until promo redemption ships: every code resolves
/// to a zero discount.
pub struct NoPromo;

#[async_trait]
impl PromoResolver for NoPromo {
    async fn resolve(&self, _code: &str, _subtotal: Decimal) -> Result<Decimal, AppError> {
        Ok(Decimal::ZERO)
    }
}

/// Quote request failures
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("check-in and check-out dates are required")]
    MissingDates,

    #[error("dates must be ISO-8601 calendar dates (YYYY-MM-DD)")]
    InvalidDateFormat,

    #[error("check-out must be after check-in")]
    InvalidRange,

    #[error("listing not found")]
    ListingNotFound,

    #[error("listing is not currently accepting bookings")]
    ListingUnavailable,

    #[error("quote computation failed")]
    InternalFault(#[source] AppError),
}

impl QuoteError {
    /// Stable machine-readable tag for JSON error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            QuoteError::MissingDates => "missing_dates",
            QuoteError::InvalidDateFormat => "invalid_date_format",
            QuoteError::InvalidRange => "invalid_range",
            QuoteError::ListingNotFound => "listing_not_found",
            QuoteError::ListingUnavailable => "listing_unavailable",
            QuoteError::InternalFault(_) => "internal_fault",
        }
    }
}

/// Itemized price quote for one stay. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    pub base_price: Decimal,
    pub nights: i64,
    pub subtotal: Decimal,
    pub weekday_nights: i64,
    pub weekend_nights: i64,
    pub weekday_rate: Decimal,
    pub weekend_rate: Decimal,
    pub service_fee: Decimal,
    pub cleaning_fee: Decimal,
    pub taxes: Decimal,
    pub taxes_percent: Decimal,
    pub monthly_discount: Decimal,
    pub monthly_discount_percent: Decimal,
    pub promo_discount: Decimal,
    pub total: Decimal,
    pub currency: String,
    pub breakdown: String,
    pub price_per_night: Decimal,
}

/// The pricing engine with its injected collaborators
#[derive(Clone)]
pub struct QuoteEngine {
    rates: Arc<dyn RateLookup>,
    promos: Arc<dyn PromoResolver>,
}

impl QuoteEngine {
    pub fn new(rates: Arc<dyn RateLookup>, promos: Arc<dyn PromoResolver>) -> Self {
        Self { rates, promos }
    }

    /// Compute an itemized quote for a stay at the listing.
    ///
    /// Pipeline: validate dates, fetch the rate configuration, classify
    /// nights, apply rates, apply discounts (monthly then promo, clamped
    /// at zero), add fees, apply taxes, round and format. Either a
    /// complete quote or exactly one error comes back; there is no
    /// partial success.
    pub async fn quote(
        &self,
        listing_id: Uuid,
        params: &QuoteParams,
    ) -> Result<PriceQuote, QuoteError> {
        let (check_in, check_out) =
            parse_stay_dates(params.check_in.as_deref(), params.check_out.as_deref())?;

        let config = self
            .rates
            .rate_configuration(listing_id)
            .await
            .map_err(QuoteError::InternalFault)?
            .ok_or(QuoteError::ListingNotFound)?;

        if !config.is_active {
            return Err(QuoteError::ListingUnavailable);
        }

        let nights = classify_nights(check_in, check_out);
        let total_nights = nights.total_nights();

        let weekday_rate = config.effective_weekday_rate();
        let weekend_rate = config.effective_weekend_rate();
        let subtotal = nightly_subtotal(&nights, weekday_rate, weekend_rate);

        let monthly =
            monthly_discount(subtotal, total_nights, config.monthly_discount_percent);
        let promo = match params.promo_code.as_deref() {
            Some(code) if !code.trim().is_empty() => self
                .promos
                .resolve(code, subtotal)
                .await
                .map_err(QuoteError::InternalFault)?,
            _ => Decimal::ZERO,
        };
        let discounted = apply_discounts(subtotal, monthly, promo);

        let taxes = tax_amount(
            discounted + config.service_fee + config.cleaning_fee,
            config.taxes_percent,
        );
        let total = round_money(
            discounted + config.service_fee + config.cleaning_fee + taxes,
            2,
        );
        // total_nights >= 1 is guaranteed by the InvalidRange check.
        let price_per_night = round_money(total / Decimal::from(total_nights), 2);

        let breakdown = format_breakdown(&nights, weekday_rate, weekend_rate, subtotal);

        Ok(PriceQuote {
            base_price: config.base_price,
            nights: total_nights,
            subtotal,
            weekday_nights: nights.weekday_nights,
            weekend_nights: nights.weekend_nights,
            weekday_rate,
            weekend_rate,
            service_fee: config.service_fee,
            cleaning_fee: config.cleaning_fee,
            taxes,
            taxes_percent: config.taxes_percent,
            monthly_discount: monthly,
            monthly_discount_percent: config.monthly_discount_percent.unwrap_or(Decimal::ZERO),
            promo_discount: promo,
            total,
            currency: config.currency,
            breakdown,
            price_per_night,
        })
    }
}

/// Parse and validate the requested stay window. Runs before any
/// computation or collaborator call.
fn parse_stay_dates(
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> Result<(NaiveDate, NaiveDate), QuoteError> {
    let (check_in, check_out) = match (check_in, check_out) {
        (Some(ci), Some(co)) if !ci.trim().is_empty() && !co.trim().is_empty() => {
            (ci.trim(), co.trim())
        }
        _ => return Err(QuoteError::MissingDates),
    };

    let check_in = NaiveDate::parse_from_str(check_in, "%Y-%m-%d")
        .map_err(|_| QuoteError::InvalidDateFormat)?;
    let check_out = NaiveDate::parse_from_str(check_out, "%Y-%m-%d")
        .map_err(|_| QuoteError::InvalidDateFormat)?;

    if check_out <= check_in {
        return Err(QuoteError::InvalidRange);
    }

    Ok((check_in, check_out))
}

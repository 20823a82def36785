//! Database queries for listing rate configurations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;

use super::models::RateConfiguration;

/// Fetch the rate configuration for a listing, if one exists
pub async fn get_rate_configuration(
    pool: &PgPool,
    listing_id: Uuid,
) -> Result<Option<RateConfiguration>, AppError> {
    let config = sqlx::query_as::<_, RateConfiguration>(
        r#"
        SELECT
            listing_id, base_price, weekday_rate, weekend_rate,
            service_fee, cleaning_fee, taxes_percent,
            monthly_discount_percent, currency, is_active
        FROM listing_rates
        WHERE listing_id = $1
        "#,
    )
    .bind(listing_id)
    .fetch_optional(pool)
    .await?;

    Ok(config)
}

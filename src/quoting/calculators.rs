//! Core quote calculation functions.
//!
//! Pure functions for stay-pricing math - no database access.
//! Everything here is deterministic: the same inputs always produce the
//! same breakdown, discounts and totals.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Minimum stay length, in nights, that activates the monthly discount.
pub const MONTHLY_STAY_NIGHTS: i64 = 28;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use staynest_web::quoting::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Whether the night starting on `date` bills at the weekend rate.
///
/// A night is a weekend night when its start date falls on Friday or
/// Saturday. Fixed business rule, not configurable.
pub fn is_weekend_night(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Fri | Weekday::Sat)
}

/// Per-class night counts for a stay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NightsBreakdown {
    pub weekday_nights: i64,
    pub weekend_nights: i64,
}

impl NightsBreakdown {
    pub fn total_nights(&self) -> i64 {
        self.weekday_nights + self.weekend_nights
    }
}

/// Classify every night of the half-open stay `[check_in, check_out)`.
///
/// Walks the stay lazily date-by-date; the checkout date itself is never
/// billed as a night. Operates purely on calendar dates, so the counts
/// are unaffected by daylight-saving transitions and always satisfy
/// `weekday_nights + weekend_nights == (check_out - check_in).num_days()`.
pub fn classify_nights(check_in: NaiveDate, check_out: NaiveDate) -> NightsBreakdown {
    let mut nights = NightsBreakdown::default();
    for night in check_in.iter_days().take_while(|day| *day < check_out) {
        if is_weekend_night(night) {
            nights.weekend_nights += 1;
        } else {
            nights.weekday_nights += 1;
        }
    }
    nights
}

/// Nightly subtotal for the stay, before any discounts or fees.
///
/// No rounding at this stage; rounding is deferred to the final totals
/// so intermediate sums do not compound rounding error.
pub fn nightly_subtotal(
    nights: &NightsBreakdown,
    weekday_rate: Decimal,
    weekend_rate: Decimal,
) -> Decimal {
    Decimal::from(nights.weekday_nights) * weekday_rate
        + Decimal::from(nights.weekend_nights) * weekend_rate
}

/// Long-stay discount amount.
///
/// Activates only when the stay is at least [`MONTHLY_STAY_NIGHTS`] nights
/// and the listing configures a positive percentage. Rounded to cents with
/// banker's rounding so the downstream invariants hold on exact amounts.
pub fn monthly_discount(subtotal: Decimal, total_nights: i64, percent: Option<Decimal>) -> Decimal {
    match percent {
        Some(pct) if total_nights >= MONTHLY_STAY_NIGHTS && pct > Decimal::ZERO => {
            round_money(subtotal * pct / Decimal::ONE_HUNDRED, 2)
        }
        _ => Decimal::ZERO,
    }
}

/// Subtract the monthly then the promo discount from the subtotal.
///
/// Clamped at zero: combined discounts never drive the subtotal negative.
pub fn apply_discounts(subtotal: Decimal, monthly: Decimal, promo: Decimal) -> Decimal {
    (subtotal - monthly - promo).max(Decimal::ZERO)
}

/// Tax amount on the taxable base (discounted subtotal plus flat fees),
/// rounded to cents.
pub fn tax_amount(taxable: Decimal, percent: Decimal) -> Decimal {
    round_money(taxable * percent / Decimal::ONE_HUNDRED, 2)
}

/// Human-readable summary of the nightly rate composition.
///
/// Mixed stays list both rate classes; homogeneous stays use the blended
/// average rate with night/nights pluralization. Rates display truncated
/// to whole units. Display only - the numeric quote fields stay
/// authoritative for billing.
pub fn format_breakdown(
    nights: &NightsBreakdown,
    weekday_rate: Decimal,
    weekend_rate: Decimal,
    subtotal: Decimal,
) -> String {
    let total = nights.total_nights();
    if total == 0 {
        return String::new();
    }

    if nights.weekday_nights > 0 && nights.weekend_nights > 0 {
        format!(
            "${} x {} weekday nights + ${} x {} weekend nights",
            weekday_rate.trunc(),
            nights.weekday_nights,
            weekend_rate.trunc(),
            nights.weekend_nights
        )
    } else {
        let blended = subtotal / Decimal::from(total);
        let unit = if total == 1 { "night" } else { "nights" };
        format!("${} x {} {}", blended.trunc(), total, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ==================== round_money tests ====================

    #[test]
    fn test_round_money_bankers_rounding_to_even() {
        assert_eq!(round_money(dec!(2.5), 0), dec!(2)); // rounds down to even
        assert_eq!(round_money(dec!(3.5), 0), dec!(4)); // rounds up to even
        assert_eq!(round_money(dec!(2.125), 2), dec!(2.12));
        assert_eq!(round_money(dec!(2.135), 2), dec!(2.14));
    }

    #[test]
    fn test_round_money_normal_rounding() {
        assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
        assert_eq!(round_money(dec!(1.236), 2), dec!(1.24));
        assert_eq!(round_money(dec!(999999.995), 2), dec!(1000000.00));
    }

    // ==================== night classification tests ====================

    #[test]
    fn test_weekend_nights_are_friday_and_saturday() {
        assert!(!is_weekend_night(date(2024, 1, 8))); // Mon
        assert!(!is_weekend_night(date(2024, 1, 11))); // Thu
        assert!(is_weekend_night(date(2024, 1, 12))); // Fri
        assert!(is_weekend_night(date(2024, 1, 13))); // Sat
        assert!(!is_weekend_night(date(2024, 1, 14))); // Sun
    }

    #[test]
    fn test_classify_weekday_only_stay() {
        // Mon 2024-01-08 .. Wed 2024-01-10: nights Mon, Tue
        let nights = classify_nights(date(2024, 1, 8), date(2024, 1, 10));
        assert_eq!(nights.weekday_nights, 2);
        assert_eq!(nights.weekend_nights, 0);
        assert_eq!(nights.total_nights(), 2);
    }

    #[test]
    fn test_classify_mixed_stay() {
        // Thu 2024-01-04 .. Mon 2024-01-08: nights Thu, Fri, Sat, Sun
        let nights = classify_nights(date(2024, 1, 4), date(2024, 1, 8));
        assert_eq!(nights.weekday_nights, 2); // Thu, Sun
        assert_eq!(nights.weekend_nights, 2); // Fri, Sat
    }

    #[test]
    fn test_checkout_date_is_not_a_night() {
        // Thu .. Fri: only Thursday night, the Friday checkout never bills
        let nights = classify_nights(date(2024, 1, 4), date(2024, 1, 5));
        assert_eq!(nights.weekday_nights, 1);
        assert_eq!(nights.weekend_nights, 0);
    }

    #[test]
    fn test_classify_empty_range() {
        let nights = classify_nights(date(2024, 1, 4), date(2024, 1, 4));
        assert_eq!(nights.total_nights(), 0);
    }

    #[test]
    fn test_classify_across_dst_transitions() {
        // US spring-forward (2024-03-10) and fall-back (2024-11-03) weekends.
        // Calendar-date walking must not gain or lose a night.
        let nights = classify_nights(date(2024, 3, 8), date(2024, 3, 12));
        assert_eq!(nights.total_nights(), 4);
        assert_eq!(nights.weekend_nights, 2); // Fri 8th, Sat 9th

        let nights = classify_nights(date(2024, 11, 1), date(2024, 11, 5));
        assert_eq!(nights.total_nights(), 4);
        assert_eq!(nights.weekend_nights, 2); // Fri 1st, Sat 2nd
    }

    #[test]
    fn test_night_counts_partition_full_leap_year() {
        let start = date(2024, 1, 1);
        for offset in 0..366u64 {
            let check_in = start + Days::new(offset);
            for len in 1..=7u64 {
                let check_out = check_in + Days::new(len);
                let nights = classify_nights(check_in, check_out);
                assert_eq!(
                    nights.weekday_nights + nights.weekend_nights,
                    (check_out - check_in).num_days(),
                    "counts must partition {} .. {}",
                    check_in,
                    check_out
                );
            }
        }
    }

    // ==================== subtotal tests ====================

    #[test]
    fn test_subtotal_single_rate() {
        let nights = NightsBreakdown { weekday_nights: 2, weekend_nights: 0 };
        assert_eq!(nightly_subtotal(&nights, dec!(100), dec!(100)), dec!(200));
    }

    #[test]
    fn test_subtotal_mixed_rates() {
        let nights = NightsBreakdown { weekday_nights: 2, weekend_nights: 2 };
        assert_eq!(nightly_subtotal(&nights, dec!(100), dec!(150)), dec!(500));
    }

    #[test]
    fn test_subtotal_keeps_full_precision() {
        let nights = NightsBreakdown { weekday_nights: 3, weekend_nights: 0 };
        assert_eq!(nightly_subtotal(&nights, dec!(33.33), dec!(0)), dec!(99.99));
    }

    // ==================== discount tests ====================

    #[test]
    fn test_monthly_discount_below_threshold() {
        assert_eq!(monthly_discount(dec!(1500), 27, Some(dec!(10))), dec!(0));
    }

    #[test]
    fn test_monthly_discount_at_threshold() {
        assert_eq!(monthly_discount(dec!(1400), 28, Some(dec!(10))), dec!(140));
    }

    #[test]
    fn test_monthly_discount_requires_configured_percent() {
        assert_eq!(monthly_discount(dec!(1500), 30, None), dec!(0));
        assert_eq!(monthly_discount(dec!(1500), 30, Some(dec!(0))), dec!(0));
    }

    #[test]
    fn test_monthly_discount_rounds_to_cents() {
        // 10% of 333.33 = 33.333 -> 33.33
        assert_eq!(monthly_discount(dec!(333.33), 30, Some(dec!(10))), dec!(33.33));
    }

    #[test]
    fn test_apply_discounts_in_order() {
        assert_eq!(apply_discounts(dec!(1500), dec!(150), dec!(50)), dec!(1300));
    }

    #[test]
    fn test_apply_discounts_clamps_at_zero() {
        assert_eq!(apply_discounts(dec!(100), dec!(80), dec!(80)), dec!(0));
        assert_eq!(apply_discounts(dec!(0), dec!(0), dec!(0)), dec!(0));
    }

    // ==================== tax tests ====================

    #[test]
    fn test_tax_amount_scenario() {
        // discounted 1350 + fees 50 = taxable 1400 at 8%
        assert_eq!(tax_amount(dec!(1400), dec!(8)), dec!(112.00));
    }

    #[test]
    fn test_tax_amount_zero_percent() {
        assert_eq!(tax_amount(dec!(1400), dec!(0)), dec!(0));
    }

    #[test]
    fn test_tax_amount_rounds_to_cents() {
        // 123.45 * 7.5% = 9.25875 -> 9.26
        assert_eq!(tax_amount(dec!(123.45), dec!(7.5)), dec!(9.26));
    }

    // ==================== breakdown formatting tests ====================

    #[test]
    fn test_breakdown_mixed_stay_lists_both_rates() {
        let nights = NightsBreakdown { weekday_nights: 2, weekend_nights: 2 };
        assert_eq!(
            format_breakdown(&nights, dec!(100), dec!(150), dec!(500)),
            "$100 x 2 weekday nights + $150 x 2 weekend nights"
        );
    }

    #[test]
    fn test_breakdown_homogeneous_stay_uses_blended_rate() {
        let nights = NightsBreakdown { weekday_nights: 2, weekend_nights: 0 };
        assert_eq!(format_breakdown(&nights, dec!(100), dec!(100), dec!(200)), "$100 x 2 nights");
    }

    #[test]
    fn test_breakdown_single_night_is_singular() {
        let nights = NightsBreakdown { weekday_nights: 1, weekend_nights: 0 };
        assert_eq!(format_breakdown(&nights, dec!(100), dec!(100), dec!(100)), "$100 x 1 night");
    }

    #[test]
    fn test_breakdown_truncates_rates_for_display() {
        let nights = NightsBreakdown { weekday_nights: 3, weekend_nights: 2 };
        assert_eq!(
            format_breakdown(&nights, dec!(99.50), dec!(149.99), dec!(598.48)),
            "$99 x 3 weekday nights + $149 x 2 weekend nights"
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use chrono::Days;
    use proptest::prelude::*;

    proptest! {
        /// Weekday and weekend counts always partition the stay exactly,
        /// regardless of where in the decade the window lands.
        #[test]
        fn prop_night_classes_partition_the_stay(
            start_offset in 0u64..3650,
            len in 1u64..400,
        ) {
            let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
            let check_in = epoch + Days::new(start_offset);
            let check_out = check_in + Days::new(len);
            let nights = classify_nights(check_in, check_out);
            prop_assert_eq!(nights.weekday_nights + nights.weekend_nights, len as i64);
        }

        /// Combined discounts never drive the discounted subtotal negative.
        #[test]
        fn prop_discounted_subtotal_never_negative(
            subtotal_cents in 0u32..1_000_000,
            monthly_cents in 0u32..2_000_000,
            promo_cents in 0u32..2_000_000,
        ) {
            let to_money = |cents: u32| Decimal::from(cents) / Decimal::ONE_HUNDRED;
            let discounted = apply_discounts(
                to_money(subtotal_cents),
                to_money(monthly_cents),
                to_money(promo_cents),
            );
            prop_assert!(discounted >= Decimal::ZERO);
        }

        /// Taxes are always a 2-decimal amount proportional to the base.
        #[test]
        fn prop_tax_amount_is_cents_precise(
            taxable_cents in 0u32..10_000_000,
            percent_tenths in 0u32..500,
        ) {
            let taxable = Decimal::from(taxable_cents) / Decimal::ONE_HUNDRED;
            let percent = Decimal::from(percent_tenths) / Decimal::TEN;
            let taxes = tax_amount(taxable, percent);
            prop_assert!(taxes >= Decimal::ZERO);
            prop_assert_eq!(taxes, round_money(taxes, 2));
        }
    }
}

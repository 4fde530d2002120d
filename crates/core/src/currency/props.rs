//! Property-based tests for currency operations.
//!
//! - Registry metadata is always positive
//! - Formatting then parsing a non-negative amount is lossless
//! - Parsing truncates extra fractional digits
//! - Decimal and float payouts agree away from integer boundaries

use num::BigInt;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::registry::{lookup_currency, supported_currencies};
use super::service::CurrencyService;
use super::units::{subunits_to_units_string, units_string_to_subunits};
use spotmath_shared::{ConversionConfig, RateArithmetic};

/// Strategy to pick a registered currency code.
fn currency_code() -> impl Strategy<Value = &'static str> {
    prop::sample::select(supported_currencies())
}

/// Strategy to generate non-negative subunit amounts.
fn amount_subunits() -> impl Strategy<Value = i64> {
    0i64..=i64::MAX
}

/// Strategy to generate prices with up to 28 significant digits at any scale.
fn full_precision_price() -> impl Strategy<Value = Decimal> {
    (1i128..10i128.pow(28), 0u32..=28).prop_map(|(m, s)| Decimal::from_i128_with_scale(m, s))
}

/// Strategy to generate prices of at least one unit (1.0 to 1,000,000.0).
fn unit_price() -> impl Strategy<Value = Decimal> {
    (100_000_000i64..100_000_000_000_000i64).prop_map(|v| Decimal::new(v, 8))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every registered currency has a positive scale and precision.
    #[test]
    fn prop_registry_metadata_positive(code in currency_code()) {
        let metadata = lookup_currency(code).unwrap();
        prop_assert!(metadata.subunits_per_unit > 0);
        prop_assert!(metadata.significant_digits > 0);
    }

    /// Formatting then parsing returns the original subunits.
    #[test]
    fn prop_round_trip(code in currency_code(), amount in amount_subunits()) {
        let units = subunits_to_units_string(amount, code).unwrap();
        let subunits = units_string_to_subunits(&units, code).unwrap();
        prop_assert_eq!(subunits, amount.to_string());
    }

    /// Unit strings always carry exactly `significant_digits` fractional digits.
    #[test]
    fn prop_fraction_width(code in currency_code(), amount in amount_subunits()) {
        let metadata = lookup_currency(code).unwrap();
        let units = subunits_to_units_string(amount, code).unwrap();
        let (_, fraction) = units.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), metadata.significant_digits);
    }

    /// Digits past the currency precision are dropped, not rounded.
    #[test]
    fn prop_parse_truncates(whole in 0u32..1_000_000, cents in 0u32..100, extra in "[0-9]{1,6}") {
        let input = format!("{whole}.{cents:02}{extra}");
        let subunits = units_string_to_subunits(&input, "USD").unwrap();
        let expected = u64::from(whole) * 100 + u64::from(cents);
        prop_assert_eq!(subunits, expected.to_string());
    }

    /// Thousands separators never change the parsed amount.
    #[test]
    fn prop_separators_ignored(whole in 1_000u64..1_000_000_000, sats in 0u64..100_000_000) {
        let plain = format!("{whole}.{sats:08}");
        let grouped = format!("{}.{sats:08}", group_thousands(whole));
        prop_assert_eq!(
            units_string_to_subunits(&plain, "BTC").unwrap(),
            units_string_to_subunits(&grouped, "BTC").unwrap()
        );
    }

    /// Both arithmetic modes land within one subunit of each other while the
    /// result stays well inside f64 integer precision.
    #[test]
    fn prop_decimal_and_float_agree(amount in 0i64..100_000_000, price in unit_price()) {
        let decimal = CurrencyService::default();
        let float = CurrencyService::new(ConversionConfig {
            rate_arithmetic: RateArithmetic::Float,
            ..ConversionConfig::default()
        });
        let price = price.to_string();

        let a = decimal.payout_from_payin_quoted_price("USD", "BTC", amount, &price).unwrap();
        let b = float.payout_from_payin_quoted_price("USD", "BTC", amount, &price).unwrap();
        prop_assert!((a - b).abs() <= 1, "decimal {} vs float {}", a, b);
    }

    /// Payouts are the exact rational result truncated: never rounded up,
    /// never more than one subunit short.
    #[test]
    fn prop_payout_never_rounds_up(
        amount in 0i64..1_000_000_000_000,
        price in full_precision_price(),
    ) {
        let payout = CurrencyService::default()
            .payout_from_payout_quoted_price("BTC", "USD", amount, &price.to_string())
            .unwrap();

        // exact: amount * mantissa * 100 / (10^scale * 1e8)
        let numerator = BigInt::from(amount) * BigInt::from(price.mantissa()) * 100;
        let denominator = BigInt::from(10u8).pow(price.scale()) * 100_000_000;
        let payout = BigInt::from(payout);
        prop_assert!(&payout * &denominator <= numerator);
        prop_assert!((payout + 1) * denominator > numerator);
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

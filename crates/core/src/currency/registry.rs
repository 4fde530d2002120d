//! Static registry of supported currencies.
//!
//! The set of currencies is closed: lookup is the only way to validate a
//! currency code, and every conversion goes through it.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use spotmath_shared::{ConversionError, ConversionResult, CurrencyMetadata};

/// Bitcoin, 8 decimal places (satoshis).
pub const BTC: CurrencyMetadata = CurrencyMetadata::new(100_000_000, 8);
/// US Dollar, 2 decimal places.
pub const USD: CurrencyMetadata = CurrencyMetadata::new(100, 2);
/// Kenyan Shilling, 2 decimal places.
pub const KES: CurrencyMetadata = CurrencyMetadata::new(100, 2);
/// Mexican Peso, 2 decimal places.
pub const MXN: CurrencyMetadata = CurrencyMetadata::new(100, 2);
/// USD Coin, 6 decimal places.
pub const USDC: CurrencyMetadata = CurrencyMetadata::new(1_000_000, 6);

static REGISTRY: Lazy<HashMap<&'static str, CurrencyMetadata>> = Lazy::new(|| {
    HashMap::from([
        ("BTC", BTC),
        ("USD", USD),
        ("KES", KES),
        ("MXN", MXN),
        ("USDC", USDC),
    ])
});

/// Looks up the metadata of a currency code.
///
/// Codes are matched exactly, so `"usd"` is not `"USD"`.
///
/// # Errors
///
/// Returns `ConversionError::UnknownCurrency` if the code is not registered.
///
/// # Example
///
/// ```
/// use spotmath_core::currency::lookup_currency;
///
/// let btc = lookup_currency("BTC").unwrap();
/// assert_eq!(btc.subunits_per_unit, 100_000_000);
/// assert!(lookup_currency("ZZZ").is_err());
/// ```
pub fn lookup_currency(code: &str) -> ConversionResult<CurrencyMetadata> {
    REGISTRY
        .get(code)
        .copied()
        .ok_or_else(|| ConversionError::UnknownCurrency(code.to_string()))
}

/// Returns every registered currency code, sorted.
#[must_use]
pub fn supported_currencies() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = REGISTRY.keys().copied().collect();
    codes.sort_unstable();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BTC", 100_000_000, 8)]
    #[case("USD", 100, 2)]
    #[case("KES", 100, 2)]
    #[case("MXN", 100, 2)]
    #[case("USDC", 1_000_000, 6)]
    fn test_lookup_known(#[case] code: &str, #[case] per_unit: i64, #[case] digits: usize) {
        let metadata = lookup_currency(code).unwrap();
        assert_eq!(metadata.subunits_per_unit, per_unit);
        assert_eq!(metadata.significant_digits, digits);
    }

    #[rstest]
    #[case("ZZZ")]
    #[case("usd")]
    #[case("")]
    #[case(" BTC")]
    fn test_lookup_unknown(#[case] code: &str) {
        assert_eq!(
            lookup_currency(code),
            Err(ConversionError::UnknownCurrency(code.to_string()))
        );
    }

    #[test]
    fn test_supported_currencies_sorted() {
        assert_eq!(
            supported_currencies(),
            vec!["BTC", "KES", "MXN", "USD", "USDC"]
        );
    }

    #[test]
    fn test_scale_matches_digits() {
        for code in supported_currencies() {
            let metadata = lookup_currency(code).unwrap();
            let digits = u32::try_from(metadata.significant_digits).unwrap();
            assert_eq!(metadata.subunits_per_unit, 10i64.pow(digits), "{code}");
        }
    }
}

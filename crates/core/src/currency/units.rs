//! Conversion between integer subunits and decimal unit strings.
//!
//! Both directions work on a fixed number of fractional digits per currency.
//! Extra digits are truncated, never rounded.

use std::borrow::Cow;

use spotmath_shared::{ConversionError, ConversionResult, CurrencyMetadata, SubunitAmount};

use super::registry::lookup_currency;

/// Renders a subunit amount as a unit string, e.g. `12311` USD -> `"123.11"`.
///
/// Whole units and the remainder come from truncating integer division, so
/// negative amounts carry the sign on both parts: `-150` USD renders as
/// `"-1.-5"`.
///
/// # Example
///
/// ```
/// use spotmath_core::currency::subunits_to_units_string;
///
/// assert_eq!(subunits_to_units_string(100_000_000, "BTC").unwrap(), "1.00000000");
/// assert_eq!(subunits_to_units_string(506_379, "BTC").unwrap(), "0.00506379");
/// ```
pub fn subunits_to_units_string(
    amount_subunits: i64,
    currency_code: &str,
) -> ConversionResult<String> {
    let metadata = lookup_currency(currency_code)?;
    Ok(format_units(i128::from(amount_subunits), metadata))
}

/// Renders a [`SubunitAmount`] as a unit string in its own currency.
pub fn format_subunit_amount(amount: &SubunitAmount) -> ConversionResult<String> {
    let metadata = lookup_currency(&amount.currency)?;
    Ok(format_units(amount.subunits, metadata))
}

/// Parses a unit string into a subunit integer string, e.g. `"1.23"` USD ->
/// `"123"`.
///
/// Commas are dropped first. The result is a canonical decimal integer of
/// any magnitude.
///
/// # Example
///
/// ```
/// use spotmath_core::currency::units_string_to_subunits;
///
/// assert_eq!(units_string_to_subunits("0.0050637", "BTC").unwrap(), "506370");
/// assert_eq!(units_string_to_subunits("1,000.5", "USD").unwrap(), "100050");
/// ```
pub fn units_string_to_subunits(
    amount_units: &str,
    currency_code: &str,
) -> ConversionResult<String> {
    let metadata = lookup_currency(currency_code)?;
    parse_units(amount_units, metadata, true)
}

/// Parses a unit string into a [`SubunitAmount`].
///
/// # Errors
///
/// Fails like [`units_string_to_subunits`], and with `Overflow` when the
/// amount does not fit an `i128`.
pub fn parse_subunit_amount(
    amount_units: &str,
    currency_code: &str,
) -> ConversionResult<SubunitAmount> {
    let subunits = units_string_to_subunits(amount_units, currency_code)?;
    let subunits = subunits
        .parse::<i128>()
        .map_err(|_| ConversionError::Overflow(format!("{subunits} subunits")))?;
    Ok(SubunitAmount::new(subunits, currency_code))
}

pub(crate) fn format_units(amount: i128, metadata: CurrencyMetadata) -> String {
    let per_unit = i128::from(metadata.subunits_per_unit);
    let digits = metadata.significant_digits;

    let whole = amount / per_unit;
    let remainder = amount % per_unit;

    let mut fraction = remainder.to_string();
    if remainder == 0 {
        fraction = "0".repeat(digits);
    } else if fraction.len() < digits {
        fraction.insert_str(0, &"0".repeat(digits - fraction.len()));
    } else if fraction.len() > digits {
        // remainder digits are ASCII, byte truncation is safe
        fraction.truncate(digits);
    }

    format!("{whole}.{fraction}")
}

pub(crate) fn parse_units(
    amount_units: &str,
    metadata: CurrencyMetadata,
    strip_separators: bool,
) -> ConversionResult<String> {
    let cleaned: Cow<'_, str> = if strip_separators {
        Cow::Owned(amount_units.replace(',', ""))
    } else {
        Cow::Borrowed(amount_units)
    };

    let (major, minor) = cleaned.split_once('.').unwrap_or((cleaned.as_ref(), ""));
    if minor.contains('.') {
        return Err(ConversionError::malformed(
            cleaned.as_ref(),
            "more than one decimal point",
        ));
    }

    let digits = metadata.significant_digits;
    let mut minor: String = minor.chars().take(digits).collect();
    let minor_len = minor.chars().count();
    if minor_len < digits {
        minor.push_str(&"0".repeat(digits - minor_len));
    }

    let major = if major.is_empty() { "0" } else { major };

    let subunits = canonical_integer(&format!("{major}{minor}")).ok_or_else(|| {
        ConversionError::malformed(cleaned.as_ref(), "not a valid integer amount")
    })?;

    tracing::trace!(input = %amount_units, %subunits, "parsed unit string");
    Ok(subunits)
}

/// Validates an optionally signed run of ASCII digits and returns it without
/// leading zeros or a `+` sign.
fn canonical_integer(literal: &str) -> Option<String> {
    let (negative, digits) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return Some("0".to_string());
    }

    Some(if negative {
        format!("-{trimmed}")
    } else {
        trimmed.to_string()
    })
}

//! Spot prices and the payout arithmetic built on them.
//!
//! A spot price is always "one whole unit of `base` costs `price` units of
//! `quote`". Which side of a conversion the price is denominated in decides
//! whether it multiplies or divides the payin amount.

use std::str::FromStr;

use num::{BigInt, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use spotmath_shared::{ConversionError, ConversionResult, CurrencyMetadata};

/// Which currency of a conversion the spot price is denominated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteSide {
    /// Payin units per one payout unit (e.g. 30,741.70 USD/BTC when paying
    /// in USD for BTC).
    Payin,
    /// Payout units per one payin unit (e.g. 0.0000325291 BTC/USD when paying
    /// in USD for BTC).
    Payout,
}

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotPrice {
    /// Currency of which one whole unit is priced.
    pub base: String,
    /// Currency the price is expressed in.
    pub quote: String,
    /// Quote units per one base unit.
    pub price: Decimal,
}

impl SpotPrice {
    /// Creates a new spot price.
    #[must_use]
    pub fn new(base: impl Into<String>, quote: impl Into<String>, price: Decimal) -> Self {
        Self {
            base: base.into(),
            quote: quote.into(),
            price,
        }
    }

    /// Parses a quoted price such as `"30,741.70"`.
    pub fn parse(
        base: impl Into<String>,
        quote: impl Into<String>,
        price: &str,
    ) -> ConversionResult<Self> {
        Ok(Self::new(base, quote, parse_decimal_price(price, true)?))
    }

    /// Returns the inverse price (quote becomes base).
    pub fn inverse(&self) -> ConversionResult<Self> {
        let price = Decimal::ONE
            .checked_div(self.price)
            .ok_or_else(|| ConversionError::ZeroPrice(self.price.to_string()))?;
        Ok(Self::new(self.quote.clone(), self.base.clone(), price))
    }

    /// Returns the side this price is denominated in for a payin -> payout
    /// conversion, or `None` if it prices a different pair.
    #[must_use]
    pub fn side_for(&self, payin: &str, payout: &str) -> Option<QuoteSide> {
        if self.base == payout && self.quote == payin {
            Some(QuoteSide::Payin)
        } else if self.base == payin && self.quote == payout {
            Some(QuoteSide::Payout)
        } else {
            None
        }
    }
}

fn strip_separators(raw: &str, strip: bool) -> String {
    if strip {
        raw.replace(',', "")
    } else {
        raw.to_string()
    }
}

/// Parses a price string as a decimal. Scientific notation is accepted.
pub(crate) fn parse_decimal_price(raw: &str, strip: bool) -> ConversionResult<Decimal> {
    let cleaned = strip_separators(raw, strip);
    let parsed = if cleaned.contains(['e', 'E']) {
        Decimal::from_scientific(&cleaned)
    } else {
        Decimal::from_str(&cleaned)
    };
    parsed.map_err(|e| ConversionError::malformed(cleaned, e.to_string()))
}

/// Parses a price string as a finite `f64`.
pub(crate) fn parse_float_price(raw: &str, strip: bool) -> ConversionResult<f64> {
    let cleaned = strip_separators(raw, strip);
    match cleaned.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        Ok(_) => Err(ConversionError::malformed(cleaned, "price is not finite")),
        Err(e) => Err(ConversionError::malformed(cleaned, e.to_string())),
    }
}

/// Computes payout subunits exactly, truncating toward zero.
///
/// With `price = mantissa / 10^scale` both quotes reduce to one integer
/// fraction:
/// - payin quoted: `amount * payout_per_unit * 10^scale / (mantissa * payin_per_unit)`
/// - payout quoted: `amount * mantissa * payout_per_unit / (10^scale * payin_per_unit)`
///
/// The fraction is evaluated with big integers, so nothing is rounded before
/// the final truncation.
pub(crate) fn decimal_payout(
    side: QuoteSide,
    payin: CurrencyMetadata,
    payout: CurrencyMetadata,
    amount_subunits: i64,
    price: Decimal,
) -> ConversionResult<i128> {
    let amount = BigInt::from(amount_subunits);
    let mantissa = BigInt::from(price.mantissa());
    let price_scale = BigInt::from(10u8).pow(price.scale());
    let payin_per_unit = BigInt::from(payin.subunits_per_unit);
    let payout_per_unit = BigInt::from(payout.subunits_per_unit);

    let (numerator, denominator) = match side {
        QuoteSide::Payin => {
            if price.is_zero() {
                return Err(ConversionError::ZeroPrice(price.to_string()));
            }
            (
                amount * payout_per_unit * price_scale,
                mantissa * payin_per_unit,
            )
        }
        QuoteSide::Payout => (
            amount * mantissa * payout_per_unit,
            price_scale * payin_per_unit,
        ),
    };

    // BigInt division truncates toward zero
    let payout_subunits = numerator / denominator;
    payout_subunits.to_i128().ok_or_else(|| {
        ConversionError::Overflow(format!("{amount_subunits} subunits at {price}"))
    })
}

/// Computes payout subunits with binary floating point, step for step.
///
/// Kept for callers that have to reproduce results of float-based systems.
#[allow(
    clippy::float_arithmetic,
    clippy::float_cmp,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation
)]
pub(crate) fn float_payout(
    side: QuoteSide,
    payin: CurrencyMetadata,
    payout: CurrencyMetadata,
    amount_subunits: i64,
    price: f64,
) -> ConversionResult<i128> {
    let payin_per_unit = payin.subunits_per_unit as f64;
    let payout_per_unit = payout.subunits_per_unit as f64;

    let payout_units = match side {
        QuoteSide::Payin => {
            if price == 0.0 {
                return Err(ConversionError::ZeroPrice(price.to_string()));
            }
            let payin_subunits_per_payout_unit = price * payin_per_unit;
            amount_subunits as f64 / payin_subunits_per_payout_unit
        }
        QuoteSide::Payout => {
            let payout_units_per_payin_unit = payin_per_unit / price;
            amount_subunits as f64 / payout_units_per_payin_unit
        }
    };

    let payout_subunits = (payout_units * payout_per_unit).trunc();
    let limit = 2f64.powi(127);
    if !payout_subunits.is_finite() || payout_subunits >= limit || payout_subunits < -limit {
        tracing::warn!(amount_subunits, price, payout_subunits, "float payout out of range");
        return Err(ConversionError::Overflow(format!(
            "{amount_subunits} subunits at {price}"
        )));
    }

    Ok(payout_subunits as i128)
}

//! Currency service for unit conversion and spot price payouts.
//!
//! This module provides the main service interface for currency operations:
//! parsing and rendering unit strings, and computing how many payout
//! subunits a payin amount buys at a given spot price.

use spotmath_shared::{
    ConversionConfig, ConversionError, ConversionResult, RateArithmetic, SubunitAmount,
};

use super::registry::lookup_currency;
use super::spot::{self, QuoteSide, SpotPrice};
use super::units;

/// Currency service for conversion operations.
///
/// Results are always truncated toward zero, never rounded. The rate
/// arithmetic (decimal or binary float) is chosen by [`ConversionConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrencyService {
    config: ConversionConfig,
}

impl CurrencyService {
    /// Creates a service with the given configuration.
    #[must_use]
    pub const fn new(config: ConversionConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Parses a unit string into a subunit integer string.
    ///
    /// Honors `strip_thousands_separators`.
    pub fn units_string_to_subunits(
        &self,
        amount_units: &str,
        currency_code: &str,
    ) -> ConversionResult<String> {
        let metadata = lookup_currency(currency_code)?;
        units::parse_units(
            amount_units,
            metadata,
            self.config.strip_thousands_separators,
        )
    }

    /// Computes payout subunits from a price quoted in payin units per one
    /// payout unit.
    ///
    /// Say payin is USD and payout is BTC: the spot price reads
    /// 30,741.70 USD/BTC, so `"30,741.70"` is the price.
    ///
    /// # Example
    ///
    /// ```
    /// use spotmath_core::currency::CurrencyService;
    ///
    /// let service = CurrencyService::default();
    /// let sats = service
    ///     .payout_from_payin_quoted_price("USD", "BTC", 10_000, "30,741.70")
    ///     .unwrap();
    /// assert_eq!(sats, 325_291);
    /// ```
    pub fn payout_from_payin_quoted_price(
        &self,
        payin_currency: &str,
        payout_currency: &str,
        payin_amount_subunits: i64,
        price: &str,
    ) -> ConversionResult<i128> {
        self.payout(
            QuoteSide::Payin,
            payin_currency,
            payout_currency,
            payin_amount_subunits,
            price,
        )
    }

    /// Computes payout subunits from a price quoted in payout units per one
    /// payin unit.
    ///
    /// Say payin is USD and payout is BTC: the spot price reads
    /// 0.0000325291 BTC/USD, so `"0.0000325291"` is the price.
    pub fn payout_from_payout_quoted_price(
        &self,
        payin_currency: &str,
        payout_currency: &str,
        payin_amount_subunits: i64,
        price: &str,
    ) -> ConversionResult<i128> {
        self.payout(
            QuoteSide::Payout,
            payin_currency,
            payout_currency,
            payin_amount_subunits,
            price,
        )
    }

    /// Computes payout subunits for a price denominated on `side`.
    pub fn payout(
        &self,
        side: QuoteSide,
        payin_currency: &str,
        payout_currency: &str,
        payin_amount_subunits: i64,
        price: &str,
    ) -> ConversionResult<i128> {
        let payin = lookup_currency(payin_currency)?;
        let payout = lookup_currency(payout_currency)?;
        let strip = self.config.strip_thousands_separators;

        let payout_subunits = match self.config.rate_arithmetic {
            RateArithmetic::Decimal => {
                let price = spot::parse_decimal_price(price, strip)?;
                spot::decimal_payout(side, payin, payout, payin_amount_subunits, price)?
            }
            RateArithmetic::Float => {
                let price = spot::parse_float_price(price, strip)?;
                spot::float_payout(side, payin, payout, payin_amount_subunits, price)?
            }
        };

        tracing::debug!(
            ?side,
            payin_currency,
            payout_currency,
            payin_amount_subunits,
            price,
            %payout_subunits,
            "computed payout"
        );
        Ok(payout_subunits)
    }

    /// Converts a payin amount with a parsed spot price, working out which
    /// side the price is denominated in from its currency pair.
    ///
    /// # Errors
    ///
    /// Returns `PairMismatch` if the spot price does not relate the two
    /// currencies, and `Overflow` if the payin amount exceeds an `i64`.
    pub fn convert(
        &self,
        payin: &SubunitAmount,
        payout_currency: &str,
        spot: &SpotPrice,
    ) -> ConversionResult<SubunitAmount> {
        let side = spot
            .side_for(&payin.currency, payout_currency)
            .ok_or_else(|| ConversionError::PairMismatch {
                base: spot.base.clone(),
                quote: spot.quote.clone(),
                payin: payin.currency.clone(),
                payout: payout_currency.to_string(),
            })?;
        let amount = i64::try_from(payin.subunits)
            .map_err(|_| ConversionError::Overflow(payin.to_string()))?;
        if payin.is_negative() {
            tracing::warn!(%payin, "converting a negative payin amount");
        }

        let payout_subunits = self.payout(
            side,
            &payin.currency,
            payout_currency,
            amount,
            &spot.price.to_string(),
        )?;
        Ok(SubunitAmount::new(payout_subunits, payout_currency))
    }
}

/// Computes payout subunits from a payin-quoted price with the default
/// configuration. See [`CurrencyService::payout_from_payin_quoted_price`].
pub fn payout_from_payin_quoted_price(
    payin_currency: &str,
    payout_currency: &str,
    payin_amount_subunits: i64,
    price: &str,
) -> ConversionResult<i128> {
    CurrencyService::default().payout_from_payin_quoted_price(
        payin_currency,
        payout_currency,
        payin_amount_subunits,
        price,
    )
}

/// Computes payout subunits from a payout-quoted price with the default
/// configuration. See [`CurrencyService::payout_from_payout_quoted_price`].
pub fn payout_from_payout_quoted_price(
    payin_currency: &str,
    payout_currency: &str,
    payin_amount_subunits: i64,
    price: &str,
) -> ConversionResult<i128> {
    CurrencyService::default().payout_from_payout_quoted_price(
        payin_currency,
        payout_currency,
        payin_amount_subunits,
        price,
    )
}

//! Conversion error types.

use thiserror::Error;

/// Result type alias using `ConversionError`.
pub type ConversionResult<T> = Result<T, ConversionError>;

/// Errors raised by currency lookup, unit parsing and spot price conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Currency code is not in the registry.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Amount or price string is not a valid number.
    #[error("Malformed decimal {input:?}: {reason}")]
    MalformedDecimal {
        /// The offending input, after separator stripping.
        input: String,
        /// What the parser rejected.
        reason: String,
    },

    /// Price is zero where it would be used as a divisor.
    #[error("Spot price must not be zero: {0}")]
    ZeroPrice(String),

    /// A value does not fit the numeric type used to compute it.
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),

    /// Spot price pair does not match the payin/payout currencies.
    #[error("Spot price {base}/{quote} does not price {payin} -> {payout}")]
    PairMismatch {
        /// Base currency of the spot price.
        base: String,
        /// Quote currency of the spot price.
        quote: String,
        /// Payin currency of the conversion.
        payin: String,
        /// Payout currency of the conversion.
        payout: String,
    },
}

impl ConversionError {
    /// Shorthand for a `MalformedDecimal` error.
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDecimal {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Returns a stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownCurrency(_) => "UNKNOWN_CURRENCY",
            Self::MalformedDecimal { .. } => "MALFORMED_DECIMAL",
            Self::ZeroPrice(_) => "ZERO_PRICE",
            Self::Overflow(_) => "OVERFLOW",
            Self::PairMismatch { .. } => "PAIR_MISMATCH",
        }
    }
}

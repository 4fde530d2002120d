//! Currency metadata and subunit amounts.
//!
//! Amounts are always counted in integer subunits (cents, satoshis). Unit
//! strings are derived from them, never the other way round.

use serde::{Deserialize, Serialize};

/// Fixed-point scale and display precision of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyMetadata {
    /// Subunits in one whole unit (e.g. 100 cents per dollar).
    pub subunits_per_unit: i64,
    /// Fractional digits used when rendering or parsing unit strings.
    pub significant_digits: usize,
}

impl CurrencyMetadata {
    /// Creates new currency metadata.
    #[must_use]
    pub const fn new(subunits_per_unit: i64, significant_digits: usize) -> Self {
        Self {
            subunits_per_unit,
            significant_digits,
        }
    }
}

/// A signed count of currency subunits.
///
/// Never compared across currencies without conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubunitAmount {
    /// Number of subunits.
    pub subunits: i128,
    /// Currency code (e.g. "BTC", "USD").
    pub currency: String,
}

impl SubunitAmount {
    /// Creates a new subunit amount.
    #[must_use]
    pub fn new(subunits: impl Into<i128>, currency: impl Into<String>) -> Self {
        Self {
            subunits: subunits.into(),
            currency: currency.into(),
        }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.subunits < 0
    }
}

impl std::fmt::Display for SubunitAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.subunits, self.currency)
    }
}

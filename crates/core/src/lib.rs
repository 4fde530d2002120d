//! Currency subunit conversion and spot price payout math for spotmath.
//!
//! This crate contains pure computation with ZERO I/O dependencies.
//! Amounts are integer subunits; unit strings and payouts are derived from
//! them with truncation, never rounding.
//!
//! # Modules
//!
//! - `currency` - Currency registry, unit strings and spot price payouts

pub mod currency;

pub use spotmath_shared::{
    ConversionConfig, ConversionError, ConversionResult, CurrencyMetadata, RateArithmetic,
    SubunitAmount,
};

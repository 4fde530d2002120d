//! Shared types, errors, and configuration for spotmath.
//!
//! This crate provides common types used across all other crates:
//! - Currency metadata and subunit amounts
//! - Conversion error types
//! - Conversion configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::{ConversionConfig, RateArithmetic};
pub use error::{ConversionError, ConversionResult};
pub use types::{CurrencyMetadata, SubunitAmount};

//! Conversion configuration management.

use serde::Deserialize;

/// Arithmetic used for the spot price rate computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateArithmetic {
    /// Exact decimal arithmetic with `rust_decimal`.
    #[default]
    Decimal,
    /// Binary `f64` arithmetic, for callers that must match results produced
    /// by float-based systems bit for bit.
    Float,
}

/// Spot price conversion configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ConversionConfig {
    /// How the rate multiplication and division are carried out.
    #[serde(default)]
    pub rate_arithmetic: RateArithmetic,
    /// Strip `,` thousands separators from prices and amounts before parsing.
    #[serde(default = "default_strip_thousands_separators")]
    pub strip_thousands_separators: bool,
}

fn default_strip_thousands_separators() -> bool {
    true
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            rate_arithmetic: RateArithmetic::default(),
            strip_thousands_separators: default_strip_thousands_separators(),
        }
    }
}

impl ConversionConfig {
    /// Loads configuration from an optional `config/spotmath` file and
    /// `SPOTMATH__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a source is present but cannot be deserialized.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/spotmath").required(false))
            .add_source(config::Environment::with_prefix("SPOTMATH").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

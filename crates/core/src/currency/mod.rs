//! Currency registry, unit string conversion and spot price payouts.

pub mod registry;
pub mod service;
pub mod spot;
pub mod units;

#[cfg(test)]
mod props;

pub use registry::{lookup_currency, supported_currencies};
pub use service::{
    CurrencyService, payout_from_payin_quoted_price, payout_from_payout_quoted_price,
};
pub use spot::{QuoteSide, SpotPrice};
pub use units::{
    format_subunit_amount, parse_subunit_amount, subunits_to_units_string,
    units_string_to_subunits,
};

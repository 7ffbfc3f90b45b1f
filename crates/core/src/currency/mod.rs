//! Currency conversion against an exchange rate table.

pub mod convertor;
pub mod error;
pub mod rate_table;

#[cfg(test)]
mod props;

pub use convertor::{
    ConversionRequest, CurrencyConvertor, TARGET_SCALE, multiply_half_up, round_half_up,
};
pub use error::ConversionError;
pub use rate_table::{ExchangeRateTable, ExternalServiceFailure};

//! Exchange rate lookup.

use std::sync::Arc;

use convertor_shared::types::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// The rate table could not be consulted (network, service outage, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("External service failure: {message}")]
pub struct ExternalServiceFailure {
    message: String,
}

impl ExternalServiceFailure {
    /// Creates a failure with a human-readable reason.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the reason.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Source of exchange rates.
///
/// `source_amount * rate = target_amount`. Lookups are synchronous and the
/// caller keeps no cache; each conversion asks again.
#[cfg_attr(test, mockall::automock)]
pub trait ExchangeRateTable {
    /// Returns the rate from `source` to `target`.
    ///
    /// `Ok(None)` means the table has no rate for the pair.
    fn get_exchange_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<Option<Decimal>, ExternalServiceFailure>;
}

impl<T: ExchangeRateTable + ?Sized> ExchangeRateTable for &T {
    fn get_exchange_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<Option<Decimal>, ExternalServiceFailure> {
        (**self).get_exchange_rate(source, target)
    }
}

impl<T: ExchangeRateTable + ?Sized> ExchangeRateTable for Arc<T> {
    fn get_exchange_rate(
        &self,
        source: &Currency,
        target: &Currency,
    ) -> Result<Option<Decimal>, ExternalServiceFailure> {
        (**self).get_exchange_rate(source, target)
    }
}

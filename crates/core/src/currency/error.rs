//! Conversion error types.

use convertor_shared::AppError;
use convertor_shared::types::Currency;
use thiserror::Error;

use super::rate_table::ExternalServiceFailure;

/// Currency conversion errors.
///
/// Input problems are reported before the rate table is consulted. Everything
/// that goes wrong during the lookup collapses into `UnknownExchangeRate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A required input is missing.
    #[error("Invalid argument: {0} is required")]
    InvalidArgument(&'static str),

    /// No rate is available for the pair, or the rate table failed.
    #[error("Unknown exchange rate from {from} to {to}")]
    UnknownExchangeRate {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
        /// Set when the lookup itself failed rather than finding nothing.
        #[source]
        cause: Option<ExternalServiceFailure>,
    },

    /// The converted amount does not fit in a `Decimal`.
    #[error("Converted amount from {from} to {to} is out of range")]
    Overflow {
        /// Source currency.
        from: Currency,
        /// Target currency.
        to: Currency,
    },
}

impl ConversionError {
    /// Create an unknown rate error for a pair with no rate.
    pub fn unknown_rate(from: Currency, to: Currency) -> Self {
        Self::UnknownExchangeRate {
            from,
            to,
            cause: None,
        }
    }

    /// Create an unknown rate error for a failed lookup.
    pub fn lookup_failed(from: Currency, to: Currency, cause: ExternalServiceFailure) -> Self {
        Self::UnknownExchangeRate {
            from,
            to,
            cause: Some(cause),
        }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        match err {
            ConversionError::InvalidArgument(_) => Self::Validation(err.to_string()),
            ConversionError::UnknownExchangeRate { .. } => Self::NotFound(err.to_string()),
            ConversionError::Overflow { .. } => Self::BusinessRule(err.to_string()),
        }
    }
}

//! Currency conversion.
//!
//! CRITICAL: Rounding strategy:
//! - Multiply with exact decimal arithmetic, never floats
//! - Round half up (midpoint away from zero) to 2 decimal places
//! - Always return exactly 2 decimal places

use bigdecimal::{BigDecimal, RoundingMode};
use convertor_shared::types::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::error::ConversionError;
use super::rate_table::ExchangeRateTable;

/// Number of decimal places in a converted amount.
pub const TARGET_SCALE: u32 = 2;

/// Computes `amount * rate` exactly and rounds it half up to
/// [`TARGET_SCALE`] places.
///
/// The product is formed without intermediate rounding, so operands with up
/// to 28 decimal places each are honoured in full. Returns `None` when the
/// rounded result cannot be held by a `Decimal` with exactly
/// [`TARGET_SCALE`] places (magnitudes above roughly 7.9e26).
///
/// ```
/// use rust_decimal_macros::dec;
/// use convertor_core::currency::multiply_half_up;
///
/// assert_eq!(multiply_half_up(dec!(100), dec!(0.038)).unwrap().to_string(), "3.80");
/// assert_eq!(multiply_half_up(dec!(1000000000000000000000000000), dec!(1)), None);
/// ```
#[must_use]
pub fn multiply_half_up(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    let product = to_big_decimal(amount)? * to_big_decimal(rate)?;
    to_cents(&product)
}

/// Rounds to [`TARGET_SCALE`] places, midpoints away from zero.
///
/// The result always carries exactly [`TARGET_SCALE`] places, so `10`
/// becomes `10.00`, and never a negative zero. `None` when the value is too
/// large to carry [`TARGET_SCALE`] places.
///
/// ```
/// use rust_decimal_macros::dec;
/// use convertor_core::currency::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1.005)).unwrap().to_string(), "1.01");
/// assert_eq!(round_half_up(dec!(-1.005)).unwrap().to_string(), "-1.01");
/// assert_eq!(round_half_up(dec!(7)).unwrap().to_string(), "7.00");
/// ```
#[must_use]
pub fn round_half_up(value: Decimal) -> Option<Decimal> {
    to_cents(&to_big_decimal(value)?)
}

fn to_big_decimal(value: Decimal) -> Option<BigDecimal> {
    // Decimal always displays in plain notation with its full scale.
    value.to_string().parse().ok()
}

fn to_cents(value: &BigDecimal) -> Option<Decimal> {
    let (cents, _) = value
        .with_scale_round(i64::from(TARGET_SCALE), RoundingMode::HalfUp)
        .into_bigint_and_exponent();
    let cents = i128::try_from(&cents).ok()?;
    Decimal::try_from_i128_with_scale(cents, TARGET_SCALE).ok()
}

/// Conversion input as it arrives from an untyped boundary.
///
/// Every field may be missing or `null`; [`CurrencyConvertor::convert_request`]
/// reports that as `InvalidArgument`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    /// Currency of `source_amount`.
    pub source_currency: Option<Currency>,
    /// Currency to convert into.
    pub target_currency: Option<Currency>,
    /// Amount to convert.
    pub source_amount: Option<Decimal>,
}

/// Converts amounts using rates from an [`ExchangeRateTable`].
///
/// Holds no state besides the table, so every call is independent. Sharing a
/// convertor across threads is as safe as sharing its table.
///
/// # Example
///
/// ```
/// use convertor_core::currency::{CurrencyConvertor, ExchangeRateTable, ExternalServiceFailure};
/// use convertor_shared::types::Currency;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// struct FixedRate(Decimal);
///
/// impl ExchangeRateTable for FixedRate {
///     fn get_exchange_rate(
///         &self,
///         _source: &Currency,
///         _target: &Currency,
///     ) -> Result<Option<Decimal>, ExternalServiceFailure> {
///         Ok(Some(self.0))
///     }
/// }
///
/// let convertor = CurrencyConvertor::new(FixedRate(dec!(0.038)));
/// let result = convertor
///     .convert(Some(Currency::CZK), Some(Currency::EUR), Some(dec!(100)))
///     .unwrap();
/// assert_eq!(result.to_string(), "3.80");
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyConvertor<T> {
    rate_table: T,
}

impl<T: ExchangeRateTable> CurrencyConvertor<T> {
    /// Creates a convertor backed by `rate_table`.
    pub const fn new(rate_table: T) -> Self {
        Self { rate_table }
    }

    /// Returns the rate table this convertor consults.
    pub const fn rate_table(&self) -> &T {
        &self.rate_table
    }

    /// Converts `source_amount` from `source_currency` to `target_currency`.
    ///
    /// The result is `source_amount * rate` rounded half up to 2 decimal
    /// places.
    ///
    /// # Errors
    /// - `ConversionError::InvalidArgument` if any input is `None`; the rate
    ///   table is not consulted
    /// - `ConversionError::UnknownExchangeRate` if the table has no rate for
    ///   the pair or the lookup fails
    /// - `ConversionError::Overflow` if the rounded result cannot be held with
    ///   exactly 2 decimal places
    pub fn convert(
        &self,
        source_currency: Option<Currency>,
        target_currency: Option<Currency>,
        source_amount: Option<Decimal>,
    ) -> Result<Decimal, ConversionError> {
        let source = source_currency.ok_or(ConversionError::InvalidArgument("source currency"))?;
        let target = target_currency.ok_or(ConversionError::InvalidArgument("target currency"))?;
        let amount = source_amount.ok_or(ConversionError::InvalidArgument("source amount"))?;

        let rate = match self.rate_table.get_exchange_rate(&source, &target) {
            Ok(Some(rate)) => rate,
            Ok(None) => {
                debug!(%source, %target, "No exchange rate available");
                return Err(ConversionError::unknown_rate(source, target));
            }
            Err(e) => {
                warn!(error = %e, %source, %target, "Exchange rate lookup failed");
                return Err(ConversionError::lookup_failed(source, target, e));
            }
        };

        let target_amount =
            multiply_half_up(amount, rate).ok_or(ConversionError::Overflow {
                from: source,
                to: target,
            })?;

        debug!(%source, %target, %amount, %rate, %target_amount, "Converted amount");
        Ok(target_amount)
    }

    /// Converts a [`ConversionRequest`].
    ///
    /// Same semantics as [`Self::convert`].
    pub fn convert_request(&self, request: &ConversionRequest) -> Result<Decimal, ConversionError> {
        self.convert(
            request.source_currency,
            request.target_currency,
            request.source_amount,
        )
    }
}

//! Property-based tests for currency conversion.
//!
//! - Property 1: Half-up rounding matches an integer reference
//! - Property 2: Output scale and sign
//! - Property 3: Precision and magnitude at the edges of `Decimal`

use proptest::prelude::*;
use rust_decimal::Decimal;

use convertor_shared::types::Currency;

use super::convertor::{CurrencyConvertor, TARGET_SCALE};
use super::error::ConversionError;
use super::rate_table::MockExchangeRateTable;

/// Strategy to generate signed amounts with 0 to 8 decimal places.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 0u32..=8)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate amounts with 24 to 28 decimal places.
fn precise_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64, 24u32..=28)
        .prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate amounts anywhere up to `Decimal::MAX` in magnitude.
fn huge_amount() -> impl Strategy<Value = Decimal> {
    (-MAX_MANTISSA..=MAX_MANTISSA, 0u32..=4)
        .prop_map(|(mantissa, scale)| Decimal::from_i128_with_scale(mantissa, scale))
}

/// Strategy to generate positive exchange rates with 0 to 6 decimal places.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64, 0u32..=6).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Strategy to generate positive exchange rates with 5 to 10 decimal places.
fn precise_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64, 5u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

/// Largest mantissa a `Decimal` can hold (2^96 - 1).
const MAX_MANTISSA: i128 = 79_228_162_514_264_337_593_543_950_335;

fn convertor_with_rate(rate: Decimal) -> CurrencyConvertor<MockExchangeRateTable> {
    let mut table = MockExchangeRateTable::new();
    table
        .expect_get_exchange_rate()
        .returning(move |_, _| Ok(Some(rate)));
    CurrencyConvertor::new(table)
}

/// Rounds `mantissa * 10^-scale` half up to cents using integer arithmetic.
///
/// `None` when the cents do not fit a `Decimal`.
fn reference_half_up(mantissa: i128, scale: u32) -> Option<Decimal> {
    let cents = if scale <= TARGET_SCALE {
        mantissa.checked_mul(10i128.pow(TARGET_SCALE - scale))?
    } else {
        let divisor = 10i128.pow(scale - TARGET_SCALE);
        let mut cents = mantissa / divisor;
        if (mantissa % divisor).abs() * 2 >= divisor {
            cents += mantissa.signum();
        }
        cents
    };
    Decimal::try_from_i128_with_scale(cents, TARGET_SCALE).ok()
}

/// Expected outcome of converting `amount` at `rate` from CZK to EUR.
fn expected_conversion(amount: Decimal, rate: Decimal) -> Result<Decimal, ConversionError> {
    let mantissa = amount.mantissa() * rate.mantissa();
    reference_half_up(mantissa, amount.scale() + rate.scale()).ok_or(ConversionError::Overflow {
        from: Currency::CZK,
        to: Currency::EUR,
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Property 1: Half-up rounding matches an integer reference
    // =========================================================================

    /// *For any* amount and rate, convert() SHALL equal the exact product
    /// rounded half up to cents.
    #[test]
    fn prop_convert_matches_reference(
        amount in any_amount(),
        rate in positive_rate(),
    ) {
        let convertor = convertor_with_rate(rate);
        let result = convertor.convert(Some(Currency::CZK), Some(Currency::EUR), Some(amount));

        let expected = expected_conversion(amount, rate);
        prop_assert_eq!(
            &result, &expected,
            "{} * {} should round to {:?}",
            amount, rate, expected
        );
    }

    /// *For any* amount and rate, calling convert() twice SHALL produce the
    /// same result.
    #[test]
    fn prop_convert_is_deterministic(
        amount in any_amount(),
        rate in positive_rate(),
    ) {
        let convertor = convertor_with_rate(rate);
        let first = convertor.convert(Some(Currency::EUR), Some(Currency::USD), Some(amount));
        let second = convertor.convert(Some(Currency::EUR), Some(Currency::USD), Some(amount));
        prop_assert_eq!(first, second, "Conversion should be deterministic");
    }

    // =========================================================================
    // Property 2: Output scale and sign
    // =========================================================================

    /// *For any* amount and rate, the result SHALL carry exactly 2 decimal
    /// places.
    #[test]
    fn prop_convert_scale_is_two(
        amount in any_amount(),
        rate in positive_rate(),
    ) {
        let convertor = convertor_with_rate(rate);
        let result = convertor
            .convert(Some(Currency::USD), Some(Currency::JPY), Some(amount))
            .unwrap();
        prop_assert_eq!(result.scale(), TARGET_SCALE);
    }

    /// *For any* amount and positive rate, the result SHALL NOT flip sign.
    /// Tiny amounts may round to zero.
    #[test]
    fn prop_convert_preserves_sign(
        amount in any_amount(),
        rate in positive_rate(),
    ) {
        let convertor = convertor_with_rate(rate);
        let result = convertor
            .convert(Some(Currency::GBP), Some(Currency::EUR), Some(amount))
            .unwrap();

        if amount.is_sign_negative() {
            prop_assert!(result <= Decimal::ZERO, "{} should not become positive", amount);
        } else {
            prop_assert!(result >= Decimal::ZERO, "{} should not become negative", amount);
        }
    }

    /// *For any* amount, a missing currency SHALL fail before any lookup.
    #[test]
    fn prop_missing_currency_never_looks_up(amount in any_amount()) {
        let mut table = MockExchangeRateTable::new();
        table.expect_get_exchange_rate().never();
        let convertor = CurrencyConvertor::new(table);

        let result = convertor.convert(None, Some(Currency::EUR), Some(amount));
        prop_assert_eq!(result, Err(ConversionError::InvalidArgument("source currency")));
    }

    // =========================================================================
    // Property 3: Precision and magnitude at the edges of `Decimal`
    // =========================================================================

    /// *For any* operands whose combined scale exceeds 28, convert() SHALL
    /// round the exact product, not a pre-rounded one.
    #[test]
    fn prop_convert_beyond_28_places(
        amount in precise_amount(),
        rate in precise_rate(),
    ) {
        let convertor = convertor_with_rate(rate);
        let result = convertor.convert(Some(Currency::CZK), Some(Currency::EUR), Some(amount));
        prop_assert_eq!(result, expected_conversion(amount, rate));
    }

    /// *For any* amount up to `Decimal::MAX`, convert() SHALL either return
    /// the exact rounded value with 2 places or report `Overflow`.
    #[test]
    fn prop_convert_huge_amounts(
        amount in huge_amount(),
        rate in positive_rate(),
    ) {
        let convertor = convertor_with_rate(rate);
        let result = convertor.convert(Some(Currency::CZK), Some(Currency::EUR), Some(amount));

        prop_assert_eq!(&result, &expected_conversion(amount, rate));
        if let Ok(value) = result {
            prop_assert_eq!(value.scale(), TARGET_SCALE);
        }
    }
}

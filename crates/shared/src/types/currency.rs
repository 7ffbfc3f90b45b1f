//! ISO 4217 currency codes.
//!
//! A `Currency` is just its three-letter code. Nothing here knows about
//! minor units or which codes are currently in circulation; any
//! well-formed code is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing a currency code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// The code is not three ASCII letters.
    #[error("Invalid ISO 4217 currency code: {0:?}")]
    InvalidCode(String),
}

/// An ISO 4217 currency code (e.g. `EUR`, `CZK`).
///
/// Always stored uppercase, so equality is equality of codes.
///
/// # Example
/// ```
/// use convertor_shared::types::Currency;
///
/// let eur: Currency = "eur".parse().unwrap();
/// assert_eq!(eur, Currency::EUR);
/// assert_eq!(eur.code(), "EUR");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

/// Generates associated constants for commonly used codes.
macro_rules! iso_currencies {
    ($($name:ident => $code:literal, $doc:expr;)*) => {
        impl Currency {
            $(
                #[doc = $doc]
                pub const $name: Self = Self(*$code);
            )*
        }
    };
}

iso_currencies! {
    CZK => b"CZK", "Czech Koruna";
    EUR => b"EUR", "Euro";
    GBP => b"GBP", "Pound Sterling";
    JPY => b"JPY", "Japanese Yen";
    USD => b"USD", "US Dollar";
}

impl Currency {
    /// Parses a currency code, normalising it to uppercase.
    ///
    /// # Errors
    /// - `CurrencyError::InvalidCode` unless `code` is exactly three ASCII letters
    pub fn new(code: &str) -> Result<Self, CurrencyError> {
        let &[a, b, c] = code.as_bytes() else {
            return Err(CurrencyError::InvalidCode(code.to_string()));
        };

        if ![a, b, c].iter().all(u8::is_ascii_alphabetic) {
            return Err(CurrencyError::InvalidCode(code.to_string()));
        }

        Ok(Self([
            a.to_ascii_uppercase(),
            b.to_ascii_uppercase(),
            c.to_ascii_uppercase(),
        ]))
    }

    /// Returns the three-letter code.
    pub fn code(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.code()).finish()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = CurrencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

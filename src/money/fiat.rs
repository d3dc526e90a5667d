// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fiat currency definitions

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::registry::CurrencyRegistry;
use crate::token::{FixedToken, Token};
use crate::types::DisplayScale;

/// A government-issued currency identified by its ISO 4217 code
///
/// Fiat currencies are fixed tokens: their definition is small and almost
/// never changes, so it is embedded by value in every amount.
///
/// # Examples
///
/// ```
/// use tokenkit::{DisplayScale, FiatCurrency, Token, GBP};
///
/// let sterling = FiatCurrency::get_instance("GBP").unwrap();
/// assert_eq!(sterling, GBP);
/// assert_eq!(sterling.symbol(), "GBP");
/// assert_eq!(sterling.display_scale(), DisplayScale::FIAT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiatCurrency {
    symbol: Cow<'static, str>,
    description: Cow<'static, str>,
    display_scale: DisplayScale,
}

impl FiatCurrency {
    /// Define a currency from static strings, usable in constants
    pub const fn from_static(
        symbol: &'static str,
        description: &'static str,
        display_scale: DisplayScale,
    ) -> Self {
        Self {
            symbol: Cow::Borrowed(symbol),
            description: Cow::Borrowed(description),
            display_scale,
        }
    }

    /// Define a currency at runtime, e.g. for a custom registry
    ///
    /// The symbol is not checked here.
    /// [`CurrencyRegistryBuilder::build`](crate::CurrencyRegistryBuilder::build)
    /// rejects symbols that are not three uppercase ASCII letters.
    pub fn new(
        symbol: impl Into<String>,
        description: impl Into<String>,
        display_scale: DisplayScale,
    ) -> Self {
        Self {
            symbol: Cow::Owned(symbol.into()),
            description: Cow::Owned(description.into()),
            display_scale,
        }
    }

    /// Look up a code in the process-wide registry
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCurrencyCode`] if the code is not a
    /// known fiat currency.
    pub fn get_instance(code: &str) -> Result<Self, RegistryError> {
        CurrencyRegistry::global().fiat(code).cloned()
    }

    /// ISO 4217 currency code
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Token for FiatCurrency {
    fn display_scale(&self) -> DisplayScale {
        self.display_scale
    }
}

impl FixedToken for FiatCurrency {}

impl std::fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// Pound sterling
pub const GBP: FiatCurrency =
    FiatCurrency::from_static("GBP", "British Pound Sterling", DisplayScale::FIAT);
/// US dollar
pub const USD: FiatCurrency = FiatCurrency::from_static("USD", "US Dollar", DisplayScale::FIAT);
/// Euro
pub const EUR: FiatCurrency = FiatCurrency::from_static("EUR", "Euro", DisplayScale::FIAT);
/// Swiss franc
pub const CHF: FiatCurrency = FiatCurrency::from_static("CHF", "Swiss Franc", DisplayScale::FIAT);
/// Japanese yen, which has no minor unit
pub const JPY: FiatCurrency = FiatCurrency::from_static("JPY", "Japanese Yen", DisplayScale::ZERO);
/// Canadian dollar
pub const CAD: FiatCurrency =
    FiatCurrency::from_static("CAD", "Canadian Dollar", DisplayScale::FIAT);
/// Australian dollar
pub const AUD: FiatCurrency =
    FiatCurrency::from_static("AUD", "Australian Dollar", DisplayScale::FIAT);
/// New Zealand dollar
pub const NZD: FiatCurrency =
    FiatCurrency::from_static("NZD", "New Zealand Dollar", DisplayScale::FIAT);
/// Singapore dollar
pub const SGD: FiatCurrency =
    FiatCurrency::from_static("SGD", "Singapore Dollar", DisplayScale::FIAT);
/// Hong Kong dollar
pub const HKD: FiatCurrency =
    FiatCurrency::from_static("HKD", "Hong Kong Dollar", DisplayScale::FIAT);
/// Swedish krona
pub const SEK: FiatCurrency = FiatCurrency::from_static("SEK", "Swedish Krona", DisplayScale::FIAT);
/// Norwegian krone
pub const NOK: FiatCurrency =
    FiatCurrency::from_static("NOK", "Norwegian Krone", DisplayScale::FIAT);

/// Fiat currencies known to the default registry
pub(crate) static BUILTIN_FIAT: [FiatCurrency; 12] =
    [GBP, USD, EUR, CHF, JPY, CAD, AUD, NZD, SGD, HKD, SEK, NOK];

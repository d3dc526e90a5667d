// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Built-in currency families
//!
//! Money is a fixed token: currency properties do change occasionally, but
//! rarely enough that embedding the definition is the right trade. Networks
//! that want evolving currency definitions can model them as evolvable
//! tokens and reference them through a [`TokenPointer`](crate::TokenPointer).

mod digital;
mod fiat;

pub use digital::{DigitalCurrency, BTC, DOGE, ETH, XRP};
pub use fiat::{FiatCurrency, AUD, CAD, CHF, EUR, GBP, HKD, JPY, NOK, NZD, SEK, SGD, USD};

pub(crate) use digital::BUILTIN_DIGITAL;
pub(crate) use fiat::BUILTIN_FIAT;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;
use crate::registry::CurrencyRegistry;
use crate::token::{FixedToken, Token, TokenVariant};
use crate::types::DisplayScale;

/// Any built-in currency
///
/// Serialized with a `type` tag of `"fiat"` or `"digital"`.
///
/// # Examples
///
/// ```
/// use tokenkit::{Money, RegistryError, BTC};
///
/// assert_eq!(Money::lookup("BTC").unwrap(), Money::from(BTC));
/// assert!(matches!(
///     Money::lookup("XYZ"),
///     Err(RegistryError::UnknownCurrencyCode { .. })
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Money {
    Fiat(FiatCurrency),
    Digital(DigitalCurrency),
}

impl Money {
    /// Look up a code in the process-wide registry, fiat first
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCurrencyCode`] if neither family knows
    /// the code.
    pub fn lookup(code: &str) -> Result<Self, RegistryError> {
        CurrencyRegistry::global().lookup(code)
    }

    pub fn symbol(&self) -> &str {
        match self {
            Money::Fiat(currency) => currency.symbol(),
            Money::Digital(currency) => currency.symbol(),
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Money::Fiat(currency) => currency.description(),
            Money::Digital(currency) => currency.description(),
        }
    }
}

impl Token for Money {
    fn display_scale(&self) -> DisplayScale {
        match self {
            Money::Fiat(currency) => currency.display_scale(),
            Money::Digital(currency) => currency.display_scale(),
        }
    }
}

impl FixedToken for Money {}

impl From<FiatCurrency> for Money {
    fn from(currency: FiatCurrency) -> Self {
        Money::Fiat(currency)
    }
}

impl From<DigitalCurrency> for Money {
    fn from(currency: DigitalCurrency) -> Self {
        Money::Digital(currency)
    }
}

impl From<FiatCurrency> for TokenVariant<Money> {
    fn from(currency: FiatCurrency) -> Self {
        TokenVariant::Fixed(currency.into())
    }
}

impl From<DigitalCurrency> for TokenVariant<Money> {
    fn from(currency: DigitalCurrency) -> Self {
        TokenVariant::Fixed(currency.into())
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
